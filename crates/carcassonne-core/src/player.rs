//! Player state and meeple stock.
//!
//! This module contains:
//! - Player struct with identity, colour and remaining meeples
//! - Player colours and their random assignment
//! - Meeple kinds

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Player identifier (`"player1"`, `"player2"`, ...)
pub type PlayerId = String;

/// Owner recorded on the starting tile, which belongs to nobody
pub const SYSTEM_OWNER: &str = "system";

/// Followers each player starts with
pub const FOLLOWERS_PER_PLAYER: u32 = 7;

/// Abbots each player starts with
pub const ABBOTS_PER_PLAYER: u32 = 1;

/// Player colour, also the colour of their meeples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Yellow,
    Red,
    Green,
    Blue,
    Black,
}

impl PlayerColor {
    /// Every colour; also the player limit of a game
    pub const ALL: [PlayerColor; 5] = [
        PlayerColor::Yellow,
        PlayerColor::Red,
        PlayerColor::Green,
        PlayerColor::Blue,
        PlayerColor::Black,
    ];

    /// All colours in random order
    pub fn shuffled<R: Rng>(rng: &mut R) -> Vec<PlayerColor> {
        let mut colors = Self::ALL.to_vec();
        colors.shuffle(rng);
        colors
    }
}

/// Kind of meeple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeepleKind {
    /// Regular meeple
    #[default]
    Follower,
    /// Abbot, one per player
    Abbot,
}

/// A player in a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    /// Assigned when the game starts
    pub color: Option<PlayerColor>,
    /// Followers left in stock
    pub meeples: u32,
    /// Abbots left in stock
    pub abbots: u32,
}

impl Player {
    /// Create a new player with a full stock
    pub fn new(player_id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            name: name.into(),
            color: None,
            meeples: FOLLOWERS_PER_PLAYER,
            abbots: ABBOTS_PER_PLAYER,
        }
    }

    /// Refill the stock to starting amounts
    pub fn reset_stock(&mut self) {
        self.meeples = FOLLOWERS_PER_PLAYER;
        self.abbots = ABBOTS_PER_PLAYER;
    }

    /// How many meeples of this kind are left
    pub fn stock(&self, kind: MeepleKind) -> u32 {
        match kind {
            MeepleKind::Follower => self.meeples,
            MeepleKind::Abbot => self.abbots,
        }
    }

    /// Take a meeple from the stock. Returns false if none are left.
    pub fn take_meeple(&mut self, kind: MeepleKind) -> bool {
        let count = match kind {
            MeepleKind::Follower => &mut self.meeples,
            MeepleKind::Abbot => &mut self.abbots,
        };
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Put a meeple back into the stock
    pub fn return_meeple(&mut self, kind: MeepleKind) {
        match kind {
            MeepleKind::Follower => self.meeples += 1,
            MeepleKind::Abbot => self.abbots += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_new_player_stock() {
        let p = Player::new("player1", "Alice");
        assert_eq!(p.meeples, 7);
        assert_eq!(p.abbots, 1);
        assert!(p.color.is_none());
    }

    #[test]
    fn test_take_and_return() {
        let mut p = Player::new("player1", "Alice");
        assert!(p.take_meeple(MeepleKind::Abbot));
        assert!(!p.take_meeple(MeepleKind::Abbot));
        assert_eq!(p.stock(MeepleKind::Abbot), 0);

        p.return_meeple(MeepleKind::Abbot);
        assert_eq!(p.stock(MeepleKind::Abbot), 1);

        for _ in 0..7 {
            assert!(p.take_meeple(MeepleKind::Follower));
        }
        assert!(!p.take_meeple(MeepleKind::Follower));

        p.reset_stock();
        assert_eq!(p.meeples, 7);
    }

    #[test]
    fn test_shuffled_colors_are_distinct() {
        let mut rng = StdRng::seed_from_u64(7);
        let colors = PlayerColor::shuffled(&mut rng);
        let unique: HashSet<_> = colors.iter().collect();
        assert_eq!(unique.len(), PlayerColor::ALL.len());
    }

    #[test]
    fn test_color_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&PlayerColor::Yellow).unwrap(),
            "\"yellow\""
        );
        assert_eq!(
            serde_json::to_string(&MeepleKind::Abbot).unwrap(),
            "\"abbot\""
        );
    }
}
