//! Game actions that players can take.
//!
//! This module defines all possible actions in the game and the events
//! that result from those actions.

use crate::coord::Coord;
use crate::player::{MeepleKind, PlayerId};
use crate::tiles::{AreaType, TileType};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All possible actions a player can take
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameAction {
    // ==================== Tile Actions ====================
    /// Turn the current tile a quarter clockwise
    RotateTile,
    /// Put the current tile on a reserved slot
    PlaceTile { x: i32, y: i32 },

    // ==================== Meeple Actions ====================
    /// Put a meeple on a named area of the tile placed this turn
    PlaceMeeple {
        x: i32,
        y: i32,
        area_name: String,
        #[serde(default)]
        kind: MeepleKind,
    },

    // ==================== Turn Management ====================
    /// Undo the meeple, or failing that the tile, placed this turn
    CancelAction,
    /// End your turn after placing a tile
    EndTurn,
    /// Pass without placing a tile
    SkipTurn,
}

/// Events that occur as a result of actions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The current tile was turned
    TileRotated { player: PlayerId, rotation: i32 },

    /// A tile was placed on the board
    TilePlaced {
        player: PlayerId,
        location: Coord,
        tile_type: TileType,
        rotation: i32,
    },

    /// A meeple was put on a tile
    MeeplePlaced {
        player: PlayerId,
        location: Coord,
        area_name: String,
        area_type: AreaType,
        kind: MeepleKind,
    },

    /// A meeple went back to its owner's stock
    MeepleReturned {
        player: PlayerId,
        location: Coord,
        kind: MeepleKind,
    },

    /// A tile placed this turn was taken back
    TileRemoved { player: PlayerId, location: Coord },

    /// Turn ended
    TurnEnded {
        player: PlayerId,
        next_player: PlayerId,
    },

    /// The deck ran out
    GameFinished { scores: HashMap<PlayerId, u32> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_json_shape() {
        let action: GameAction = serde_json::from_str(
            r#"{ "PlaceMeeple": { "x": 1, "y": -2, "area_name": "castle" } }"#,
        )
        .unwrap();
        assert_eq!(
            action,
            GameAction::PlaceMeeple {
                x: 1,
                y: -2,
                area_name: "castle".into(),
                kind: MeepleKind::Follower,
            }
        );

        let action: GameAction = serde_json::from_str(r#""EndTurn""#).unwrap();
        assert_eq!(action, GameAction::EndTurn);
    }
}
