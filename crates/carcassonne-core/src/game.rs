//! Core game state machine.
//!
//! This module contains the main `GameState` struct and all game logic:
//! lobby management, the deck, turn order and the actions players take.

use crate::actions::{GameAction, GameEvent};
use crate::board::{Board, Meeple, PlacedTile};
use crate::coord::Coord;
use crate::placement::{self, validate_placement};
use crate::player::{Player, PlayerColor, PlayerId, SYSTEM_OWNER};
use crate::scoring::calculate_scores;
use crate::tiles::{TileCatalog, TileLookup, TileType};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info};

/// Tile images making up a standard deck, duplicates included
pub const STANDARD_DECK: [&str; 20] = [
    "CastleCenter0.png",
    "CastleCenterEntry0.png",
    "CastleCenterEntry3.png",
    "CastleCenterSide3.png",
    "CastleCenterSides3.png",
    "CastleEdge3.png",
    "CastleEdgeRoad2.png",
    "CastleMini0.png",
    "CastleMini0.png",
    "CastleSides0.png",
    "CastleSides0.png",
    "CastleSidesEdgeRoad0.png",
    "CastleSidesEdgeRoad0.png",
    "CastleSidesEdgeRoad0.png",
    "CastleSidesEdgeRoad0.png",
    "CastleSidesQuad0.png",
    "CastleSidesRoad0.png",
    "CastleSidesRoad0.png",
    "CastleTube0.png",
    "CastleTube0.png",
];

/// One colour per player
pub const MAX_PLAYERS: usize = PlayerColor::ALL.len();

/// Degrees added by one rotation of the current tile
const ROTATION_STEP: i32 = 90;

/// Resolve the standard deck against a catalog
pub fn standard_deck(catalog: &TileCatalog) -> Result<Vec<TileType>, GameError> {
    STANDARD_DECK
        .iter()
        .map(|image| {
            catalog
                .resolve_image(image)
                .map_err(|_| GameError::UnknownTile(image.to_string()))
        })
        .collect()
}

/// Lifecycle of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    /// Lobby open, players may join
    #[default]
    Waiting,
    Active,
    /// Deck exhausted
    Finished,
}

/// Errors that can occur when applying actions
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("Not your turn")]
    NotYourTurn,

    #[error("Game is not in progress")]
    GameNotActive,

    #[error("Game has already started")]
    GameAlreadyStarted,

    #[error("Not enough players to start")]
    NotEnoughPlayers,

    #[error("Too many players for the available colours")]
    TooManyPlayers,

    #[error("Player not found")]
    PlayerNotFound,

    #[error("A tile was already placed this turn")]
    TileAlreadyPlaced,

    #[error("Invalid tile position")]
    InvalidPosition,

    #[error("A tile is already on this position")]
    CellOccupied,

    #[error("Tile edges do not match the neighbours")]
    InvalidPlacement,

    #[error("No tile to play")]
    NoCurrentTile,

    #[error("No tile on this position")]
    NoTile,

    #[error("This tile does not belong to you")]
    NotYourTile,

    #[error("Meeples can only go on the tile placed this turn")]
    TileNotActive,

    #[error("A meeple is already on this tile")]
    MeepleAlreadyPlaced,

    #[error("Area not found on this tile")]
    AreaNotFound,

    #[error("No meeples of this kind left")]
    NoMeeplesLeft,

    #[error("Nothing to cancel")]
    NothingToCancel,

    #[error("No tile placed this turn")]
    NoTilePlaced,

    #[error("Deck is empty")]
    EmptyDeck,

    #[error("Unknown tile {0:?}")]
    UnknownTile(String),
}

/// The complete game state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub game_id: String,
    pub status: GameStatus,
    /// The game board
    pub board: Board,
    /// Players in turn order
    pub players: Vec<Player>,
    /// Player whose turn it is, once started
    pub current_turn: Option<PlayerId>,
    /// Whether the current player has placed their tile
    pub current_move_made: bool,
    /// Rotation the current tile will be placed with
    pub tile_rotation: i32,
    /// Tiles not yet played, the current tile included
    pub deck: Vec<TileType>,
    /// Tile the current player has to place
    pub current_tile: Option<TileType>,
    pub remaining_cards: usize,
}

/// A game state annotated with the current scores
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    #[serde(flatten)]
    pub state: GameState,
    pub scores: HashMap<PlayerId, u32>,
}

impl GameState {
    /// Create an empty game waiting for players
    pub fn new(game_id: impl Into<String>) -> Self {
        Self {
            game_id: game_id.into(),
            status: GameStatus::Waiting,
            board: Board::new(),
            players: Vec::new(),
            current_turn: None,
            current_move_made: false,
            tile_rotation: 0,
            deck: Vec::new(),
            current_tile: None,
            remaining_cards: 0,
        }
    }

    /// Get a player by ID
    pub fn get_player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.player_id == id)
    }

    /// Get a mutable player by ID
    fn get_player_mut(&mut self, id: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.player_id == id)
    }

    /// Check if the game is finished
    pub fn is_finished(&self) -> bool {
        self.status == GameStatus::Finished
    }

    // ==================== Lobby ====================

    /// Add a player to the lobby and return their ID
    pub fn join(&mut self, name: impl Into<String>) -> Result<PlayerId, GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }

        // Numbering follows the player count, skipping ids still in use
        let mut n = self.players.len() + 1;
        while self.get_player(&format!("player{n}")).is_some() {
            n += 1;
        }
        let player = Player::new(format!("player{n}"), name);
        let id = player.player_id.clone();

        info!(
            "Player {:?} joined game {} as {}, {} players",
            player.name,
            self.game_id,
            id,
            self.players.len() + 1
        );
        self.players.push(player);
        Ok(id)
    }

    /// Remove a player. Returns true when nobody is left.
    ///
    /// If it was the leaving player's turn, the turn passes to whoever now
    /// holds their seat. A tile placed during the unfinished turn is taken
    /// back, so the current tile stays in play for the next player.
    pub fn leave(&mut self, player_id: &str) -> Result<bool, GameError> {
        let index = self
            .players
            .iter()
            .position(|p| p.player_id == player_id)
            .ok_or(GameError::PlayerNotFound)?;
        let removed = self.players.remove(index);
        info!("Player {:?} left game {}", removed.name, self.game_id);

        if self.current_turn.as_deref() == Some(player_id) {
            if let Some(location) = self.board.active_tile() {
                self.board.remove(location);
                debug!("Took back the unfinished tile at {}", location);
            }
            self.current_turn = if self.players.is_empty() {
                None
            } else {
                Some(self.players[index % self.players.len()].player_id.clone())
            };
            self.current_move_made = false;
        }

        Ok(self.players.is_empty())
    }

    // ==================== Start ====================

    /// Start with the standard deck
    pub fn start(&mut self, catalog: &TileCatalog) -> Result<(), GameError> {
        self.start_with_rng(catalog, &mut rand::thread_rng())
    }

    /// Start with the standard deck and a caller-supplied RNG
    pub fn start_with_rng<R: Rng>(
        &mut self,
        catalog: &TileCatalog,
        rng: &mut R,
    ) -> Result<(), GameError> {
        let deck = standard_deck(catalog)?;
        self.start_with_deck(deck, rng)
    }

    /// Start with an arbitrary deck.
    ///
    /// Colours are shuffled onto players and stocks refilled. A random tile
    /// leaves the deck to become the starting tile at the origin, then the
    /// first current tile is drawn from what remains. Player one moves first.
    pub fn start_with_deck<R: Rng>(
        &mut self,
        mut deck: Vec<TileType>,
        rng: &mut R,
    ) -> Result<(), GameError> {
        if self.status != GameStatus::Waiting {
            return Err(GameError::GameAlreadyStarted);
        }
        if self.players.is_empty() {
            return Err(GameError::NotEnoughPlayers);
        }
        if self.players.len() > MAX_PLAYERS {
            return Err(GameError::TooManyPlayers);
        }
        if deck.is_empty() {
            return Err(GameError::EmptyDeck);
        }

        for (player, color) in self
            .players
            .iter_mut()
            .zip(PlayerColor::shuffled(rng))
        {
            player.color = Some(color);
            player.reset_stock();
        }

        let start_tile = deck.remove(rng.gen_range(0..deck.len()));
        let mut start = PlacedTile::new(start_tile.clone(), 0, SYSTEM_OWNER);
        start.active = false;
        self.board = Board::new();
        self.board.place(Coord::new(0, 0), start);

        self.current_tile = Some(deck.choose(rng).cloned().unwrap_or(start_tile.clone()));
        self.deck = deck;
        self.remaining_cards = self.deck.len();
        self.current_move_made = false;
        self.tile_rotation = 0;
        self.current_turn = Some(self.players[0].player_id.clone());
        self.status = GameStatus::Active;

        info!(
            "Game {} started with tile {}, {} cards left",
            self.game_id, start_tile, self.remaining_cards
        );
        Ok(())
    }

    // ==================== Queries ====================

    /// Current score of every player
    pub fn scores<L: TileLookup + ?Sized>(&self, lookup: &L) -> HashMap<PlayerId, u32> {
        calculate_scores(&self.board, &self.players, lookup)
    }

    /// The state together with current scores
    pub fn snapshot<L: TileLookup + ?Sized>(&self, lookup: &L) -> GameSnapshot {
        GameSnapshot {
            state: self.clone(),
            scores: self.scores(lookup),
        }
    }

    /// Every slot and rotation where the current tile fits
    pub fn valid_placements<L: TileLookup + ?Sized>(&self, lookup: &L) -> Vec<(Coord, i32)> {
        match &self.current_tile {
            Some(tile) => placement::valid_placements(&self.board, lookup, tile),
            None => Vec::new(),
        }
    }

    // ==================== Actions ====================

    /// Apply an action to the game state
    pub fn apply_action<L: TileLookup + ?Sized>(
        &mut self,
        player: &str,
        action: GameAction,
        lookup: &L,
    ) -> Result<Vec<GameEvent>, GameError> {
        self.apply_action_with_rng(player, action, lookup, &mut rand::thread_rng())
    }

    /// Apply an action, drawing tiles with a caller-supplied RNG
    pub fn apply_action_with_rng<L: TileLookup + ?Sized, R: Rng>(
        &mut self,
        player: &str,
        action: GameAction,
        lookup: &L,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>, GameError> {
        if self.status != GameStatus::Active {
            return Err(GameError::GameNotActive);
        }
        if self.current_turn.as_deref() != Some(player) {
            return Err(GameError::NotYourTurn);
        }

        let mut events = Vec::new();

        match action {
            // ==================== Tile Actions ====================
            GameAction::RotateTile => {
                self.tile_rotation = (self.tile_rotation + ROTATION_STEP) % 360;
                debug!("{} rotated the tile to {}", player, self.tile_rotation);
                events.push(GameEvent::TileRotated {
                    player: player.to_string(),
                    rotation: self.tile_rotation,
                });
            }

            GameAction::PlaceTile { x, y } => {
                let location = Coord::new(x, y);
                let tile_type = self.validate_tile_placement(location, lookup)?;

                self.board.place(
                    location,
                    PlacedTile::new(tile_type.clone(), self.tile_rotation, player),
                );
                self.current_move_made = true;

                info!("{} placed {} at {}", player, tile_type, location);
                events.push(GameEvent::TilePlaced {
                    player: player.to_string(),
                    location,
                    tile_type,
                    rotation: self.tile_rotation,
                });
            }

            // ==================== Meeple Actions ====================
            GameAction::PlaceMeeple {
                x,
                y,
                area_name,
                kind,
            } => {
                let location = Coord::new(x, y);
                let tile = self.validate_meeple_tile(player, location)?;
                let area_type = lookup
                    .find_area_by_name(&tile.tile_type, &area_name)
                    .map(|area| area.area_type)
                    .ok_or(GameError::AreaNotFound)?;

                let owner = self
                    .get_player_mut(player)
                    .ok_or(GameError::PlayerNotFound)?;
                if !owner.take_meeple(kind) {
                    return Err(GameError::NoMeeplesLeft);
                }
                let meeple = Meeple {
                    color: owner.color,
                    segment: area_name.clone(),
                    segment_type: area_type,
                    kind,
                };

                if let Some(tile) = self.board.get_mut(location) {
                    tile.meeple = Some(meeple);
                }

                info!(
                    "{} put a {:?} on {} ({}) at {}",
                    player, kind, area_name, area_type, location
                );
                events.push(GameEvent::MeeplePlaced {
                    player: player.to_string(),
                    location,
                    area_name,
                    area_type,
                    kind,
                });
            }

            // ==================== Turn Management ====================
            GameAction::CancelAction => {
                let location = self.board.active_tile().ok_or(GameError::NothingToCancel)?;
                let meeple = self
                    .board
                    .get_mut(location)
                    .and_then(|tile| tile.meeple.take());

                match meeple {
                    Some(meeple) => {
                        if let Some(p) = self.get_player_mut(player) {
                            p.return_meeple(meeple.kind);
                        }
                        info!("{} took back the meeple at {}", player, location);
                        events.push(GameEvent::MeepleReturned {
                            player: player.to_string(),
                            location,
                            kind: meeple.kind,
                        });
                    }
                    None => {
                        self.board.remove(location);
                        self.current_move_made = false;
                        info!("{} took back the tile at {}", player, location);
                        events.push(GameEvent::TileRemoved {
                            player: player.to_string(),
                            location,
                        });
                    }
                }
            }

            GameAction::EndTurn => {
                if !self.current_move_made {
                    return Err(GameError::NoTilePlaced);
                }
                events.extend(self.advance_turn(player, lookup, rng)?);
            }

            GameAction::SkipTurn => {
                events.extend(self.advance_turn(player, lookup, rng)?);
            }
        }

        Ok(events)
    }

    // ==================== Helper Methods ====================

    fn validate_tile_placement<L: TileLookup + ?Sized>(
        &self,
        location: Coord,
        lookup: &L,
    ) -> Result<TileType, GameError> {
        if self.current_move_made {
            return Err(GameError::TileAlreadyPlaced);
        }
        if !self.board.contains(location) {
            return Err(GameError::InvalidPosition);
        }
        if !self.board.is_reserved(location) {
            return Err(GameError::CellOccupied);
        }
        let tile_type = self.current_tile.clone().ok_or(GameError::NoCurrentTile)?;
        if !validate_placement(&self.board, lookup, &tile_type, self.tile_rotation, location) {
            return Err(GameError::InvalidPlacement);
        }
        Ok(tile_type)
    }

    fn validate_meeple_tile(&self, player: &str, location: Coord) -> Result<&PlacedTile, GameError> {
        if !self.board.contains(location) {
            return Err(GameError::InvalidPosition);
        }
        let tile = self.board.get(location).ok_or(GameError::NoTile)?;
        if tile.owner != player {
            return Err(GameError::NotYourTile);
        }
        if !tile.active {
            return Err(GameError::TileNotActive);
        }
        if tile.meeple.is_some() {
            return Err(GameError::MeepleAlreadyPlaced);
        }
        Ok(tile)
    }

    /// Pass the turn on, retire the current tile and draw the next one.
    /// Finishes the game when the deck runs out.
    fn advance_turn<L: TileLookup + ?Sized, R: Rng>(
        &mut self,
        player: &str,
        lookup: &L,
        rng: &mut R,
    ) -> Result<Vec<GameEvent>, GameError> {
        let index = self
            .players
            .iter()
            .position(|p| p.player_id == player)
            .ok_or(GameError::PlayerNotFound)?;
        let next_player = self.players[(index + 1) % self.players.len()]
            .player_id
            .clone();

        self.current_move_made = false;
        self.board.deactivate_all();
        self.current_turn = Some(next_player.clone());

        if let Some(current) = &self.current_tile {
            if let Some(pos) = self.deck.iter().position(|t| t == current) {
                self.deck.remove(pos);
            }
        }
        if let Some(next_tile) = self.deck.choose(rng) {
            self.current_tile = Some(next_tile.clone());
        }
        self.remaining_cards = self.deck.len();

        let mut events = vec![GameEvent::TurnEnded {
            player: player.to_string(),
            next_player,
        }];

        if self.deck.is_empty() {
            self.status = GameStatus::Finished;
            let scores = self.scores(lookup);
            info!("Game {} finished, final scores: {:?}", self.game_id, scores);
            events.push(GameEvent::GameFinished { scores });
        } else {
            debug!("{} cards left in game {}", self.remaining_cards, self.game_id);
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> TileCatalog {
        TileCatalog::standard().unwrap()
    }

    fn started_game(players: usize) -> GameState {
        let mut game = GameState::new("TEST");
        for i in 0..players {
            game.join(format!("P{i}")).unwrap();
        }
        game.start_with_rng(&catalog(), &mut StdRng::seed_from_u64(42))
            .unwrap();
        game
    }

    #[test]
    fn test_standard_deck_resolves() {
        let deck = standard_deck(&catalog()).unwrap();
        assert_eq!(deck.len(), 20);
        assert_eq!(deck[0], TileType::new("CastleCenter0"));
    }

    #[test]
    fn test_join_assigns_ids() {
        let mut game = GameState::new("TEST");
        assert_eq!(game.join("Alice").unwrap(), "player1");
        assert_eq!(game.join("Bob").unwrap(), "player2");
        assert_eq!(game.players[1].meeples, 7);
        assert_eq!(game.players[1].abbots, 1);
    }

    #[test]
    fn test_join_skips_used_ids() {
        let mut game = GameState::new("TEST");
        game.join("Alice").unwrap();
        game.join("Bob").unwrap();
        assert!(!game.leave("player1").unwrap());
        // Count is back to one, but player2 is still taken
        assert_eq!(game.join("Carol").unwrap(), "player3");
    }

    #[test]
    fn test_join_limits() {
        let mut game = GameState::new("TEST");
        for i in 0..MAX_PLAYERS {
            game.join(format!("P{i}")).unwrap();
        }
        assert_eq!(game.join("Extra"), Err(GameError::TooManyPlayers));

        let mut game = started_game(2);
        assert_eq!(game.join("Late"), Err(GameError::GameAlreadyStarted));
        assert_eq!(
            game.start(&catalog()),
            Err(GameError::GameAlreadyStarted)
        );
    }

    #[test]
    fn test_start_requires_players() {
        let mut game = GameState::new("TEST");
        assert_eq!(game.start(&catalog()), Err(GameError::NotEnoughPlayers));
    }

    #[test]
    fn test_start_sets_up_board_and_turn() {
        let game = started_game(3);

        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.current_turn.as_deref(), Some("player1"));
        assert_eq!(game.deck.len(), 19);
        assert_eq!(game.remaining_cards, 19);
        assert_eq!(game.board.tile_count(), 1);
        assert_eq!(game.board.reserved_slots().count(), 4);

        let start = game.board.get(Coord::new(0, 0)).unwrap();
        assert_eq!(start.owner, SYSTEM_OWNER);
        assert_eq!(start.rotation, 0);
        assert!(!start.active);

        let current = game.current_tile.as_ref().unwrap();
        assert!(game.deck.contains(current));

        let colors: Vec<_> = game.players.iter().filter_map(|p| p.color).collect();
        assert_eq!(colors.len(), 3);
        assert!(colors.iter().all(|c| colors.iter().filter(|o| *o == c).count() == 1));
    }

    #[test]
    fn test_actions_require_turn_and_active_game() {
        let tiles = catalog();
        let mut waiting = GameState::new("TEST");
        waiting.join("A").unwrap();
        assert_eq!(
            waiting.apply_action("player1", GameAction::RotateTile, &tiles),
            Err(GameError::GameNotActive)
        );

        let mut game = started_game(2);
        assert_eq!(
            game.apply_action("player2", GameAction::RotateTile, &tiles),
            Err(GameError::NotYourTurn)
        );
    }

    #[test]
    fn test_rotate_wraps() {
        let tiles = catalog();
        let mut game = started_game(2);
        for expected in [90, 180, 270, 0] {
            let events = game
                .apply_action("player1", GameAction::RotateTile, &tiles)
                .unwrap();
            assert_eq!(game.tile_rotation, expected);
            assert!(matches!(
                events[0],
                GameEvent::TileRotated { rotation, .. } if rotation == expected
            ));
        }
    }

    #[test]
    fn test_place_tile_position_errors() {
        let tiles = catalog();
        let mut game = started_game(2);
        assert_eq!(
            game.apply_action("player1", GameAction::PlaceTile { x: 5, y: 5 }, &tiles),
            Err(GameError::InvalidPosition)
        );
        assert_eq!(
            game.apply_action("player1", GameAction::PlaceTile { x: 0, y: 0 }, &tiles),
            Err(GameError::CellOccupied)
        );
    }

    #[test]
    fn test_end_turn_requires_tile() {
        let tiles = catalog();
        let mut game = started_game(2);
        assert_eq!(
            game.apply_action("player1", GameAction::EndTurn, &tiles),
            Err(GameError::NoTilePlaced)
        );
        assert_eq!(
            game.apply_action("player1", GameAction::CancelAction, &tiles),
            Err(GameError::NothingToCancel)
        );
    }

    #[test]
    fn test_skip_turn_retires_tile() {
        let tiles = catalog();
        let mut game = started_game(2);
        let mut rng = StdRng::seed_from_u64(1);

        let events = game
            .apply_action_with_rng("player1", GameAction::SkipTurn, &tiles, &mut rng)
            .unwrap();
        assert_eq!(
            events,
            vec![GameEvent::TurnEnded {
                player: "player1".into(),
                next_player: "player2".into(),
            }]
        );
        assert_eq!(game.deck.len(), 18);
        assert_eq!(game.remaining_cards, 18);
        assert_eq!(game.current_turn.as_deref(), Some("player2"));
    }

    #[test]
    fn test_leave_passes_turn() {
        let mut game = started_game(3);
        assert!(!game.leave("player1").unwrap());
        assert_eq!(game.current_turn.as_deref(), Some("player2"));
        assert_eq!(game.leave("player1"), Err(GameError::PlayerNotFound));

        assert!(!game.leave("player3").unwrap());
        assert!(game.leave("player2").unwrap());
        assert_eq!(game.current_turn, None);
    }

    #[test]
    fn test_leave_mid_turn_takes_tile_back() {
        let tiles = catalog();
        let mut rng = StdRng::seed_from_u64(3);
        let mut game = GameState::new("TEST");
        for name in ["A", "B", "C"] {
            game.join(name).unwrap();
        }
        game.start_with_deck(vec![TileType::new("CastleCenter0"); 3], &mut rng)
            .unwrap();

        game.apply_action("player1", GameAction::PlaceTile { x: 1, y: 0 }, &tiles)
            .unwrap();
        game.apply_action(
            "player1",
            GameAction::PlaceMeeple {
                x: 1,
                y: 0,
                area_name: "castle".into(),
                kind: crate::player::MeepleKind::Follower,
            },
            &tiles,
        )
        .unwrap();
        assert!(!game.leave("player1").unwrap());

        assert_eq!(game.board.tile_count(), 1);
        assert!(game.board.is_reserved(Coord::new(1, 0)));
        assert!(!game.current_move_made);
        assert_eq!(game.deck.len(), 2);

        for (player, x) in [("player2", 1), ("player3", -1)] {
            game.apply_action_with_rng(player, GameAction::PlaceTile { x, y: 0 }, &tiles, &mut rng)
                .unwrap();
            game.apply_action_with_rng(player, GameAction::EndTurn, &tiles, &mut rng)
                .unwrap();
        }

        assert!(game.is_finished());
        assert_eq!(game.board.tile_count(), 3);
        assert_eq!(game.remaining_cards, 0);
    }

    #[test]
    fn test_error_serializes() {
        let json = serde_json::to_string(&GameError::NotYourTurn).unwrap();
        assert_eq!(json, "\"NotYourTurn\"");
    }
}
