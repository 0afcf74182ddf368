//! JSON-lines protocol messages for the game service.

use carcassonne_core::{GameAction, GameEvent, GameSnapshot, Player, PlayerId, TileCatalog};
use serde::{Deserialize, Serialize};

/// Messages sent from client to service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Request {
    /// Open a new game lobby
    CreateGame,

    /// Join a waiting game
    JoinGame { game_id: String, player_name: String },

    /// Deal the deck and start playing
    StartGame { game_id: String },

    /// Leave a game; the last one out deletes it
    LeaveGame { game_id: String, player_id: PlayerId },

    /// Fetch the game with current scores
    GetGame { game_id: String },

    /// Submit a game action
    Action {
        game_id: String,
        player_id: PlayerId,
        action: GameAction,
    },

    /// Slots and rotations where the current tile fits
    ValidPlacements { game_id: String },

    /// Request the tile catalog
    TileDefinitions,
}

/// Messages sent from service to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload")]
pub enum Response {
    /// Game created successfully
    GameCreated { game_id: String },

    /// Joined game successfully
    Joined {
        game_id: String,
        player_id: PlayerId,
        players: Vec<Player>,
    },

    /// Left game successfully
    Left {
        game_id: String,
        player_id: PlayerId,
        game_deleted: bool,
    },

    /// Game state with scores
    Game { game: GameSnapshot },

    /// Action applied successfully
    ActionResult {
        events: Vec<GameEvent>,
        game: GameSnapshot,
    },

    /// Legal placements for the current tile
    Placements { placements: Vec<Placement> },

    /// All tile definitions
    TileDefinitions { tiles: TileCatalog },

    /// Error occurred
    Error { message: String },
}

/// One legal spot for the current tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub x: i32,
    pub y: i32,
    pub rotation: i32,
}
