//! Persistence seam for game records.
//!
//! The engine never keeps games itself; whoever drives it passes a
//! repository explicitly.

use crate::game::GameState;
use thiserror::Error;

/// Errors raised by a game store
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt game record: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Invalid game id {0:?}")]
    InvalidId(String),
}

/// Load and save games by id
pub trait GameRepository {
    /// Fetch a game, `None` if no record exists
    fn load(&self, game_id: &str) -> Result<Option<GameState>, RepositoryError>;

    /// Insert or overwrite the record for `game.game_id`
    fn save(&self, game: &GameState) -> Result<(), RepositoryError>;

    /// Drop a record; deleting a missing game is not an error
    fn delete(&self, game_id: &str) -> Result<(), RepositoryError>;
}
