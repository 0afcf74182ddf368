//! Request handling on top of a game repository.

use crate::protocol::{Placement, Request, Response};
use carcassonne_core::{
    Coord, GameAction, GameError, GameEvent, GameRepository, GameSnapshot, GameState, Player,
    PlayerId, RepositoryError, TileCatalog,
};
use dashmap::DashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

/// Length of generated game ids
const GAME_ID_LEN: usize = 9;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Game {0} not found")]
    GameNotFound(String),

    #[error(transparent)]
    Game(#[from] GameError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Short upper-case id (`"3F9A1C07B"`)
fn new_game_id() -> String {
    Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(GAME_ID_LEN)
        .collect::<String>()
        .to_uppercase()
}

/// Game service state.
///
/// Every mutation of a game runs load, change, save while holding that
/// game's lock, so concurrent requests on one game apply one at a time.
pub struct GameService<R: GameRepository> {
    repository: R,
    catalog: TileCatalog,
    /// Per-game locks of requests in flight
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl<R: GameRepository> GameService<R> {
    pub fn new(repository: R, catalog: TileCatalog) -> Self {
        Self {
            repository,
            catalog,
            locks: DashMap::new(),
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn catalog(&self) -> &TileCatalog {
        &self.catalog
    }

    /// Handle a request, turning failures into `Response::Error`.
    pub fn handle(&self, request: Request) -> Response {
        match self.dispatch(request) {
            Ok(response) => response,
            Err(e) => {
                warn!("Request failed: {}", e);
                Response::Error {
                    message: e.to_string(),
                }
            }
        }
    }

    fn dispatch(&self, request: Request) -> Result<Response, ServiceError> {
        match request {
            Request::CreateGame => Ok(Response::GameCreated {
                game_id: self.create_game()?,
            }),

            Request::JoinGame {
                game_id,
                player_name,
            } => {
                let (player_id, players) = self.join_game(&game_id, player_name)?;
                Ok(Response::Joined {
                    game_id,
                    player_id,
                    players,
                })
            }

            Request::StartGame { game_id } => Ok(Response::Game {
                game: self.start_game(&game_id)?,
            }),

            Request::LeaveGame { game_id, player_id } => {
                let game_deleted = self.leave_game(&game_id, &player_id)?;
                Ok(Response::Left {
                    game_id,
                    player_id,
                    game_deleted,
                })
            }

            Request::GetGame { game_id } => Ok(Response::Game {
                game: self.get_game(&game_id)?,
            }),

            Request::Action {
                game_id,
                player_id,
                action,
            } => {
                let (events, game) = self.apply_action(&game_id, &player_id, action)?;
                Ok(Response::ActionResult { events, game })
            }

            Request::ValidPlacements { game_id } => {
                let placements = self
                    .valid_placements(&game_id)?
                    .into_iter()
                    .map(|(coord, rotation)| Placement {
                        x: coord.x,
                        y: coord.y,
                        rotation,
                    })
                    .collect();
                Ok(Response::Placements { placements })
            }

            Request::TileDefinitions => Ok(Response::TileDefinitions {
                tiles: self.catalog.clone(),
            }),
        }
    }

    // ==================== Operations ====================

    /// Create an empty game and return its id
    pub fn create_game(&self) -> Result<String, ServiceError> {
        let mut game_id = new_game_id();
        while self.repository.load(&game_id)?.is_some() {
            game_id = new_game_id();
        }

        self.repository.save(&GameState::new(game_id.clone()))?;
        info!("Game {} created, waiting for players", game_id);
        Ok(game_id)
    }

    /// Add a player; returns their id and the updated player list
    pub fn join_game(
        &self,
        game_id: &str,
        name: String,
    ) -> Result<(PlayerId, Vec<Player>), ServiceError> {
        self.with_game(game_id, |game| {
            let player_id = game.join(name)?;
            Ok((player_id, game.players.clone()))
        })
    }

    pub fn start_game(&self, game_id: &str) -> Result<GameSnapshot, ServiceError> {
        self.with_game(game_id, |game| {
            game.start(&self.catalog)?;
            Ok(game.snapshot(&self.catalog))
        })
    }

    /// Remove a player. Returns true when the game was deleted because
    /// nobody is left.
    pub fn leave_game(&self, game_id: &str, player_id: &str) -> Result<bool, ServiceError> {
        self.locked(game_id, || {
            let mut game = self.load(game_id)?;
            let empty = game.leave(player_id)?;
            if empty {
                self.repository.delete(game_id)?;
                info!("Game {} deleted, all players left", game_id);
            } else {
                self.repository.save(&game)?;
            }
            Ok(empty)
        })
    }

    pub fn get_game(&self, game_id: &str) -> Result<GameSnapshot, ServiceError> {
        self.locked(game_id, || Ok(self.load(game_id)?.snapshot(&self.catalog)))
    }

    /// Apply a player's action and return its events with the new state
    pub fn apply_action(
        &self,
        game_id: &str,
        player_id: &str,
        action: GameAction,
    ) -> Result<(Vec<GameEvent>, GameSnapshot), ServiceError> {
        self.with_game(game_id, |game| {
            let events = game.apply_action(player_id, action, &self.catalog)?;
            Ok((events, game.snapshot(&self.catalog)))
        })
    }

    pub fn valid_placements(&self, game_id: &str) -> Result<Vec<(Coord, i32)>, ServiceError> {
        self.locked(game_id, || {
            Ok(self.load(game_id)?.valid_placements(&self.catalog))
        })
    }

    // ==================== Helper Methods ====================

    /// Run `f` while holding the game's lock.
    ///
    /// Locks live in the map only while some request holds or waits for
    /// them. The last user out removes the entry, so ids of unknown,
    /// finished or deleted games leave nothing behind.
    fn locked<T, F>(&self, game_id: &str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce() -> Result<T, ServiceError>,
    {
        let lock = self
            .locks
            .entry(game_id.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();

        let result = {
            let _guard = lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            f()
        };

        drop(lock);
        // Only the map's own handle left
        self.locks
            .remove_if(game_id, |_, lock| Arc::strong_count(lock) == 1);
        result
    }

    fn load(&self, game_id: &str) -> Result<GameState, ServiceError> {
        self.repository
            .load(game_id)?
            .ok_or_else(|| ServiceError::GameNotFound(game_id.to_string()))
    }

    /// Load, mutate and save a game under its lock. Nothing is saved when
    /// `f` fails.
    fn with_game<T, F>(&self, game_id: &str, f: F) -> Result<T, ServiceError>
    where
        F: FnOnce(&mut GameState) -> Result<T, ServiceError>,
    {
        self.locked(game_id, || {
            let mut game = self.load(game_id)?;
            let result = f(&mut game)?;
            self.repository.save(&game)?;
            Ok(result)
        })
    }
}
