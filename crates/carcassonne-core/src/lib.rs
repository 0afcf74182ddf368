//! Carcassonne - rules engine for a tile placement game
//!
//! This crate provides the core game logic, including:
//! - Grid coordinates and the sparse tile board
//! - Tile definitions with typed edge segments
//! - Placement validation against neighbouring edges
//! - Feature tracing and scoring
//! - Game state machine with lobby, deck and turn handling
//!
//! # Architecture
//!
//! The rules are pure functions over a [`Board`] and a [`TileLookup`]. They
//! never fail: unknown tiles simply have no edges. [`GameState`] layers the
//! turn rules on top and reports rejections as [`GameError`].
//!
//! # Modules
//!
//! - [`coord`]: Grid coordinates and directions
//! - [`tiles`]: Tile definitions and the catalog
//! - [`edges`]: Rotation-aware edge lookup and segment matching
//! - [`board`]: Placed tiles and reserved slots
//! - [`placement`]: Placement legality
//! - [`feature`]: Region tracing
//! - [`scoring`]: Feature and board scoring
//! - [`game`]: Game state machine
//! - [`repository`]: Persistence trait

pub mod actions;
pub mod board;
pub mod coord;
pub mod edges;
pub mod feature;
pub mod game;
pub mod placement;
pub mod player;
pub mod repository;
pub mod scoring;
pub mod tiles;

// Re-export commonly used types
pub use actions::{GameAction, GameEvent};
pub use board::{Board, Meeple, PlacedTile};
pub use coord::{Coord, CoordParseError, Direction};
pub use edges::{effective_edge_indices, facing_segments, segments_match};
pub use feature::{all_features, trace_feature, Feature};
pub use game::{standard_deck, GameError, GameSnapshot, GameState, GameStatus, STANDARD_DECK};
pub use placement::{valid_placements, validate_placement};
pub use player::{MeepleKind, Player, PlayerColor, PlayerId, SYSTEM_OWNER};
pub use repository::{GameRepository, RepositoryError};
pub use scoring::{calculate_scores, score_feature, FeatureScore};
pub use tiles::{
    AreaDef, AreaType, CatalogError, EdgeDef, Segment, TileCatalog, TileDefinition, TileLookup,
    TileType,
};
