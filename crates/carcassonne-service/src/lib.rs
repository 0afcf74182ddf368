//! Carcassonne game service.
//!
//! Hosts games on top of `carcassonne-core`: a JSON protocol, per-game
//! serialized request handling and pluggable storage.

pub mod protocol;
pub mod server;
pub mod service;
pub mod store;

pub use protocol::{Placement, Request, Response};
pub use server::run_server;
pub use service::{GameService, ServiceError};
pub use store::{FileStore, MemoryStore};
