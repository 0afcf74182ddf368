//! Carcassonne game service over stdin/stdout.

use carcassonne_core::{GameRepository, TileCatalog};
use carcassonne_service::{run_server, FileStore, GameService, MemoryStore};
use std::io;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout carries the protocol
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    info!("Starting Carcassonne service...");

    let catalog = TileCatalog::standard()?;
    info!("Loaded {} tile definitions", catalog.len());

    // Persist to GAMES_DIR when set, otherwise keep games in memory
    match std::env::var("GAMES_DIR") {
        Ok(dir) => {
            let store = FileStore::new(&dir)?;
            info!("Storing games in {}", store.dir().display());
            serve(GameService::new(store, catalog))
        }
        Err(_) => {
            info!("Storing games in memory");
            serve(GameService::new(MemoryStore::new(), catalog))
        }
    }
}

fn serve<R: GameRepository>(service: GameService<R>) -> anyhow::Result<()> {
    run_server(&service, io::stdin().lock(), io::stdout().lock())
}
