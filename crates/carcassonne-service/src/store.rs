//! Game record storage backends.

use carcassonne_core::{GameRepository, GameState, RepositoryError};
use dashmap::DashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Games kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    games: DashMap<String, GameState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored games
    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameRepository for MemoryStore {
    fn load(&self, game_id: &str) -> Result<Option<GameState>, RepositoryError> {
        Ok(self.games.get(game_id).map(|game| game.clone()))
    }

    fn save(&self, game: &GameState) -> Result<(), RepositoryError> {
        self.games.insert(game.game_id.clone(), game.clone());
        Ok(())
    }

    fn delete(&self, game_id: &str) -> Result<(), RepositoryError> {
        self.games.remove(game_id);
        Ok(())
    }
}

/// Games stored as `<dir>/<game_id>.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Use `dir`, creating it if needed
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, RepositoryError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Record path for an id. Ids are alphanumeric so they can never leave
    /// the store directory.
    fn path(&self, game_id: &str) -> Result<PathBuf, RepositoryError> {
        if game_id.is_empty() || !game_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(RepositoryError::InvalidId(game_id.to_string()));
        }
        Ok(self.dir.join(format!("{game_id}.json")))
    }
}

impl GameRepository for FileStore {
    fn load(&self, game_id: &str) -> Result<Option<GameState>, RepositoryError> {
        let path = self.path(game_id)?;
        match fs::read_to_string(&path) {
            Ok(text) => Ok(Some(serde_json::from_str(&text)?)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, game: &GameState) -> Result<(), RepositoryError> {
        let path = self.path(&game.game_id)?;
        fs::write(&path, serde_json::to_string_pretty(game)?)?;
        debug!("Saved game {} to {}", game.game_id, path.display());
        Ok(())
    }

    fn delete(&self, game_id: &str) -> Result<(), RepositoryError> {
        match fs::remove_file(self.path(game_id)?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use carcassonne_core::TileCatalog;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use tempfile::tempdir;

    fn started_game(id: &str) -> GameState {
        let mut game = GameState::new(id);
        game.join("Alice").unwrap();
        game.join("Bob").unwrap();
        game.start_with_rng(&TileCatalog::standard().unwrap(), &mut StdRng::seed_from_u64(1))
            .unwrap();
        game
    }

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert!(store.load("ABC").unwrap().is_none());

        let game = started_game("ABC");
        store.save(&game).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load("ABC").unwrap(), Some(game));

        store.delete("ABC").unwrap();
        store.delete("ABC").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_round_trip() {
        let tmp = tempdir().unwrap();
        let dir = tmp.path();
        let store = FileStore::new(dir).unwrap();
        assert!(store.load("ABC").unwrap().is_none());

        let game = started_game("ABC");
        store.save(&game).unwrap();
        assert!(dir.join("ABC.json").exists());
        assert_eq!(store.load("ABC").unwrap(), Some(game));

        store.delete("ABC").unwrap();
        assert!(!dir.join("ABC.json").exists());
        store.delete("ABC").unwrap();
    }

    #[test]
    fn test_file_store_rejects_path_ids() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();
        assert!(matches!(
            store.load("../etc"),
            Err(RepositoryError::InvalidId(_))
        ));
        assert!(matches!(store.load(""), Err(RepositoryError::InvalidId(_))));
    }

    #[test]
    fn test_file_store_corrupt_record() {
        let tmp = tempdir().unwrap();
        let store = FileStore::new(tmp.path()).unwrap();
        fs::write(tmp.path().join("BAD.json"), "{ not json").unwrap();
        assert!(matches!(store.load("BAD"), Err(RepositoryError::Serde(_))));
    }
}
