//! Local key-value persistence for study data
//!
//! The whole progression state is one JSON document stored under
//! [`SNAPSHOT_KEY`]; the last generated deck lives under [`DECK_KEY`].
//!
//! ```text
//! StudyApp ──► SnapshotStore ──► KeyValueStore
//!                                 ├── SqliteStore  (~/.studybuddy/studybuddy.db)
//!                                 └── MemoryStore  (tests)
//! ```

mod db;
mod memory;

pub use db::SqliteStore;
pub use memory::MemoryStore;

use thiserror::Error;
use tracing::{debug, warn};

use crate::flashcards::Flashcard;
use crate::progression::Snapshot;

/// Key holding the serialized profile and stats
pub const SNAPSHOT_KEY: &str = "studyBuddyData";

/// Key holding the most recently generated deck
pub const DECK_KEY: &str = "studyBuddyDeck";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Minimal string key-value storage
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<()> {
        (**self).remove(key)
    }
}

/// Typed access to the snapshot and deck on top of a key-value store
pub struct SnapshotStore<S> {
    store: S,
}

impl<S: KeyValueStore> SnapshotStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the snapshot, falling back to defaults.
    ///
    /// Absent, unreadable, malformed or insane state all yield the defaults;
    /// this never fails.
    pub fn load(&self) -> Snapshot {
        let raw = match self.store.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No saved study data, using defaults");
                return Snapshot::default();
            }
            Err(e) => {
                warn!("Failed to read study data, using defaults: {}", e);
                return Snapshot::default();
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) if snapshot.is_sane() => snapshot,
            Ok(_) => {
                warn!("Saved study data failed sanity checks, using defaults");
                Snapshot::default()
            }
            Err(e) => {
                warn!("Saved study data is malformed, using defaults: {}", e);
                Snapshot::default()
            }
        }
    }

    /// Overwrite the stored snapshot
    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let json = serde_json::to_string(snapshot)?;
        self.store.set(SNAPSHOT_KEY, &json)?;
        debug!(bytes = json.len(), "Saved study data");
        Ok(())
    }

    /// Drop stored progression state and return fresh defaults
    pub fn reset(&self) -> Result<Snapshot> {
        self.store.remove(SNAPSHOT_KEY)?;
        Ok(Snapshot::default())
    }

    /// Load the last generated deck (empty when none or unreadable)
    pub fn load_deck(&self) -> Result<Vec<Flashcard>> {
        let Some(raw) = self.store.get(DECK_KEY)? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(cards) => Ok(cards),
            Err(e) => {
                warn!("Saved deck is malformed, ignoring it: {}", e);
                Ok(Vec::new())
            }
        }
    }

    pub fn save_deck(&self, cards: &[Flashcard]) -> Result<()> {
        let json = serde_json::to_string(cards)?;
        self.store.set(DECK_KEY, &json)
    }

    /// Access the underlying store
    pub fn inner(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progression::{apply_session_result, PracticeResult};

    #[test]
    fn test_load_absent_gives_defaults() {
        let store = SnapshotStore::new(MemoryStore::new());
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn test_save_load_roundtrip() {
        let store = SnapshotStore::new(MemoryStore::new());
        let mut snapshot = Snapshot::default();
        apply_session_result(&mut snapshot, PracticeResult::new(27, 30)).unwrap();

        store.save(&snapshot).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, snapshot);

        // Saving the reloaded copy produces the same document
        store.save(&loaded).unwrap();
        let first = serde_json::to_string(&snapshot).unwrap();
        let second = store.inner().get(SNAPSHOT_KEY).unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_malformed_json_gives_defaults() {
        let kv = MemoryStore::new();
        kv.set(SNAPSHOT_KEY, "{\"user\": 42").unwrap();
        let store = SnapshotStore::new(kv);
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn test_insane_snapshot_gives_defaults() {
        let mut snapshot = Snapshot::default();
        snapshot.user.next_level_xp = 0;
        let kv = MemoryStore::new();
        kv.set(SNAPSHOT_KEY, &serde_json::to_string(&snapshot).unwrap())
            .unwrap();

        let store = SnapshotStore::new(kv);
        assert_eq!(store.load(), Snapshot::default());
    }

    #[test]
    fn test_legacy_blob_loads() {
        let legacy = r#"{
            "user": {"name": "Student", "level": 5, "levelName": "Study Master",
                     "xp": 20, "nextLevelXP": 2250, "badges": ["first_card"]},
            "stats": {"totalXP": 4000, "dailyXP": 0, "currentStreak": 2,
                      "cardsMastered": 80, "dailyCards": 0, "accuracyRate": 70,
                      "subjects": [], "leaderboard": [{"name": "Student", "xp": 4000}]}
        }"#;
        let kv = MemoryStore::new();
        kv.set(SNAPSHOT_KEY, legacy).unwrap();

        let snapshot = SnapshotStore::new(kv).load();
        assert_eq!(snapshot.user.level, 5);
        assert_eq!(snapshot.user.next_level_xp, 2250);
        assert_eq!(snapshot.stats.total_xp, 4000);
        assert_eq!(snapshot.stats.last_active_day, None);
    }

    #[test]
    fn test_reset_removes_state() {
        let store = SnapshotStore::new(MemoryStore::new());
        let mut snapshot = Snapshot::default();
        snapshot.user.name = "Ada".to_string();
        store.save(&snapshot).unwrap();

        let fresh = store.reset().unwrap();
        assert_eq!(fresh, Snapshot::default());
        assert_eq!(store.inner().get(SNAPSHOT_KEY).unwrap(), None);
    }

    #[test]
    fn test_deck_roundtrip_and_missing() {
        let store = SnapshotStore::new(MemoryStore::new());
        assert!(store.load_deck().unwrap().is_empty());

        let cards = crate::flashcards::generate_flashcards(
            "Mitochondria produce ATP through cellular respiration in the cell.",
            &Default::default(),
        )
        .unwrap();
        store.save_deck(&cards).unwrap();
        assert_eq!(store.load_deck().unwrap(), cards);
    }
}
