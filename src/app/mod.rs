//! Study app coordinator
//!
//! [`StudyApp`] is the single owner of the canonical [`Snapshot`]. Everything
//! that changes progression goes through [`StudyApp::handle`] as a
//! [`Command`] value; the app applies it in memory first and then writes the
//! whole snapshot to the store. A failed write leaves the new state in memory
//! and marks it dirty so `Command::Flush` can retry without recomputing.

mod runner;

pub use runner::{spawn, AppHandle};

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{info, warn};

use crate::flashcards::Flashcard;
use crate::progression::{
    apply_session_result, roll_day, today, DayChange, PracticeResult, ProgressionError,
    SessionOutcome, Snapshot,
};
use crate::store::{KeyValueStore, SnapshotStore, StoreError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    InvalidResult(#[from] ProgressionError),

    #[error("Failed to persist study data: {0}")]
    Persistence(#[from] StoreError),

    #[error("Study app is no longer running")]
    Stopped,
}

/// Requests understood by the coordinator
#[derive(Debug, Clone)]
pub enum Command {
    /// A practice session finished with this score
    PracticeComplete(PracticeResult),
    /// Retry writing the snapshot after a failed save
    Flush,
    /// Forget all progress and start from defaults
    Reset,
    /// Remember a freshly generated deck
    RecordDeck(Vec<Flashcard>),
    /// Fetch the remembered deck
    LoadDeck,
    /// Fetch a copy of the current snapshot
    Snapshot,
}

#[derive(Debug, Clone)]
pub enum Reply {
    Progress(SessionOutcome),
    Deck(Vec<Flashcard>),
    Snapshot(Box<Snapshot>),
    Done,
}

pub struct StudyApp<S> {
    store: SnapshotStore<S>,
    snapshot: Snapshot,
    dirty: bool,
    last_outcome: Option<SessionOutcome>,
}

impl<S: KeyValueStore> StudyApp<S> {
    /// Load state from the store (defaults when nothing usable is stored)
    pub fn open(store: S) -> Self {
        let store = SnapshotStore::new(store);
        let snapshot = store.load();
        Self {
            store,
            snapshot,
            dirty: false,
            last_outcome: None,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// True when in-memory state has not been written yet
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Outcome of the most recent applied session, saved or not
    pub fn last_outcome(&self) -> Option<&SessionOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn handle(&mut self, command: Command) -> Result<Reply, AppError> {
        match command {
            Command::PracticeComplete(result) => self
                .complete_practice(result, today())
                .map(Reply::Progress),
            Command::Flush => self.flush().map(|_| Reply::Done),
            Command::Reset => self.reset().map(|_| Reply::Done),
            Command::RecordDeck(cards) => {
                self.store.save_deck(&cards)?;
                Ok(Reply::Done)
            }
            Command::LoadDeck => Ok(Reply::Deck(self.store.load_deck()?)),
            Command::Snapshot => Ok(Reply::Snapshot(Box::new(self.snapshot.clone()))),
        }
    }

    /// Apply a finished session as of `today` and persist the result.
    ///
    /// An invalid result changes nothing. A persistence failure keeps the
    /// updated state in memory.
    pub fn complete_practice(
        &mut self,
        result: PracticeResult,
        today: NaiveDate,
    ) -> Result<SessionOutcome, AppError> {
        if !result.is_valid() {
            return Err(ProgressionError::InvalidResult {
                correct: result.correct,
                total: result.total,
            }
            .into());
        }

        let mut next = self.snapshot.clone();
        match roll_day(&mut next.stats, today) {
            DayChange::Extended { streak } => info!(streak, "Daily streak extended"),
            DayChange::Broken => info!("Daily streak reset"),
            DayChange::Started | DayChange::SameDay => {}
        }
        let outcome = apply_session_result(&mut next, result)?;

        self.snapshot = next;
        self.dirty = true;
        self.last_outcome = Some(outcome.clone());

        self.flush()?;
        Ok(outcome)
    }

    /// Write the snapshot if it has unsaved changes
    pub fn flush(&mut self) -> Result<(), AppError> {
        if !self.dirty {
            return Ok(());
        }
        if let Err(e) = self.store.save(&self.snapshot) {
            warn!("Failed to save study data: {}", e);
            return Err(e.into());
        }
        self.dirty = false;
        info!(total_xp = self.snapshot.stats.total_xp, "Study data saved");
        Ok(())
    }

    /// Reset to defaults. Memory is reset even if the store cannot be cleared.
    pub fn reset(&mut self) -> Result<(), AppError> {
        self.snapshot = Snapshot::default();
        self.last_outcome = None;
        match self.store.reset() {
            Ok(_) => {
                self.dirty = false;
                info!("Study data reset to defaults");
                Ok(())
            }
            Err(e) => {
                self.dirty = true;
                Err(e.into())
            }
        }
    }
}
