//! StudyBuddy - turn notes into flashcards and level up while practicing
//!
//! Paste study notes to get flashcards, practice them with flip/score
//! tracking, and watch XP, levels, badges and the leaderboard move on the
//! dashboard. All state is one JSON snapshot in a local key-value store.
//!
//! ## Layout
//!
//! - [`progression`]: the XP/level/badge/leaderboard update and its models
//! - [`app`]: the coordinator that owns the snapshot and persists it
//! - [`store`]: key-value storage (SQLite or in-memory)
//! - [`flashcards`]: note-to-card generation and practice sessions
//! - [`dashboard`]: read-only projection for display
//! - [`config`]: `~/.studybuddy/config.toml`

pub mod app;
pub mod config;
pub mod dashboard;
pub mod flashcards;
pub mod progression;
pub mod store;

pub use app::{AppError, Command, Reply, StudyApp};
pub use progression::{PracticeResult, Snapshot};
