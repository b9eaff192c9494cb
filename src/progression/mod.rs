//! Gamification core: XP, levels, badges, streaks and the leaderboard
//!
//! Everything here is a pure in-memory transformation of a [`Snapshot`].
//! Storage and command handling live in `crate::store` and `crate::app`.

mod badges;
mod engine;
mod leaderboard;
mod levels;
mod models;
mod streaks;

pub use badges::{check_badges, BadgeId};
pub use engine::{apply_session_result, LevelUp, ProgressEvent, ProgressionError, SessionOutcome};
pub use leaderboard::{is_sorted, reconcile};
pub use levels::{level_name, next_threshold, LEVEL_NAMES};
pub use models::{
    AggregateStats, LeaderboardEntry, PracticeResult, Snapshot, SubjectStat, UserProfile,
    SEEDED_LEVEL_NAME, XP_PER_CORRECT,
};
pub use streaks::{roll_day, today, DayChange};
