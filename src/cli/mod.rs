//! CLI command implementations

pub mod dashboard;
pub mod generate;
pub mod init;
pub mod practice;
pub mod record;
pub mod reset;

use std::path::PathBuf;

use anyhow::{Context, Result};

use studybuddy::config::Config;
use studybuddy::progression::{ProgressEvent, SessionOutcome};
use studybuddy::store::SqliteStore;
use studybuddy::StudyApp;

/// Open the study app on the configured database
pub fn open_app(config: &Config, data_dir: Option<PathBuf>) -> Result<StudyApp<SqliteStore>> {
    let db_path = data_dir
        .map(|dir| dir.join(studybuddy::config::DATABASE_FILE))
        .unwrap_or_else(|| config.database_path());

    let store = SqliteStore::open(&db_path)
        .with_context(|| format!("Failed to open study database: {}", db_path.display()))?;
    tracing::debug!("Opened study database at {}", db_path.display());

    Ok(StudyApp::open(store))
}

/// Human-readable lines for a session outcome
pub fn describe_outcome(outcome: &SessionOutcome) -> Vec<String> {
    let mut lines = vec![format!(
        "+{} XP ({}% accuracy this session)",
        outcome.xp_gained, outcome.session_accuracy
    )];

    for event in &outcome.events {
        match event {
            ProgressEvent::XpAwarded { .. } => {}
            ProgressEvent::LevelUp(level_up) => lines.push(format!(
                "Level up! {} -> {} ({})",
                level_up.old_level, level_up.new_level, level_up.new_title
            )),
            ProgressEvent::BadgeUnlocked(badge) => {
                lines.push(format!("Badge unlocked: {} {}", badge.icon(), badge.title()))
            }
            ProgressEvent::RankChanged { old_rank, new_rank } => lines.push(format!(
                "Leaderboard: #{} -> #{}",
                old_rank, new_rank
            )),
        }
    }

    lines
}
