//! Progression engine - applies a finished practice session to the snapshot
//!
//! The update is a fixed sequence; later steps read what earlier steps wrote:
//! XP and card counters, accuracy smoothing, level-ups, badges, leaderboard.
//! Persisting the result is the caller's job (see `crate::app`).

use thiserror::Error;
use tracing::{debug, info};

use super::badges::{check_badges, BadgeId};
use super::leaderboard::reconcile;
use super::levels::{level_name, next_threshold};
use super::models::{PracticeResult, Snapshot};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[error("Invalid practice result: {correct} correct out of {total}")]
    InvalidResult { correct: u32, total: u32 },
}

/// A level up event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelUp {
    pub old_level: u32,
    pub new_level: u32,
    pub new_title: String,
}

/// Events produced while applying a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    XpAwarded { amount: u64 },
    LevelUp(LevelUp),
    BadgeUnlocked(BadgeId),
    RankChanged { old_rank: usize, new_rank: usize },
}

/// Summary of one applied session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub xp_gained: u64,
    pub session_accuracy: u32,
    pub events: Vec<ProgressEvent>,
}

impl SessionOutcome {
    pub fn level_ups(&self) -> impl Iterator<Item = &LevelUp> {
        self.events.iter().filter_map(|e| match e {
            ProgressEvent::LevelUp(level_up) => Some(level_up),
            _ => None,
        })
    }

    pub fn unlocked_badges(&self) -> impl Iterator<Item = BadgeId> + '_ {
        self.events.iter().filter_map(|e| match e {
            ProgressEvent::BadgeUnlocked(id) => Some(*id),
            _ => None,
        })
    }
}

/// Apply a practice result to the snapshot in place.
///
/// An invalid result is rejected before anything is touched.
pub fn apply_session_result(
    snapshot: &mut Snapshot,
    result: PracticeResult,
) -> Result<SessionOutcome, ProgressionError> {
    if !result.is_valid() {
        return Err(ProgressionError::InvalidResult {
            correct: result.correct,
            total: result.total,
        });
    }

    let Snapshot { user, stats } = snapshot;
    let mut events = Vec::new();

    let xp_gained = result.xp();
    let session_accuracy = result.accuracy();

    user.xp += xp_gained;
    stats.total_xp += xp_gained;
    stats.daily_xp += xp_gained;

    stats.cards_mastered += u64::from(result.correct);
    stats.daily_cards += u64::from(result.correct);

    // (old + new) / 2 rounded half up. Not a true running average.
    stats.accuracy_rate = (stats.accuracy_rate + session_accuracy + 1) / 2;

    debug!(
        xp_gained,
        session_accuracy,
        accuracy_rate = stats.accuracy_rate,
        "Applied session counters"
    );
    if xp_gained > 0 {
        events.push(ProgressEvent::XpAwarded { amount: xp_gained });
    }

    while user.xp >= user.next_level_xp {
        let old_level = user.level;
        user.level += 1;
        user.xp -= user.next_level_xp;
        user.next_level_xp = next_threshold(user.next_level_xp);
        user.level_name = level_name(user.level).to_string();

        info!(
            level = user.level,
            title = %user.level_name,
            next_level_xp = user.next_level_xp,
            "Level up"
        );
        events.push(ProgressEvent::LevelUp(LevelUp {
            old_level,
            new_level: user.level,
            new_title: user.level_name.clone(),
        }));
    }

    for badge in check_badges(user, stats) {
        if user.grant_badge(badge) {
            info!(badge = badge.as_str(), "Badge unlocked");
            events.push(ProgressEvent::BadgeUnlocked(badge));
        }
    }

    if let Some((old_rank, new_rank)) = reconcile(&mut stats.leaderboard, &user.name, stats.total_xp)
    {
        if old_rank != new_rank {
            events.push(ProgressEvent::RankChanged { old_rank, new_rank });
        }
    } else {
        debug!(name = %user.name, "Profile has no leaderboard entry");
    }

    Ok(SessionOutcome {
        xp_gained,
        session_accuracy,
        events,
    })
}
