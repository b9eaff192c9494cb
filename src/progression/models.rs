//! Data models for user progression
//!
//! These structures are serialized as a single JSON document under one key in
//! the local store. Field names follow the established `studyBuddyData` layout
//! (`nextLevelXP`, `totalXP`, ...) so previously saved blobs keep loading.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::badges::BadgeId;

/// XP granted per correctly answered card
pub const XP_PER_CORRECT: u64 = 10;

/// The player's identity and level progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name, also the key of the player's leaderboard entry
    pub name: String,
    pub level: u32,
    pub level_name: String,
    /// Progress inside the current level (always below `next_level_xp` after an update)
    pub xp: u64,
    #[serde(rename = "nextLevelXP")]
    pub next_level_xp: u64,
    /// Unlocked badge identifiers. Unknown identifiers are preserved as-is.
    #[serde(default)]
    pub badges: Vec<String>,
}

impl UserProfile {
    /// Check whether a badge has been granted
    pub fn has_badge(&self, badge: BadgeId) -> bool {
        self.badges.iter().any(|b| b == badge.as_str())
    }

    /// Grant a badge. Returns false when it was already present.
    pub fn grant_badge(&mut self, badge: BadgeId) -> bool {
        if self.has_badge(badge) {
            return false;
        }
        self.badges.push(badge.as_str().to_string());
        true
    }
}

/// Title stored with the seeded profile. It is kept as-is until the first
/// level-up, after which titles come from the level table.
pub const SEEDED_LEVEL_NAME: &str = "Knowledge Explorer";

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Student".to_string(),
            level: 3,
            level_name: SEEDED_LEVEL_NAME.to_string(),
            xp: 750,
            next_level_xp: 1000,
            badges: vec![
                BadgeId::FirstCard.as_str().to_string(),
                BadgeId::Streak7.as_str().to_string(),
            ],
        }
    }
}

/// Per-subject accuracy shown on the heatmap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectStat {
    pub name: String,
    pub accuracy: u32,
    pub recommended_cards: u32,
}

impl SubjectStat {
    pub fn new(name: &str, accuracy: u32, recommended_cards: u32) -> Self {
        Self {
            name: name.to_string(),
            accuracy,
            recommended_cards,
        }
    }
}

/// A single leaderboard row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub xp: u64,
}

impl LeaderboardEntry {
    pub fn new(name: &str, xp: u64) -> Self {
        Self {
            name: name.to_string(),
            xp,
        }
    }
}

/// Lifetime and daily statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStats {
    #[serde(rename = "totalXP")]
    pub total_xp: u64,
    #[serde(rename = "dailyXP")]
    pub daily_xp: u64,
    pub current_streak: u32,
    pub cards_mastered: u64,
    pub daily_cards: u64,
    /// Smoothed accuracy percentage (0-100)
    pub accuracy_rate: u32,
    #[serde(default)]
    pub subjects: Vec<SubjectStat>,
    /// Sorted by xp, highest first
    #[serde(default)]
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Last calendar day a practice session was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active_day: Option<NaiveDate>,
}

impl Default for AggregateStats {
    fn default() -> Self {
        Self {
            total_xp: 1750,
            daily_xp: 120,
            current_streak: 7,
            cards_mastered: 45,
            daily_cards: 8,
            accuracy_rate: 78,
            subjects: vec![
                SubjectStat::new("Biology", 85, 5),
                SubjectStat::new("Chemistry", 72, 8),
                SubjectStat::new("Physics", 68, 10),
                SubjectStat::new("Mathematics", 91, 3),
                SubjectStat::new("History", 45, 15),
            ],
            leaderboard: vec![
                LeaderboardEntry::new("Alice", 2200),
                LeaderboardEntry::new("John", 1900),
                LeaderboardEntry::new("Student", 1750),
                LeaderboardEntry::new("Sarah", 1650),
                LeaderboardEntry::new("Mike", 1400),
            ],
            last_active_day: None,
        }
    }
}

/// The complete persisted state: profile plus statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub user: UserProfile,
    pub stats: AggregateStats,
}

impl Snapshot {
    /// Basic sanity check for state read back from storage.
    ///
    /// A zero level or zero threshold cannot come out of the engine and would
    /// stall the level-up loop, so such a snapshot is treated as corrupt.
    pub fn is_sane(&self) -> bool {
        self.user.level > 0 && self.user.next_level_xp > 0 && self.stats.accuracy_rate <= 100
    }
}

/// Outcome of a finished practice session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PracticeResult {
    pub correct: u32,
    pub total: u32,
}

impl PracticeResult {
    pub fn new(correct: u32, total: u32) -> Self {
        Self { correct, total }
    }

    /// A result is usable when at least one card was answered and the
    /// correct count does not exceed it
    pub fn is_valid(&self) -> bool {
        self.total > 0 && self.correct <= self.total
    }

    /// Accuracy in percent, rounded half up
    pub fn accuracy(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        let correct = u64::from(self.correct);
        let total = u64::from(self.total);
        ((200 * correct + total) / (2 * total)) as u32
    }

    pub fn xp(&self) -> u64 {
        u64::from(self.correct) * XP_PER_CORRECT
    }
}
