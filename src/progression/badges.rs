//! Badge definitions and unlock checks
//!
//! Badges are granted once and never revoked. `SpeedDemon` is part of the
//! catalog shown on the dashboard but has no automatic unlock rule.

use super::models::{AggregateStats, UserProfile};

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    FirstCard,
    Streak7,
    HundredCorrect,
    SpeedDemon,
    Perfectionist,
}

impl BadgeId {
    /// Get the string ID used in the persisted badge list
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstCard => "first_card",
            Self::Streak7 => "streak_7",
            Self::HundredCorrect => "hundred_correct",
            Self::SpeedDemon => "speed_demon",
            Self::Perfectionist => "perfectionist",
        }
    }

    /// Parse from the persisted string ID
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "first_card" => Some(Self::FirstCard),
            "streak_7" => Some(Self::Streak7),
            "hundred_correct" => Some(Self::HundredCorrect),
            "speed_demon" => Some(Self::SpeedDemon),
            "perfectionist" => Some(Self::Perfectionist),
            _ => None,
        }
    }

    /// All badges in display order
    pub fn all() -> &'static [BadgeId] {
        &[
            Self::FirstCard,
            Self::Streak7,
            Self::HundredCorrect,
            Self::SpeedDemon,
            Self::Perfectionist,
        ]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::FirstCard => "First Card",
            Self::Streak7 => "7 Day Streak",
            Self::HundredCorrect => "100 Correct",
            Self::SpeedDemon => "Speed Demon",
            Self::Perfectionist => "Perfectionist",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::FirstCard => "🎯",
            Self::Streak7 => "🔥",
            Self::HundredCorrect => "💯",
            Self::SpeedDemon => "⚡",
            Self::Perfectionist => "🏆",
        }
    }
}

/// Streak length that unlocks `Streak7`
pub const STREAK_THRESHOLD: u32 = 7;

/// Mastered card count that unlocks `HundredCorrect`
pub const HUNDRED_CORRECT_THRESHOLD: u64 = 100;

/// Smoothed accuracy that unlocks `Perfectionist`
pub const PERFECTIONIST_ACCURACY: u32 = 90;

/// Check which badges the current stats qualify for that the profile lacks.
///
/// Conditions are independent of each other, so the returned order is just
/// the catalog order.
pub fn check_badges(user: &UserProfile, stats: &AggregateStats) -> Vec<BadgeId> {
    let rules = [
        (BadgeId::FirstCard, stats.cards_mastered > 0),
        (BadgeId::Streak7, stats.current_streak >= STREAK_THRESHOLD),
        (
            BadgeId::HundredCorrect,
            stats.cards_mastered >= HUNDRED_CORRECT_THRESHOLD,
        ),
        (
            BadgeId::Perfectionist,
            stats.accuracy_rate >= PERFECTIONIST_ACCURACY,
        ),
    ];

    rules
        .into_iter()
        .filter(|(id, earned)| *earned && !user.has_badge(*id))
        .map(|(id, _)| id)
        .collect()
}
