//! Dashboard view - a read-only projection of the snapshot for display
//!
//! Nothing here mutates state; the CLI renders it as text or JSON.

use serde::Serialize;

use crate::progression::{BadgeId, Snapshot};

/// Subjects below this accuracy are recommended for review
pub const WEAK_SUBJECT_ACCURACY: u32 = 70;

/// At most this many review recommendations are shown
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Heatmap bucket for a subject
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PerformanceClass {
    Strong,
    Moderate,
    Weak,
}

impl PerformanceClass {
    pub fn for_accuracy(accuracy: u32) -> Self {
        if accuracy >= 80 {
            Self::Strong
        } else if accuracy >= 50 {
            Self::Moderate
        } else {
            Self::Weak
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatCards {
    pub total_xp: u64,
    pub daily_xp: u64,
    pub current_streak: u32,
    pub cards_mastered: u64,
    pub daily_cards: u64,
    pub accuracy_rate: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LevelProgress {
    pub level: u32,
    pub title: String,
    pub xp: u64,
    pub next_level_xp: u64,
    /// 0.0 - 100.0
    pub percent: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BadgeView {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub earned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub subject: String,
    pub accuracy: u32,
    pub class: PerformanceClass,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub name: String,
    pub xp: u64,
    pub is_current_user: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub subject: String,
    pub accuracy: u32,
    pub recommended_cards: u32,
}

/// Everything the dashboard shows
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub user_name: String,
    pub stats: StatCards,
    pub level: LevelProgress,
    pub badges: Vec<BadgeView>,
    pub heatmap: Vec<HeatmapCell>,
    pub leaderboard: Vec<LeaderboardRow>,
    pub recommendations: Vec<Recommendation>,
}

impl DashboardView {
    pub fn build(snapshot: &Snapshot) -> Self {
        let Snapshot { user, stats } = snapshot;

        let percent = if user.next_level_xp == 0 {
            100.0
        } else {
            (user.xp as f64 / user.next_level_xp as f64 * 100.0).min(100.0)
        };

        let badges = BadgeId::all()
            .iter()
            .map(|id| BadgeView {
                id: id.as_str(),
                name: id.title(),
                icon: id.icon(),
                earned: user.has_badge(*id),
            })
            .collect();

        let heatmap = stats
            .subjects
            .iter()
            .map(|s| HeatmapCell {
                subject: s.name.clone(),
                accuracy: s.accuracy,
                class: PerformanceClass::for_accuracy(s.accuracy),
            })
            .collect();

        let leaderboard = stats
            .leaderboard
            .iter()
            .enumerate()
            .map(|(i, entry)| LeaderboardRow {
                rank: i + 1,
                name: entry.name.clone(),
                xp: entry.xp,
                is_current_user: entry.name == user.name,
            })
            .collect();

        let recommendations = stats
            .subjects
            .iter()
            .filter(|s| s.accuracy < WEAK_SUBJECT_ACCURACY)
            .take(MAX_RECOMMENDATIONS)
            .map(|s| Recommendation {
                subject: s.name.clone(),
                accuracy: s.accuracy,
                recommended_cards: s.recommended_cards,
            })
            .collect();

        Self {
            user_name: user.name.clone(),
            stats: StatCards {
                total_xp: stats.total_xp,
                daily_xp: stats.daily_xp,
                current_streak: stats.current_streak,
                cards_mastered: stats.cards_mastered,
                daily_cards: stats.daily_cards,
                accuracy_rate: stats.accuracy_rate,
            },
            level: LevelProgress {
                level: user.level,
                title: user.level_name.clone(),
                xp: user.xp,
                next_level_xp: user.next_level_xp,
                percent,
            },
            badges,
            heatmap,
            leaderboard,
            recommendations,
        }
    }

    /// Rank of the current user, if listed
    pub fn user_rank(&self) -> Option<usize> {
        self.leaderboard
            .iter()
            .find(|row| row.is_current_user)
            .map(|row| row.rank)
    }
}
