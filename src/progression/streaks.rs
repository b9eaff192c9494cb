//! Daily streak tracking and daily counter rollover

use chrono::{Local, NaiveDate};

use super::models::AggregateStats;

/// What happened to the day-scoped counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayChange {
    /// First recorded activity; counters kept as they were
    Started,
    /// Same day as the last activity
    SameDay,
    /// Activity on the day after the last one
    Extended { streak: u32 },
    /// A gap of more than one day
    Broken,
}

/// Roll daily counters over to `today` and update the streak.
///
/// A `last_active_day` in the future (clock moved back) is treated as today.
pub fn roll_day(stats: &mut AggregateStats, today: NaiveDate) -> DayChange {
    let Some(last_day) = stats.last_active_day else {
        stats.last_active_day = Some(today);
        return DayChange::Started;
    };

    let days_since = (today - last_day).num_days();
    if days_since <= 0 {
        return DayChange::SameDay;
    }

    stats.daily_xp = 0;
    stats.daily_cards = 0;
    stats.last_active_day = Some(today);

    if days_since == 1 {
        stats.current_streak = stats.current_streak.saturating_add(1);
        DayChange::Extended {
            streak: stats.current_streak,
        }
    } else {
        stats.current_streak = 1;
        DayChange::Broken
    }
}

/// Today's local date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    #[test]
    fn test_first_activity_keeps_counters() {
        let mut stats = AggregateStats::default();
        assert_eq!(roll_day(&mut stats, day(10)), DayChange::Started);
        assert_eq!(stats.current_streak, 7);
        assert_eq!(stats.daily_xp, 120);
        assert_eq!(stats.last_active_day, Some(day(10)));
    }

    #[test]
    fn test_same_day_is_noop() {
        let mut stats = AggregateStats {
            last_active_day: Some(day(10)),
            ..AggregateStats::default()
        };
        let before = stats.clone();
        assert_eq!(roll_day(&mut stats, day(10)), DayChange::SameDay);
        assert_eq!(stats, before);
    }

    #[test]
    fn test_next_day_extends_streak() {
        let mut stats = AggregateStats {
            last_active_day: Some(day(10)),
            ..AggregateStats::default()
        };
        assert_eq!(
            roll_day(&mut stats, day(11)),
            DayChange::Extended { streak: 8 }
        );
        assert_eq!(stats.daily_xp, 0);
        assert_eq!(stats.daily_cards, 0);
        assert_eq!(stats.last_active_day, Some(day(11)));
    }

    #[test]
    fn test_gap_resets_streak() {
        let mut stats = AggregateStats {
            last_active_day: Some(day(10)),
            ..AggregateStats::default()
        };
        assert_eq!(roll_day(&mut stats, day(13)), DayChange::Broken);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.daily_xp, 0);
    }

    #[test]
    fn test_clock_moved_back_counts_as_same_day() {
        let mut stats = AggregateStats {
            last_active_day: Some(day(12)),
            ..AggregateStats::default()
        };
        assert_eq!(roll_day(&mut stats, day(11)), DayChange::SameDay);
        assert_eq!(stats.last_active_day, Some(day(12)));
    }
}
