//! Level titles and threshold growth
//!
//! Titles come from a fixed ordered table. Lookups clamp at both ends: level 0
//! maps to the first title and anything past the table reuses the last one.

/// Level titles, index 0 is level 1
pub static LEVEL_NAMES: [&str; 10] = [
    "Beginner",
    "Novice",
    "Learner",
    "Knowledge Explorer",
    "Study Master",
    "Academic Warrior",
    "Wisdom Seeker",
    "Scholar",
    "Expert",
    "Genius",
];

/// Title for a level
pub fn level_name(level: u32) -> &'static str {
    let index = (level.saturating_sub(1) as usize).min(LEVEL_NAMES.len() - 1);
    LEVEL_NAMES[index]
}

/// Threshold for the level after one with `current` as its threshold.
///
/// Grows by half (rounded down) and never drops below 1 so the level-up loop
/// always makes progress.
pub fn next_threshold(current: u64) -> u64 {
    current.saturating_add(current / 2).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_name_clamps() {
        assert_eq!(level_name(0), "Beginner");
        assert_eq!(level_name(1), "Beginner");
        assert_eq!(level_name(4), "Knowledge Explorer");
        assert_eq!(level_name(10), "Genius");
        assert_eq!(level_name(11), "Genius");
        assert_eq!(level_name(u32::MAX), "Genius");
    }

    #[test]
    fn test_next_threshold() {
        assert_eq!(next_threshold(1000), 1500);
        assert_eq!(next_threshold(1500), 2250);
        assert_eq!(next_threshold(2250), 3375);
        assert_eq!(next_threshold(3375), 5062); // floor(5062.5)
        assert_eq!(next_threshold(1), 1);
        assert_eq!(next_threshold(0), 1);
    }
}
