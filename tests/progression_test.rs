//! Worked progression scenarios through the public API

mod common;

use studybuddy::progression::{
    apply_session_result, BadgeId, PracticeResult, ProgressEvent, ProgressionError, Snapshot,
};

use crate::common::{board_xp, snapshot_at};

#[test]
fn test_single_level_up() {
    let mut snapshot = Snapshot::default();
    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(30, 30)).unwrap();

    assert_eq!(outcome.xp_gained, 300);
    assert_eq!(snapshot.user.level, 4);
    assert_eq!(snapshot.user.xp, 50);
    assert_eq!(snapshot.user.next_level_xp, 1500);
    assert_eq!(snapshot.user.level_name, "Knowledge Explorer");
    assert_eq!(outcome.level_ups().count(), 1);
}

#[test]
fn test_accuracy_smoothing_rounds() {
    let mut snapshot = Snapshot::default();
    assert_eq!(snapshot.stats.accuracy_rate, 78);

    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(8, 10)).unwrap();
    assert_eq!(outcome.session_accuracy, 80);
    assert_eq!(snapshot.stats.accuracy_rate, 79);
}

#[test]
fn test_hundred_correct_granted_once() {
    let mut snapshot = Snapshot::default();
    snapshot.stats.cards_mastered = 90;

    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(10, 12)).unwrap();
    assert_eq!(snapshot.stats.cards_mastered, 100);
    assert!(outcome.unlocked_badges().any(|b| b == BadgeId::HundredCorrect));

    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(5, 5)).unwrap();
    assert!(!outcome.unlocked_badges().any(|b| b == BadgeId::HundredCorrect));
    let count = snapshot
        .user
        .badges
        .iter()
        .filter(|b| b.as_str() == "hundred_correct")
        .count();
    assert_eq!(count, 1);
}

#[test]
fn test_invalid_result_changes_nothing() {
    let mut snapshot = Snapshot::default();
    let before = snapshot.clone();

    let err = apply_session_result(&mut snapshot, PracticeResult::new(5, 0)).unwrap_err();
    assert_eq!(err, ProgressionError::InvalidResult { correct: 5, total: 0 });
    assert_eq!(snapshot, before);
}

#[test]
fn test_repeated_large_sessions_level_up_many_times() {
    let mut snapshot = snapshot_at(1, 0, 100);

    apply_session_result(&mut snapshot, PracticeResult::new(200, 200)).unwrap();
    let level_after_first = snapshot.user.level;
    assert!(level_after_first > 2);

    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(5000, 5000)).unwrap();
    assert!(outcome.level_ups().count() > 1);
    assert!(snapshot.user.level > 10);
    assert_eq!(snapshot.user.level_name, "Genius");
    assert!(snapshot.user.xp < snapshot.user.next_level_xp);

    // Each level-up event carries consecutive levels
    let mut expected = level_after_first;
    for level_up in outcome.level_ups() {
        assert_eq!(level_up.old_level, expected);
        assert_eq!(level_up.new_level, expected + 1);
        expected += 1;
    }
}

#[test]
fn test_zero_correct_session() {
    let mut snapshot = Snapshot::default();
    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(0, 4)).unwrap();

    assert_eq!(outcome.xp_gained, 0);
    assert_eq!(outcome.session_accuracy, 0);
    assert_eq!(snapshot.stats.accuracy_rate, 39);
    assert_eq!(snapshot.stats.total_xp, 1750);
    assert!(!outcome
        .events
        .iter()
        .any(|e| matches!(e, ProgressEvent::XpAwarded { .. })));
}

#[test]
fn test_leaderboard_tracks_total_xp() {
    let mut snapshot = Snapshot::default();
    let outcome = apply_session_result(&mut snapshot, PracticeResult::new(50, 50)).unwrap();

    assert_eq!(board_xp(&snapshot, "Student"), Some(2250));
    assert_eq!(snapshot.stats.leaderboard[0].name, "Student");
    assert!(outcome
        .events
        .contains(&ProgressEvent::RankChanged { old_rank: 3, new_rank: 1 }));
}
