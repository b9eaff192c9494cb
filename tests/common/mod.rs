//! Shared helpers for integration tests

#![allow(dead_code)]

use chrono::NaiveDate;
use studybuddy::progression::{LeaderboardEntry, Snapshot};

/// A day in a fixed test month
pub fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).expect("valid test date")
}

/// Default snapshot with a profile of the given level and xp
pub fn snapshot_at(level: u32, xp: u64, next_level_xp: u64) -> Snapshot {
    let mut snapshot = Snapshot::default();
    snapshot.user.level = level;
    snapshot.user.xp = xp;
    snapshot.user.next_level_xp = next_level_xp;
    snapshot.user.level_name = studybuddy::progression::level_name(level).to_string();
    snapshot
}

/// Leaderboard xp of `name`, if listed
pub fn board_xp(snapshot: &Snapshot, name: &str) -> Option<u64> {
    snapshot
        .stats
        .leaderboard
        .iter()
        .find(|e: &&LeaderboardEntry| e.name == name)
        .map(|e| e.xp)
}

/// Small deterministic generator for score sequences
pub struct Lcg(u64);

impl Lcg {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_below(&mut self, bound: u32) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((self.0 >> 33) % u64::from(bound)) as u32
    }
}
