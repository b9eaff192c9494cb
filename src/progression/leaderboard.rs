//! Leaderboard reconciliation

use super::models::LeaderboardEntry;

/// Sync the named entry to `total_xp` and re-sort descending by xp.
///
/// A missing entry is not an error; the board is still re-sorted. The sort is
/// stable, so entries with equal xp keep their previous relative order.
/// Returns the entry's 1-based rank before and after, if it exists.
pub fn reconcile(
    board: &mut Vec<LeaderboardEntry>,
    name: &str,
    total_xp: u64,
) -> Option<(usize, usize)> {
    let old_rank = board.iter().position(|e| e.name == name);

    if let Some(index) = old_rank {
        board[index].xp = total_xp;
    }

    board.sort_by(|a, b| b.xp.cmp(&a.xp));

    let new_rank = board.iter().position(|e| e.name == name);
    old_rank.zip(new_rank).map(|(old, new)| (old + 1, new + 1))
}

/// Check the descending-by-xp ordering
pub fn is_sorted(board: &[LeaderboardEntry]) -> bool {
    board.windows(2).all(|w| w[0].xp >= w[1].xp)
}
