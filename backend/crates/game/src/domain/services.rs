//! Domain Services
//!
//! Pure domain logic for proof tokens and leaderboard qualification.

pub use platform::crypto::{generate_proof_token, token_digest};

use crate::domain::entities::LeaderboardEntry;

/// Decide whether `score` would place on a board capped at `capacity`.
///
/// Qualifies when the board is not full, or when the score strictly
/// exceeds the current lowest of the top entries. Matching the lowest
/// score does not qualify.
pub fn qualifies_for_board(score: i64, board: &[LeaderboardEntry], capacity: usize) -> bool {
    if board.len() < capacity {
        return true;
    }
    match board.iter().map(|e| e.score).min() {
        Some(lowest) => score > lowest,
        None => true,
    }
}

/// Duration bounds check for a finished game
pub fn duration_in_bounds(duration_ms: i64, min_ms: i64, max_ms: i64) -> bool {
    (min_ms..=max_ms).contains(&duration_ms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn entry(score: i64) -> LeaderboardEntry {
        LeaderboardEntry {
            id: 0,
            username: "p".to_string(),
            score,
            achieved_at: Utc::now(),
        }
    }

    #[test]
    fn test_qualifies_when_board_not_full() {
        assert!(qualifies_for_board(0, &[], 3));
        assert!(qualifies_for_board(1, &[entry(100), entry(50)], 3));
    }

    #[test]
    fn test_qualifies_only_above_lowest_when_full() {
        let board = vec![entry(300), entry(200), entry(100)];
        assert!(qualifies_for_board(101, &board, 3));
        assert!(!qualifies_for_board(100, &board, 3));
        assert!(!qualifies_for_board(99, &board, 3));
    }

    #[test]
    fn test_duration_bounds_inclusive() {
        assert!(!duration_in_bounds(0, 1, 600_000));
        assert!(duration_in_bounds(1, 1, 600_000));
        assert!(duration_in_bounds(600_000, 1, 600_000));
        assert!(!duration_in_bounds(600_001, 1, 600_000));
    }
}
