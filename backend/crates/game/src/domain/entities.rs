//! Domain Entities
//!
//! Core business entities for the game domain.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// GameSession entity - a play-through between start and end
#[derive(Debug, Clone)]
pub struct GameSession {
    pub id: Uuid,
    /// Start of play, milliseconds since epoch
    pub started_at_ms: i64,
    /// Row creation time, used by the retention sweep
    pub created_at: DateTime<Utc>,
}

impl GameSession {
    /// Create a new session starting now
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            started_at_ms: now.timestamp_millis(),
            created_at: now,
        }
    }

    /// Elapsed play time as of `now_ms`
    pub fn duration_ms(&self, now_ms: i64) -> i64 {
        now_ms - self.started_at_ms
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

/// PendingProof entity - a qualifying score awaiting name registration
///
/// Keyed by the session id it came from; holds only the token digest,
/// never the raw token.
#[derive(Debug, Clone)]
pub struct PendingProof {
    pub session_id: Uuid,
    pub token_digest: Vec<u8>,
    pub score: i64,
    pub duration_ms: i64,
    pub expires_at_ms: i64,
}

impl PendingProof {
    pub fn new(
        session_id: Uuid,
        token_digest: [u8; 32],
        score: i64,
        duration_ms: i64,
        ttl_ms: i64,
    ) -> Self {
        Self {
            session_id,
            token_digest: token_digest.to_vec(),
            score,
            duration_ms,
            expires_at_ms: Utc::now().timestamp_millis() + ttl_ms,
        }
    }

    /// Check if the proof has expired
    pub fn is_expired(&self, now_ms: i64) -> bool {
        now_ms > self.expires_at_ms
    }
}

/// LeaderboardEntry entity - one row of the top-N board
#[derive(Debug, Clone)]
pub struct LeaderboardEntry {
    pub id: i64,
    pub username: String,
    pub score: i64,
    pub achieved_at: DateTime<Utc>,
}
