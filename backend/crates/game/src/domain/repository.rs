//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in the
//! infrastructure layer.

use crate::domain::entities::{GameSession, LeaderboardEntry, PendingProof};
use crate::error::GameResult;
use uuid::Uuid;

/// GameSession repository trait
#[trait_variant::make(SessionRepository: Send)]
pub trait LocalSessionRepository {
    /// Create a new session
    async fn create(&self, session: &GameSession) -> GameResult<()>;

    /// Consume a session atomically (delete and return if present).
    /// A consumed id can never be consumed again.
    async fn consume(&self, session_id: Uuid) -> GameResult<Option<GameSession>>;
}

/// PendingProof repository trait
#[trait_variant::make(PendingProofRepository: Send)]
pub trait LocalPendingProofRepository {
    /// Create a pending proof keyed by session id
    async fn create(&self, proof: &PendingProof) -> GameResult<()>;

    /// Look up by (session id, token digest) as a single compound match.
    /// A correct id with a wrong digest misses, and vice versa.
    async fn find(&self, session_id: Uuid, token_digest: &[u8]) -> GameResult<Option<PendingProof>>;

    /// Delete a pending proof
    async fn delete(&self, session_id: Uuid) -> GameResult<()>;
}

/// Leaderboard repository trait
#[trait_variant::make(LeaderboardRepository: Send)]
pub trait LocalLeaderboardRepository {
    /// Current board, ordered by score descending, at most `limit` rows
    async fn top(&self, limit: i64) -> GameResult<Vec<LeaderboardEntry>>;

    /// Consume the pending proof matching (session id, token digest),
    /// insert its score under `username`, and trim the board to
    /// `capacity` rows, all inside one transaction. Returns the
    /// registered score, or `None` when the proof was already consumed
    /// (a second registration with the same proof commits nothing).
    /// On error the transaction rolls back and the proof row survives.
    async fn register(
        &self,
        session_id: Uuid,
        token_digest: &[u8],
        username: &str,
        capacity: i64,
    ) -> GameResult<Option<i64>>;
}

/// Expired-data cleanup trait, shared by the startup pass and the
/// background sweeper
#[trait_variant::make(CleanupRepository: Send)]
pub trait LocalCleanupRepository {
    /// Delete expired pending proofs and sessions older than the
    /// retention window. Returns (proofs deleted, sessions deleted).
    async fn cleanup_expired(&self, session_retention_ms: i64) -> GameResult<(u64, u64)>;
}
