//! PostgreSQL Repository Implementations

use crate::domain::entities::{GameSession, LeaderboardEntry, PendingProof};
use crate::domain::repository::{
    CleanupRepository, LeaderboardRepository, PendingProofRepository, SessionRepository,
};
use crate::error::GameResult;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

/// Idempotent schema bootstrap, run once at process start.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS game_sessions (
    game_session_id UUID PRIMARY KEY,
    started_at_ms   BIGINT NOT NULL,
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now()
);

CREATE TABLE IF NOT EXISTS pending_proofs (
    game_session_id UUID PRIMARY KEY,
    token_digest    BYTEA NOT NULL,
    score           BIGINT NOT NULL,
    duration_ms     BIGINT NOT NULL,
    expires_at_ms   BIGINT NOT NULL
);

CREATE TABLE IF NOT EXISTS leaderboard_entries (
    leaderboard_entry_id BIGSERIAL PRIMARY KEY,
    username             TEXT NOT NULL,
    score                BIGINT NOT NULL,
    achieved_at          TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgGameRepository {
    pool: PgPool,
}

impl PgGameRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the three tables if they do not exist yet
    pub async fn ensure_schema(&self) -> GameResult<()> {
        for statement in SCHEMA.split(';').filter(|s| !s.trim().is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        tracing::info!("Game schema ensured");
        Ok(())
    }
}

impl CleanupRepository for PgGameRepository {
    /// Delete expired pending proofs and sessions past the retention
    /// window. Never touches the leaderboard.
    async fn cleanup_expired(&self, session_retention_ms: i64) -> GameResult<(u64, u64)> {
        let now_ms = Utc::now().timestamp_millis();

        let proofs_deleted = sqlx::query("DELETE FROM pending_proofs WHERE expires_at_ms < $1")
            .bind(now_ms)
            .execute(&self.pool)
            .await?
            .rows_affected();

        let cutoff = Utc::now() - chrono::Duration::milliseconds(session_retention_ms);
        let sessions_deleted = sqlx::query("DELETE FROM game_sessions WHERE created_at < $1")
            .bind(cutoff)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::info!(
            proofs = proofs_deleted,
            sessions = sessions_deleted,
            "Cleaned up expired game data"
        );

        Ok((proofs_deleted, sessions_deleted))
    }
}

impl SessionRepository for PgGameRepository {
    async fn create(&self, session: &GameSession) -> GameResult<()> {
        sqlx::query(
            r#"
            INSERT INTO game_sessions (game_session_id, started_at_ms, created_at)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(session.id)
        .bind(session.started_at_ms)
        .bind(session.created_at)
        .execute(&self.pool)
        .await?;

        tracing::info!(game_id = %session.id, "Game session created");

        Ok(())
    }

    async fn consume(&self, session_id: Uuid) -> GameResult<Option<GameSession>> {
        let row = sqlx::query_as::<_, GameSessionRow>(
            r#"
            DELETE FROM game_sessions
            WHERE game_session_id = $1
            RETURNING game_session_id, started_at_ms, created_at
            "#,
        )
        .bind(session_id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(r) => {
                tracing::info!(game_id = %session_id, "Game session consumed");
                Ok(Some(r.into_session()))
            }
            None => {
                tracing::debug!(game_id = %session_id, "Game session not found");
                Ok(None)
            }
        }
    }
}

impl PendingProofRepository for PgGameRepository {
    async fn create(&self, proof: &PendingProof) -> GameResult<()> {
        sqlx::query(
            r#"
            INSERT INTO pending_proofs (
                game_session_id,
                token_digest,
                score,
                duration_ms,
                expires_at_ms
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(proof.session_id)
        .bind(&proof.token_digest)
        .bind(proof.score)
        .bind(proof.duration_ms)
        .bind(proof.expires_at_ms)
        .execute(&self.pool)
        .await?;

        tracing::info!(game_id = %proof.session_id, "Pending proof created");

        Ok(())
    }

    async fn find(
        &self,
        session_id: Uuid,
        token_digest: &[u8],
    ) -> GameResult<Option<PendingProof>> {
        // Single compound predicate; never "find by id, compare digest
        // in application code"
        let row = sqlx::query_as::<_, PendingProofRow>(
            r#"
            SELECT game_session_id, token_digest, score, duration_ms, expires_at_ms
            FROM pending_proofs
            WHERE game_session_id = $1 AND token_digest = $2
            "#,
        )
        .bind(session_id)
        .bind(token_digest)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PendingProofRow::into_proof))
    }

    async fn delete(&self, session_id: Uuid) -> GameResult<()> {
        sqlx::query("DELETE FROM pending_proofs WHERE game_session_id = $1")
            .bind(session_id)
            .execute(&self.pool)
            .await?;

        tracing::info!(game_id = %session_id, "Pending proof deleted");
        Ok(())
    }
}

impl LeaderboardRepository for PgGameRepository {
    async fn top(&self, limit: i64) -> GameResult<Vec<LeaderboardEntry>> {
        let rows = sqlx::query_as::<_, LeaderboardRow>(
            r#"
            SELECT leaderboard_entry_id, username, score, achieved_at
            FROM leaderboard_entries
            ORDER BY score DESC, leaderboard_entry_id ASC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(LeaderboardRow::into_entry).collect())
    }

    async fn register(
        &self,
        session_id: Uuid,
        token_digest: &[u8],
        username: &str,
        capacity: i64,
    ) -> GameResult<Option<i64>> {
        // Proof consumption, insert, and trim share one transaction:
        // a concurrent registration with the same proof deletes zero
        // rows and commits nothing, and a concurrent reader never sees
        // more than `capacity` rows
        let mut tx = self.pool.begin().await?;

        let consumed: Option<(i64,)> = sqlx::query_as(
            r#"
            DELETE FROM pending_proofs
            WHERE game_session_id = $1 AND token_digest = $2
            RETURNING score
            "#,
        )
        .bind(session_id)
        .bind(token_digest)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((score,)) = consumed else {
            tx.rollback().await?;
            return Ok(None);
        };

        sqlx::query("INSERT INTO leaderboard_entries (username, score) VALUES ($1, $2)")
            .bind(username)
            .bind(score)
            .execute(&mut *tx)
            .await?;

        sqlx::query(
            r#"
            DELETE FROM leaderboard_entries
            WHERE leaderboard_entry_id NOT IN (
                SELECT leaderboard_entry_id
                FROM leaderboard_entries
                ORDER BY score DESC, leaderboard_entry_id ASC
                LIMIT $1
            )
            "#,
        )
        .bind(capacity)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(username, score, "Leaderboard entry recorded");

        Ok(Some(score))
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct GameSessionRow {
    game_session_id: Uuid,
    started_at_ms: i64,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl GameSessionRow {
    fn into_session(self) -> GameSession {
        GameSession {
            id: self.game_session_id,
            started_at_ms: self.started_at_ms,
            created_at: self.created_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PendingProofRow {
    game_session_id: Uuid,
    token_digest: Vec<u8>,
    score: i64,
    duration_ms: i64,
    expires_at_ms: i64,
}

impl PendingProofRow {
    fn into_proof(self) -> PendingProof {
        PendingProof {
            session_id: self.game_session_id,
            token_digest: self.token_digest,
            score: self.score,
            duration_ms: self.duration_ms,
            expires_at_ms: self.expires_at_ms,
        }
    }
}

#[derive(sqlx::FromRow)]
struct LeaderboardRow {
    leaderboard_entry_id: i64,
    username: String,
    score: i64,
    achieved_at: chrono::DateTime<chrono::Utc>,
}

impl LeaderboardRow {
    fn into_entry(self) -> LeaderboardEntry {
        LeaderboardEntry {
            id: self.leaderboard_entry_id,
            username: self.username,
            score: self.score,
            achieved_at: self.achieved_at,
        }
    }
}
