//! Register Score Use Case

use crate::application::config::GameConfig;
use crate::domain::repository::{LeaderboardRepository, PendingProofRepository};
use crate::domain::services::token_digest;
use crate::domain::value_objects::Username;
use crate::error::{GameError, GameResult};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Input DTO for register score
#[derive(Debug, Clone)]
pub struct RegisterScoreInput {
    pub game_id: Uuid,
    pub username: String,
    pub token: String,
}

/// Output DTO for register score
#[derive(Debug, Clone)]
pub struct RegisterScoreOutput {
    pub score: i64,
}

/// Register Score Use Case
///
/// Verifies the proof token by digest, then moves the pending score onto
/// the leaderboard. Proof consumption, insert, and trim are one store
/// transaction; if it fails, the pending proof is left intact so the
/// client can retry, and a proof can never yield two entries.
pub struct RegisterScoreUseCase<P, L>
where
    P: PendingProofRepository,
    L: LeaderboardRepository,
{
    proof_repo: Arc<P>,
    leaderboard_repo: Arc<L>,
    config: Arc<GameConfig>,
}

impl<P, L> RegisterScoreUseCase<P, L>
where
    P: PendingProofRepository,
    L: LeaderboardRepository,
{
    pub fn new(proof_repo: Arc<P>, leaderboard_repo: Arc<L>, config: Arc<GameConfig>) -> Self {
        Self {
            proof_repo,
            leaderboard_repo,
            config,
        }
    }

    pub async fn execute(&self, input: RegisterScoreInput) -> GameResult<RegisterScoreOutput> {
        let username = Username::new(&input.username).ok_or_else(|| {
            GameError::InvalidRequest(format!(
                "Username must be {} to {} characters",
                Username::MIN_LEN,
                Username::MAX_LEN
            ))
        })?;

        if input.token.is_empty() {
            return Err(GameError::InvalidRequest("Token is required".to_string()));
        }

        // Compound (id, digest) match in the store; a wrong token misses
        // the same way a wrong id does
        let digest = token_digest(&input.token);
        let proof = self
            .proof_repo
            .find(input.game_id, &digest)
            .await?
            .ok_or(GameError::ProofNotFound)?;

        let now_ms = Utc::now().timestamp_millis();
        if proof.is_expired(now_ms) {
            // Expiry consumes the proof: the correct token cannot be retried
            self.proof_repo.delete(input.game_id).await?;
            tracing::info!(game_id = %input.game_id, "Pending proof expired at registration");
            return Err(GameError::ProofExpired);
        }

        let score = self
            .leaderboard_repo
            .register(
                input.game_id,
                &digest,
                username.as_str(),
                self.config.leaderboard_capacity,
            )
            .await?
            // A concurrent registration consumed the proof first
            .ok_or(GameError::ProofNotFound)?;

        tracing::info!(
            game_id = %input.game_id,
            username = %username,
            score,
            "Score registered on leaderboard"
        );

        Ok(RegisterScoreOutput { score })
    }
}
