//! End Game Use Case

use crate::application::config::GameConfig;
use crate::domain::entities::PendingProof;
use crate::domain::repository::{LeaderboardRepository, PendingProofRepository, SessionRepository};
use crate::domain::services::{duration_in_bounds, generate_proof_token, qualifies_for_board};
use crate::error::{GameError, GameResult};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Input DTO for end game
#[derive(Debug, Clone)]
pub struct EndGameInput {
    pub game_id: Uuid,
    pub score: i64,
}

/// Output DTO for end game
#[derive(Debug, Clone)]
pub enum EndGameOutput {
    /// Score does not place on the board; nothing persisted
    NotTop3,
    /// Score places on the board; the raw token is surfaced here exactly
    /// once and never again
    Top3 { token: String, expires_in_ms: i64 },
}

/// End Game Use Case
///
/// Consumes the session unconditionally before any eligibility check, so
/// a given id can never produce two outcomes.
pub struct EndGameUseCase<S, P, L>
where
    S: SessionRepository,
    P: PendingProofRepository,
    L: LeaderboardRepository,
{
    session_repo: Arc<S>,
    proof_repo: Arc<P>,
    leaderboard_repo: Arc<L>,
    config: Arc<GameConfig>,
}

impl<S, P, L> EndGameUseCase<S, P, L>
where
    S: SessionRepository,
    P: PendingProofRepository,
    L: LeaderboardRepository,
{
    pub fn new(
        session_repo: Arc<S>,
        proof_repo: Arc<P>,
        leaderboard_repo: Arc<L>,
        config: Arc<GameConfig>,
    ) -> Self {
        Self {
            session_repo,
            proof_repo,
            leaderboard_repo,
            config,
        }
    }

    pub async fn execute(&self, input: EndGameInput) -> GameResult<EndGameOutput> {
        if input.score < self.config.min_score || input.score > self.config.max_score {
            return Err(GameError::InvalidRequest(format!(
                "Score must be between {} and {}",
                self.config.min_score, self.config.max_score
            )));
        }

        // Atomically consume the session; replayed ids miss here
        let session = self
            .session_repo
            .consume(input.game_id)
            .await?
            .ok_or(GameError::SessionNotFound)?;

        let now_ms = Utc::now().timestamp_millis();
        let duration_ms = session.duration_ms(now_ms);

        if !duration_in_bounds(
            duration_ms,
            self.config.min_game_duration_ms(),
            self.config.max_game_duration_ms(),
        ) {
            // The session is already consumed: the id is spent either way
            return Err(GameError::InvalidDuration { duration_ms });
        }

        let board = self
            .leaderboard_repo
            .top(self.config.leaderboard_capacity)
            .await?;

        if !qualifies_for_board(input.score, &board, self.config.leaderboard_capacity as usize) {
            tracing::info!(
                game_id = %input.game_id,
                score = input.score,
                "Game ended, score does not qualify"
            );
            return Ok(EndGameOutput::NotTop3);
        }

        let token = generate_proof_token();
        let digest = crate::domain::services::token_digest(&token);
        let expires_in_ms = self.config.token_expiry_ms();

        let proof = PendingProof::new(input.game_id, digest, input.score, duration_ms, expires_in_ms);
        self.proof_repo.create(&proof).await?;

        tracing::info!(
            game_id = %input.game_id,
            score = input.score,
            duration_ms,
            "Game ended, score qualifies for leaderboard"
        );

        Ok(EndGameOutput::Top3 {
            token,
            expires_in_ms,
        })
    }
}
