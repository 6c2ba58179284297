//! HTTP Handlers

use crate::application::config::GameConfig;
use crate::application::end_game::{EndGameInput, EndGameOutput, EndGameUseCase};
use crate::application::fetch_leaderboard::FetchLeaderboardUseCase;
use crate::application::register_score::{RegisterScoreInput, RegisterScoreUseCase};
use crate::application::start_game::StartGameUseCase;
use crate::domain::repository::{LeaderboardRepository, PendingProofRepository, SessionRepository};
use crate::error::{GameError, GameResult};
use crate::presentation::dto::{
    EndRequest, EndResponse, HealthResponse, LeaderboardEntryDto, LeaderboardResponse,
    RegisterRequest, RegisterResponse, StartResponse,
};
use crate::presentation::extract::GameJson;
use axum::Json;
use axum::extract::State;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Shared state for game handlers
#[derive(Clone)]
pub struct GameAppState<R>
where
    R: SessionRepository
        + PendingProofRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<GameConfig>,
}

fn parse_game_id(raw: &str) -> GameResult<Uuid> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| GameError::InvalidRequest("Malformed game id".to_string()))
}

/// POST /api/game/start
pub async fn start_game<R>(State(state): State<GameAppState<R>>) -> GameResult<Json<StartResponse>>
where
    R: SessionRepository
        + PendingProofRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = StartGameUseCase::new(state.repo.clone());
    let output = use_case.execute().await?;

    Ok(Json(StartResponse {
        game_id: output.game_id,
    }))
}

/// POST /api/game/end
pub async fn end_game<R>(
    State(state): State<GameAppState<R>>,
    GameJson(req): GameJson<EndRequest>,
) -> GameResult<Json<EndResponse>>
where
    R: SessionRepository
        + PendingProofRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let game_id = parse_game_id(&req.game_id)?;

    let use_case = EndGameUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(EndGameInput {
            game_id,
            score: req.score,
        })
        .await?;

    let response = match output {
        EndGameOutput::NotTop3 => EndResponse {
            is_top3: false,
            token: None,
            expires_in: None,
        },
        EndGameOutput::Top3 {
            token,
            expires_in_ms,
        } => EndResponse {
            is_top3: true,
            token: Some(token),
            expires_in: Some(expires_in_ms),
        },
    };

    Ok(Json(response))
}

/// POST /api/game/register-top3
pub async fn register_top3<R>(
    State(state): State<GameAppState<R>>,
    GameJson(req): GameJson<RegisterRequest>,
) -> GameResult<Json<RegisterResponse>>
where
    R: SessionRepository
        + PendingProofRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let game_id = parse_game_id(&req.game_id)?;

    let use_case = RegisterScoreUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.config.clone(),
    );

    let output = use_case
        .execute(RegisterScoreInput {
            game_id,
            username: req.username,
            token: req.token,
        })
        .await?;

    Ok(Json(RegisterResponse {
        success: true,
        score: output.score,
    }))
}

/// GET /api/leaderboard
pub async fn leaderboard<R>(
    State(state): State<GameAppState<R>>,
) -> GameResult<Json<LeaderboardResponse>>
where
    R: SessionRepository
        + PendingProofRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let use_case = FetchLeaderboardUseCase::new(state.repo.clone(), state.config.clone());
    let entries = use_case.execute().await?;

    Ok(Json(LeaderboardResponse {
        leaderboard: entries
            .into_iter()
            .map(|e| LeaderboardEntryDto {
                username: e.username,
                score: e.score,
            })
            .collect(),
        timestamp: Utc::now().timestamp_millis(),
    }))
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().timestamp_millis(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
