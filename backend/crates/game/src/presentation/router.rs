//! API Router

use crate::application::config::GameConfig;
use crate::domain::repository::{LeaderboardRepository, PendingProofRepository, SessionRepository};
use crate::infra::postgres::PgGameRepository;
use crate::presentation::handlers::{self, GameAppState};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

/// Create the API router with the PostgreSQL repository
pub fn api_router(repo: PgGameRepository, config: GameConfig) -> Router {
    api_router_generic(repo, config)
}

/// Create the API router for any repository implementation
pub fn api_router_generic<R>(repo: R, config: GameConfig) -> Router
where
    R: SessionRepository
        + PendingProofRepository
        + LeaderboardRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    let state = GameAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/game/start", post(handlers::start_game::<R>))
        .route("/game/end", post(handlers::end_game::<R>))
        .route("/game/register-top3", post(handlers::register_top3::<R>))
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .route("/health", get(handlers::health))
        .with_state(state)
}
