//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors are handled
//! through `game::GameError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use game::domain::repository::CleanupRepository;
use game::infra::sweeper::spawn_sweeper;
use game::{GameConfig, PgGameRepository, api_router};
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,game=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    let config = GameConfig::from_env();
    let repo = PgGameRepository::new(pool.clone());

    // Idempotent schema bootstrap
    repo.ensure_schema().await?;

    // Startup cleanup: remove expired game data
    // Errors here should not prevent server startup
    match repo.cleanup_expired(config.session_retention_ms()).await {
        Ok((proofs, sessions)) => {
            tracing::info!(
                proofs_deleted = proofs,
                sessions_deleted = sessions,
                "Startup cleanup completed"
            );
        }
        Err(e) => {
            tracing::warn!(error = %e, "Startup cleanup failed, continuing anyway");
        }
    }

    // Periodic sweep, independent of request handling
    let sweeper = spawn_sweeper(repo.clone(), Arc::new(config.clone()));

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
        ]));

    // Build router
    let app = Router::new()
        .nest("/api", api_router(repo, config))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    sweeper.shutdown().await;

    Ok(())
}
