//! Start Game Use Case

use crate::domain::entities::GameSession;
use crate::domain::repository::SessionRepository;
use crate::error::GameResult;
use std::sync::Arc;
use uuid::Uuid;

/// Output DTO for start game
#[derive(Debug, Clone)]
pub struct StartGameOutput {
    pub game_id: Uuid,
}

/// Start Game Use Case
pub struct StartGameUseCase<S>
where
    S: SessionRepository,
{
    session_repo: Arc<S>,
}

impl<S> StartGameUseCase<S>
where
    S: SessionRepository,
{
    pub fn new(session_repo: Arc<S>) -> Self {
        Self { session_repo }
    }

    pub async fn execute(&self) -> GameResult<StartGameOutput> {
        let session = GameSession::new();
        self.session_repo.create(&session).await?;

        tracing::info!(game_id = %session.id, "Game session started");

        Ok(StartGameOutput {
            game_id: session.id,
        })
    }
}
