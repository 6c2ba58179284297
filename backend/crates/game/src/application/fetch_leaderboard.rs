//! Fetch Leaderboard Use Case

use crate::application::config::GameConfig;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::repository::LeaderboardRepository;
use crate::error::GameResult;
use std::sync::Arc;

/// Fetch Leaderboard Use Case
pub struct FetchLeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    leaderboard_repo: Arc<L>,
    config: Arc<GameConfig>,
}

impl<L> FetchLeaderboardUseCase<L>
where
    L: LeaderboardRepository,
{
    pub fn new(leaderboard_repo: Arc<L>, config: Arc<GameConfig>) -> Self {
        Self {
            leaderboard_repo,
            config,
        }
    }

    pub async fn execute(&self) -> GameResult<Vec<LeaderboardEntry>> {
        self.leaderboard_repo
            .top(self.config.leaderboard_capacity)
            .await
    }
}
