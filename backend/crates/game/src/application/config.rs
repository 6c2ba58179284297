//! Application Configuration
//!
//! Configuration for the game application layer.

use std::env;
use std::time::Duration;

/// Game application configuration
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Shortest accepted game duration
    pub min_game_duration: Duration,
    /// Longest accepted game duration
    pub max_game_duration: Duration,
    /// Proof token lifetime
    pub token_expiry: Duration,
    /// Lowest accepted score
    pub min_score: i64,
    /// Highest accepted score
    pub max_score: i64,
    /// Number of leaderboard rows kept
    pub leaderboard_capacity: i64,
    /// Interval between sweep runs
    pub sweep_interval: Duration,
    /// Sessions older than this are swept
    pub session_retention: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_game_duration: Duration::from_millis(1),
            max_game_duration: Duration::from_millis(600_000),
            token_expiry: Duration::from_secs(300),
            min_score: 0,
            max_score: 999_999,
            leaderboard_capacity: 3,
            sweep_interval: Duration::from_secs(300),
            session_retention: Duration::from_secs(3600),
        }
    }
}

impl GameConfig {
    /// Build a config from environment variables, falling back to the
    /// defaults for anything unset or unparsable. Duration variables are
    /// in milliseconds.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_game_duration: env_ms("MIN_GAME_DURATION").unwrap_or(defaults.min_game_duration),
            max_game_duration: env_ms("MAX_GAME_DURATION").unwrap_or(defaults.max_game_duration),
            token_expiry: env_ms("TOKEN_EXPIRY").unwrap_or(defaults.token_expiry),
            min_score: env_i64("MIN_SCORE").unwrap_or(defaults.min_score),
            max_score: env_i64("MAX_SCORE").unwrap_or(defaults.max_score),
            ..defaults
        }
    }

    pub fn min_game_duration_ms(&self) -> i64 {
        self.min_game_duration.as_millis() as i64
    }

    pub fn max_game_duration_ms(&self) -> i64 {
        self.max_game_duration.as_millis() as i64
    }

    pub fn token_expiry_ms(&self) -> i64 {
        self.token_expiry.as_millis() as i64
    }

    pub fn session_retention_ms(&self) -> i64 {
        self.session_retention.as_millis() as i64
    }
}

fn env_i64(key: &str) -> Option<i64> {
    env::var(key).ok()?.trim().parse().ok()
}

fn env_ms(key: &str) -> Option<Duration> {
    let ms: u64 = env::var(key).ok()?.trim().parse().ok()?;
    Some(Duration::from_millis(ms))
}
