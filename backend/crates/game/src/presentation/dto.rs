//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response for POST /api/game/start
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartResponse {
    pub game_id: Uuid,
}

/// Request for POST /api/game/end
///
/// The game id arrives as a string and is parsed at the boundary so a
/// malformed id surfaces as a 400, not a framework rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndRequest {
    pub game_id: String,
    pub score: i64,
}

/// Response for POST /api/game/end
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EndResponse {
    pub is_top3: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_in: Option<i64>,
}

/// Request for POST /api/game/register-top3
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub game_id: String,
    pub username: String,
    pub token: String,
}

/// Response for POST /api/game/register-top3
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub score: i64,
}

/// One row of GET /api/leaderboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryDto {
    pub username: String,
    pub score: i64,
}

/// Response for GET /api/leaderboard
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<LeaderboardEntryDto>,
    pub timestamp: i64,
}

/// Response for GET /api/health
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: i64,
    pub version: &'static str,
}
