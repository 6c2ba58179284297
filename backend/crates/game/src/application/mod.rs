//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod config;
pub mod end_game;
pub mod fetch_leaderboard;
pub mod register_score;
pub mod start_game;
