//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (GameSession, PendingProof, LeaderboardEntry)
//! - Domain value objects (Username)
//! - Domain services (token issue/digest, leaderboard qualification)
//! - Repository traits (interfaces)

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
