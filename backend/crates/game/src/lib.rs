//! Game Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Business logic, entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations, background sweeper
//! - `presentation/` - HTTP handlers
//!
//! ## Security Model
//! - Backend is the sole authority for session timing, score bounds, and
//!   leaderboard eligibility
//! - A session id produces at most one outcome: ending a session consumes
//!   it atomically, so a replayed id can never yield a second proof
//! - Proof tokens are issued once, stored only as a SHA-256 digest, and
//!   verified by a compound (session id, digest) lookup in the store

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::GameConfig;
pub use error::{GameError, GameResult};
pub use infra::postgres::PgGameRepository;
pub use infra::sweeper::SweeperHandle;
pub use presentation::router::{api_router, api_router_generic};
