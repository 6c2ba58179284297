//! Infrastructure Layer
//!
//! PostgreSQL repository implementations and the background sweeper.

pub mod postgres;
pub mod sweeper;
