//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (random bytes, SHA-256, hex rendering)
//! - Proof-token generation and digesting

pub mod crypto;
