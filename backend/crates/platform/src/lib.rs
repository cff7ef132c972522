//! Platform Crate - Technical Infrastructure
//!
//! Shared technical foundations with no domain knowledge:
//! - HMAC-SHA256, hex rendering and constant-time comparison
//! - A zeroizing, log-safe wrapper for long-lived secrets
//! - Environment configuration helpers

pub mod config;
pub mod crypto;
pub mod secret;
