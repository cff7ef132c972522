//! Launch (Mini-App Launch Payload) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Payload parsing, canonical check-string, signature scheme, identity
//! - `application/` - Validation use case and its configuration
//! - `presentation/` - `POST /validate`, identity middleware for protected routes
//!
//! ## Security Model
//! - The host platform signs every launch payload with a key derived from the
//!   bot token; nothing in the payload is trusted until that signature matches
//! - The bot token is injected configuration; when absent every check fails
//! - Every failure collapses to one externally visible "invalid" outcome;
//!   the concrete reason only reaches the logs

pub mod application;
pub mod domain;
pub mod error;
pub mod presentation;

// Re-exports for convenience
pub use application::config::LaunchConfig;
pub use application::validate_launch::{ValidateLaunchUseCase, Verdict};
pub use domain::identity::VerifiedIdentity;
pub use domain::services::{sign_fields, sign_payload, verify_signature};
pub use error::{LaunchError, LaunchResult};
pub use presentation::handlers::LaunchAppState;
pub use presentation::middleware::require_launch_identity;
pub use presentation::router::launch_router;

#[cfg(test)]
mod tests;
