//! Player (Results, Rating, Leaderboard) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, rating tiers, scoring rules, repository traits
//! - `application/` - Use cases
//! - `infra/` - PostgreSQL implementation
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Security Model
//! - Every player operation is keyed by the id of a `VerifiedIdentity`;
//!   the launch middleware is the only source of that identity
//! - Rating is credited with a single atomic UPDATE

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::PlayerConfig;
pub use error::{PlayerError, PlayerResult};
pub use infra::postgres::PgPlayerRepository;
pub use presentation::router::player_router;
