//! Domain Layer - Business logic and entities
//!
//! - Entities (Player, QuizResult, PlayerStats, LeaderboardEntry)
//! - Value objects (RatingTier, ResultLimit)
//! - Domain services (answer scoring, rating credit, stats aggregation)
//! - Repository traits

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;
