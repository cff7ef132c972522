//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.

pub mod config;
pub mod ensure_player;
pub mod leaderboard;
pub mod player_stats;
pub mod record_result;
