//! Application Configuration

use crate::domain::services::DEFAULT_MAX_POINTS;

/// Player application configuration
#[derive(Debug, Clone)]
pub struct PlayerConfig {
    /// Recent results returned when no limit is given
    pub recent_results_default: u32,
    /// Leaderboard size when no limit is given
    pub leaderboard_default: u32,
    /// Points for an instant correct answer
    pub max_points_per_answer: u64,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            recent_results_default: 10,
            leaderboard_default: 50,
            max_points_per_answer: DEFAULT_MAX_POINTS,
        }
    }
}
