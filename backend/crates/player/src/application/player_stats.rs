//! Player Stats Use Case

use crate::application::config::PlayerConfig;
use crate::domain::entities::{PlayerStats, QuizResult};
use crate::domain::repository::QuizResultRepository;
use crate::domain::services::aggregate_stats;
use crate::domain::value_objects::ResultLimit;
use crate::error::PlayerResult;
use std::sync::Arc;

/// Per-player statistics and result history
pub struct PlayerStatsUseCase<Q>
where
    Q: QuizResultRepository,
{
    result_repo: Arc<Q>,
    config: Arc<PlayerConfig>,
}

impl<Q> PlayerStatsUseCase<Q>
where
    Q: QuizResultRepository,
{
    pub fn new(result_repo: Arc<Q>, config: Arc<PlayerConfig>) -> Self {
        Self {
            result_repo,
            config,
        }
    }

    pub async fn stats(&self, player_id: i64) -> PlayerResult<PlayerStats> {
        let scores = self.result_repo.scores_for(player_id).await?;
        Ok(aggregate_stats(&scores))
    }

    /// Newest first; limit defaults from config and is clamped to 1..=100
    pub async fn recent(&self, player_id: i64, limit: Option<u32>) -> PlayerResult<Vec<QuizResult>> {
        let limit = ResultLimit::new(limit, self.config.recent_results_default);
        self.result_repo.recent_for(player_id, limit.as_i64()).await
    }
}
