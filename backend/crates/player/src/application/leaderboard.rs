//! Leaderboard Use Case

use crate::application::config::PlayerConfig;
use crate::domain::entities::LeaderboardEntry;
use crate::domain::repository::PlayerRepository;
use crate::domain::value_objects::ResultLimit;
use crate::error::PlayerResult;
use std::sync::Arc;

pub struct LeaderboardUseCase<P>
where
    P: PlayerRepository,
{
    player_repo: Arc<P>,
    config: Arc<PlayerConfig>,
}

impl<P> LeaderboardUseCase<P>
where
    P: PlayerRepository,
{
    pub fn new(player_repo: Arc<P>, config: Arc<PlayerConfig>) -> Self {
        Self {
            player_repo,
            config,
        }
    }

    /// Top players by rating with 1-based rank and tier
    pub async fn top(&self, limit: Option<u32>) -> PlayerResult<Vec<LeaderboardEntry>> {
        let limit = ResultLimit::new(limit, self.config.leaderboard_default);
        let players = self.player_repo.top_by_rating(limit.as_i64()).await?;

        Ok(players
            .into_iter()
            .zip(1u32..)
            .map(|(player, rank)| LeaderboardEntry {
                rank,
                tier: player.tier(),
                player,
            })
            .collect())
    }
}
