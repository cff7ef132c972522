//! Ensure Player Use Case

use crate::domain::entities::Player;
use crate::domain::repository::PlayerRepository;
use crate::error::PlayerResult;
use launch::VerifiedIdentity;
use std::sync::Arc;

/// Get-or-create the player behind a verified identity
pub struct EnsurePlayerUseCase<P>
where
    P: PlayerRepository,
{
    player_repo: Arc<P>,
}

impl<P> EnsurePlayerUseCase<P>
where
    P: PlayerRepository,
{
    pub fn new(player_repo: Arc<P>) -> Self {
        Self { player_repo }
    }

    pub async fn execute(&self, identity: &VerifiedIdentity) -> PlayerResult<Player> {
        if let Some(player) = self.player_repo.find_by_id(identity.id()).await? {
            return Ok(player);
        }

        let player = self
            .player_repo
            .create(&Player::from_identity(identity))
            .await?;

        tracing::info!(player_id = player.id, "Player created");

        Ok(player)
    }
}
