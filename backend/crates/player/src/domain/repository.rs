//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entities::{Player, QuizResult};
use crate::error::PlayerResult;

/// Player repository trait
#[trait_variant::make(PlayerRepository: Send)]
pub trait LocalPlayerRepository {
    async fn find_by_id(&self, player_id: i64) -> PlayerResult<Option<Player>>;

    /// Insert the player unless one with the same id exists; returns the stored row
    async fn create(&self, player: &Player) -> PlayerResult<Player>;

    /// Highest rating first, ties by id ascending
    async fn top_by_rating(&self, limit: i64) -> PlayerResult<Vec<Player>>;
}

/// Quiz result repository trait
#[trait_variant::make(QuizResultRepository: Send)]
pub trait LocalQuizResultRepository {
    /// Store the result and credit its `rating_earned` to the player, both or
    /// neither; returns the new rating
    async fn record_and_credit(&self, result: &QuizResult) -> PlayerResult<i64>;

    /// `(score, rating_earned)` of every result of a player
    async fn scores_for(&self, player_id: i64) -> PlayerResult<Vec<(i64, i64)>>;

    /// Newest first
    async fn recent_for(&self, player_id: i64, limit: i64) -> PlayerResult<Vec<QuizResult>>;
}
