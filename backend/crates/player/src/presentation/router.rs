//! Player Router

use crate::application::config::PlayerConfig;
use crate::domain::repository::{PlayerRepository, QuizResultRepository};
use crate::presentation::handlers::{self, PlayerAppState};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use launch::{LaunchAppState, require_launch_identity};
use std::sync::Arc;

/// Create the player router for any repository implementation
///
/// Routes under `/players/me` and `/results` require `Authorization: tma ...`;
/// `/leaderboard` is public.
pub fn player_router<R>(repo: R, config: PlayerConfig, launch_state: LaunchAppState) -> Router
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    let state = PlayerAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
    };

    Router::new()
        .route("/players/me", post(handlers::ensure_player::<R>))
        .route("/players/me/stats", get(handlers::player_stats::<R>))
        .route("/players/me/results", get(handlers::recent_results::<R>))
        .route("/results", post(handlers::record_result::<R>))
        .route_layer(middleware::from_fn_with_state(
            launch_state,
            require_launch_identity,
        ))
        .route("/leaderboard", get(handlers::leaderboard::<R>))
        .with_state(state)
}
