//! HTTP Handlers
//!
//! Every handler except the leaderboard runs behind the launch middleware
//! and reads the caller from `Extension<VerifiedIdentity>`.

use crate::application::config::PlayerConfig;
use crate::application::ensure_player::EnsurePlayerUseCase;
use crate::application::leaderboard::LeaderboardUseCase;
use crate::application::player_stats::PlayerStatsUseCase;
use crate::application::record_result::RecordResultUseCase;
use crate::domain::repository::{PlayerRepository, QuizResultRepository};
use crate::error::PlayerResult;
use crate::presentation::dto::{
    LeaderboardEntryResponse, LimitQuery, PlayerResponse, PlayerStatsResponse,
    QuizResultResponse, RecordResultRequest, RecordResultResponse,
};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::{Extension, Json};
use launch::VerifiedIdentity;
use std::sync::Arc;

/// Shared state for player handlers
#[derive(Clone)]
pub struct PlayerAppState<R>
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<PlayerConfig>,
}

/// POST /api/players/me
pub async fn ensure_player<R>(
    State(state): State<PlayerAppState<R>>,
    Extension(identity): Extension<VerifiedIdentity>,
) -> PlayerResult<Json<PlayerResponse>>
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    let player = EnsurePlayerUseCase::new(state.repo.clone())
        .execute(&identity)
        .await?;

    Ok(Json(player.into()))
}

/// GET /api/players/me/stats
pub async fn player_stats<R>(
    State(state): State<PlayerAppState<R>>,
    Extension(identity): Extension<VerifiedIdentity>,
) -> PlayerResult<Json<PlayerStatsResponse>>
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    let stats = PlayerStatsUseCase::new(state.repo.clone(), state.config.clone())
        .stats(identity.id())
        .await?;

    Ok(Json(stats.into()))
}

/// GET /api/players/me/results?limit=N
pub async fn recent_results<R>(
    State(state): State<PlayerAppState<R>>,
    Extension(identity): Extension<VerifiedIdentity>,
    Query(query): Query<LimitQuery>,
) -> PlayerResult<Json<Vec<QuizResultResponse>>>
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    let results = PlayerStatsUseCase::new(state.repo.clone(), state.config.clone())
        .recent(identity.id(), query.limit)
        .await?;

    Ok(Json(results.into_iter().map(Into::into).collect()))
}

/// POST /api/results
pub async fn record_result<R>(
    State(state): State<PlayerAppState<R>>,
    Extension(identity): Extension<VerifiedIdentity>,
    Json(req): Json<RecordResultRequest>,
) -> PlayerResult<(StatusCode, Json<RecordResultResponse>)>
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    let use_case =
        RecordResultUseCase::new(state.repo.clone(), state.repo.clone(), state.config.clone());

    let output = use_case.execute(&identity, req.into()).await?;

    Ok((StatusCode::CREATED, Json(output.into())))
}

/// GET /api/leaderboard?limit=N
pub async fn leaderboard<R>(
    State(state): State<PlayerAppState<R>>,
    Query(query): Query<LimitQuery>,
) -> PlayerResult<Json<Vec<LeaderboardEntryResponse>>>
where
    R: PlayerRepository + QuizResultRepository + Clone + Send + Sync + 'static,
{
    let entries = LeaderboardUseCase::new(state.repo.clone(), state.config.clone())
        .top(query.limit)
        .await?;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}
