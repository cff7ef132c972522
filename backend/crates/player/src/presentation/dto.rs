//! Data Transfer Objects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::application::record_result::{AnswerInput, RecordResultInput, RecordResultOutput};
use crate::domain::entities::{LeaderboardEntry, Player, PlayerStats, QuizResult};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub id: i64,
    pub first_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_premium: Option<bool>,
    pub rating: i64,
    pub tier: &'static str,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Player> for PlayerResponse {
    fn from(player: Player) -> Self {
        Self {
            tier: player.tier().code(),
            id: player.id,
            first_name: player.first_name,
            last_name: player.last_name,
            username: player.username,
            photo_url: player.photo_url,
            language_code: player.language_code,
            is_premium: player.is_premium,
            rating: player.rating,
            created_at: player.created_at,
            updated_at: player.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsResponse {
    pub total_quizzes: i64,
    pub total_score: i64,
    pub total_rating_earned: i64,
    pub average_score: i64,
    pub best_score: i64,
}

impl From<PlayerStats> for PlayerStatsResponse {
    fn from(stats: PlayerStats) -> Self {
        Self {
            total_quizzes: stats.total_quizzes,
            total_score: stats.total_score,
            total_rating_earned: stats.total_rating_earned,
            average_score: stats.average_score,
            best_score: stats.best_score,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResultResponse {
    pub id: Uuid,
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_id: Option<String>,
    pub score: i64,
    pub rating_earned: i64,
    pub questions_answered: i32,
    pub correct_answers: i32,
    pub completed_at: DateTime<Utc>,
}

impl From<QuizResult> for QuizResultResponse {
    fn from(result: QuizResult) -> Self {
        Self {
            id: result.id.into_uuid(),
            user_id: result.user_id,
            quiz_id: result.quiz_id,
            score: result.score,
            rating_earned: result.rating_earned,
            questions_answered: result.questions_answered,
            correct_answers: result.correct_answers,
            completed_at: result.completed_at,
        }
    }
}

/// Per-question timing sent by the client
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    pub correct: bool,
    pub elapsed_ms: u64,
    #[serde(default)]
    pub time_limit_ms: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResultRequest {
    #[serde(default)]
    pub quiz_id: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub questions_answered: i32,
    #[serde(default)]
    pub correct_answers: i32,
    #[serde(default)]
    pub answers: Option<Vec<AnswerRequest>>,
}

impl From<RecordResultRequest> for RecordResultInput {
    fn from(req: RecordResultRequest) -> Self {
        Self {
            quiz_id: req.quiz_id.filter(|id| !id.trim().is_empty()),
            score: req.score,
            questions_answered: req.questions_answered,
            correct_answers: req.correct_answers,
            answers: req.answers.map(|answers| {
                answers
                    .into_iter()
                    .map(|a| AnswerInput {
                        correct: a.correct,
                        elapsed: Duration::from_millis(a.elapsed_ms),
                        time_limit: Duration::from_millis(a.time_limit_ms),
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordResultResponse {
    pub result: QuizResultResponse,
    pub rating_earned: i64,
    pub rating: i64,
}

impl From<RecordResultOutput> for RecordResultResponse {
    fn from(output: RecordResultOutput) -> Self {
        Self {
            result: output.result.into(),
            rating_earned: output.rating_earned,
            rating: output.rating,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntryResponse {
    pub rank: u32,
    pub tier: &'static str,
    pub player: PlayerResponse,
}

impl From<LeaderboardEntry> for LeaderboardEntryResponse {
    fn from(entry: LeaderboardEntry) -> Self {
        Self {
            rank: entry.rank,
            tier: entry.tier.code(),
            player: entry.player.into(),
        }
    }
}

/// `?limit=N`
#[derive(Debug, Default, Deserialize)]
pub struct LimitQuery {
    pub limit: Option<u32>,
}
