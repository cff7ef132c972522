//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::QuizResultId;
use launch::VerifiedIdentity;

use crate::domain::services::rating_earned;
use crate::domain::value_objects::RatingTier;

/// Player profile, keyed by the host platform's user id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: i64,
    pub first_name: String,
    pub last_name: Option<String>,
    pub username: Option<String>,
    pub photo_url: Option<String>,
    pub language_code: Option<String>,
    pub is_premium: Option<bool>,
    pub rating: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Player {
    /// New player from a verified identity, starting at rating 0
    pub fn from_identity(identity: &VerifiedIdentity) -> Self {
        let now = Utc::now();
        Self {
            id: identity.id(),
            first_name: identity.first_name().unwrap_or_default().to_string(),
            last_name: identity.last_name().map(str::to_string),
            username: identity.username().map(str::to_string),
            photo_url: identity.photo_url().map(str::to_string),
            language_code: identity.language_code().map(str::to_string),
            is_premium: identity.is_premium(),
            rating: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn tier(&self) -> RatingTier {
        RatingTier::from_rating(self.rating)
    }
}

/// One finished quiz run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResult {
    pub id: QuizResultId,
    pub user_id: i64,
    pub quiz_id: Option<String>,
    pub score: i64,
    pub rating_earned: i64,
    pub questions_answered: i32,
    pub correct_answers: i32,
    pub completed_at: DateTime<Utc>,
}

impl QuizResult {
    /// Record a run; rating credit is derived from the score
    pub fn new(
        user_id: i64,
        quiz_id: Option<String>,
        score: i64,
        questions_answered: i32,
        correct_answers: i32,
    ) -> Self {
        Self {
            id: QuizResultId::new(),
            user_id,
            quiz_id,
            score,
            rating_earned: rating_earned(score),
            questions_answered,
            correct_answers,
            completed_at: Utc::now(),
        }
    }
}

/// Aggregate over a player's results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlayerStats {
    pub total_quizzes: i64,
    pub total_score: i64,
    pub total_rating_earned: i64,
    pub average_score: i64,
    pub best_score: i64,
}

/// A row of the leaderboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub rank: u32,
    pub player: Player,
    pub tier: RatingTier,
}
