//! Record Result Use Case

use crate::application::config::PlayerConfig;
use crate::application::ensure_player::EnsurePlayerUseCase;
use crate::domain::entities::QuizResult;
use crate::domain::repository::{PlayerRepository, QuizResultRepository};
use crate::domain::services::score_answer;
use crate::error::{PlayerError, PlayerResult};
use launch::VerifiedIdentity;
use std::sync::Arc;
use std::time::Duration;

/// One answered question, timed by the client
#[derive(Debug, Clone, Copy)]
pub struct AnswerInput {
    pub correct: bool,
    pub elapsed: Duration,
    pub time_limit: Duration,
}

/// Input DTO for record result
#[derive(Debug, Clone, Default)]
pub struct RecordResultInput {
    pub quiz_id: Option<String>,
    pub score: i64,
    pub questions_answered: i32,
    pub correct_answers: i32,
    /// When present, score and counts are recomputed from these
    pub answers: Option<Vec<AnswerInput>>,
}

/// Output DTO for record result
#[derive(Debug, Clone)]
pub struct RecordResultOutput {
    pub result: QuizResult,
    pub rating_earned: i64,
    /// Player rating after the credit
    pub rating: i64,
}

/// Record Result Use Case
pub struct RecordResultUseCase<P, Q>
where
    P: PlayerRepository,
    Q: QuizResultRepository,
{
    player_repo: Arc<P>,
    result_repo: Arc<Q>,
    config: Arc<PlayerConfig>,
}

impl<P, Q> RecordResultUseCase<P, Q>
where
    P: PlayerRepository,
    Q: QuizResultRepository,
{
    pub fn new(player_repo: Arc<P>, result_repo: Arc<Q>, config: Arc<PlayerConfig>) -> Self {
        Self {
            player_repo,
            result_repo,
            config,
        }
    }

    pub async fn execute(
        &self,
        identity: &VerifiedIdentity,
        input: RecordResultInput,
    ) -> PlayerResult<RecordResultOutput> {
        let (score, questions_answered, correct_answers) = match &input.answers {
            Some(answers) => self.score_answers(answers)?,
            None => (input.score, input.questions_answered, input.correct_answers),
        };

        validate_counts(
            score,
            questions_answered,
            correct_answers,
            self.config.max_points_per_answer,
        )?;

        let player = EnsurePlayerUseCase::new(self.player_repo.clone())
            .execute(identity)
            .await?;

        let result = QuizResult::new(
            player.id,
            input.quiz_id,
            score,
            questions_answered,
            correct_answers,
        );
        let rating = self.result_repo.record_and_credit(&result).await?;

        tracing::info!(
            player_id = player.id,
            result_id = %result.id,
            score = result.score,
            rating_earned = result.rating_earned,
            rating,
            "Quiz result recorded"
        );

        Ok(RecordResultOutput {
            rating_earned: result.rating_earned,
            result,
            rating,
        })
    }

    fn score_answers(&self, answers: &[AnswerInput]) -> PlayerResult<(i64, i32, i32)> {
        let max_points = self.config.max_points_per_answer;
        let total: u64 = answers
            .iter()
            .map(|a| score_answer(a.correct, a.elapsed, a.time_limit, max_points))
            .sum();

        let score = i64::try_from(total).map_err(|_| PlayerError::InvalidResult("score out of range"))?;
        let answered = i32::try_from(answers.len())
            .map_err(|_| PlayerError::InvalidResult("too many answers"))?;
        let correct = answers.iter().filter(|a| a.correct).count() as i32;

        Ok((score, answered, correct))
    }
}

fn validate_counts(
    score: i64,
    questions_answered: i32,
    correct_answers: i32,
    max_points_per_answer: u64,
) -> PlayerResult<()> {
    if score < 0 {
        return Err(PlayerError::InvalidResult("score must not be negative"));
    }
    if questions_answered < 0 || correct_answers < 0 {
        return Err(PlayerError::InvalidResult("counts must not be negative"));
    }
    if correct_answers > questions_answered {
        return Err(PlayerError::InvalidResult(
            "correct answers exceed questions answered",
        ));
    }

    let max_points = i64::try_from(max_points_per_answer).unwrap_or(i64::MAX);
    if score > i64::from(questions_answered).saturating_mul(max_points) {
        return Err(PlayerError::InvalidResult(
            "score exceeds the maximum for the questions answered",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_counts() {
        assert!(validate_counts(0, 0, 0, 1000).is_ok());
        assert!(validate_counts(500, 5, 5, 1000).is_ok());
        assert!(validate_counts(-1, 5, 3, 1000).is_err());
        assert!(validate_counts(100, 3, 4, 1000).is_err());
        assert!(validate_counts(100, -1, 0, 1000).is_err());
    }

    #[test]
    fn test_validate_counts_caps_score() {
        assert!(validate_counts(5000, 5, 5, 1000).is_ok());
        assert!(validate_counts(5001, 5, 5, 1000).is_err());
        assert!(validate_counts(1, 0, 0, 1000).is_err());
        assert!(validate_counts(i64::MAX, i32::MAX, 0, u64::MAX).is_ok());
        assert!(validate_counts(i64::MAX, 1, 1, 1000).is_err());
    }
}
