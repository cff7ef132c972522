//! Domain Services
//!
//! Pure scoring and aggregation rules.

use std::time::Duration;

use crate::domain::entities::PlayerStats;

/// Points for a correct answer given instantly
pub const DEFAULT_MAX_POINTS: u64 = 1000;

/// Rating credited per finished quiz: one point per full 100 score
pub fn rating_earned(score: i64) -> i64 {
    score.max(0) / 100
}

/// Points for one answered question
///
/// Wrong answers score nothing. A correct answer earns `max_points` when
/// given instantly, falling linearly to half of it at the time limit and
/// staying there for late answers. A zero time limit means untimed.
pub fn score_answer(correct: bool, elapsed: Duration, time_limit: Duration, max_points: u64) -> u64 {
    if !correct {
        return 0;
    }
    if time_limit.is_zero() {
        return max_points;
    }

    let limit_ms = time_limit.as_millis();
    let elapsed_ms = elapsed.as_millis().min(limit_ms);
    let max = u128::from(max_points);

    // max * (1 - elapsed / (2 * limit)), rounded to nearest
    let penalty = (max * elapsed_ms + limit_ms) / (2 * limit_ms);
    u64::try_from(max - penalty.min(max)).unwrap_or(max_points)
}

/// Aggregate scores into stats; average rounds half away from zero
pub fn aggregate_stats(scores: &[(i64, i64)]) -> PlayerStats {
    if scores.is_empty() {
        return PlayerStats::default();
    }

    let total_quizzes = scores.len() as i64;
    let total_score = scores
        .iter()
        .fold(0i64, |acc, (score, _)| acc.saturating_add(*score));
    let total_rating_earned = scores
        .iter()
        .fold(0i64, |acc, (_, rating)| acc.saturating_add(*rating));
    let best_score = scores.iter().map(|(score, _)| *score).max().unwrap_or(0);

    let average_score = (total_score as f64 / total_quizzes as f64).round() as i64;

    PlayerStats {
        total_quizzes,
        total_score,
        total_rating_earned,
        average_score,
        best_score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_earned_floors() {
        assert_eq!(rating_earned(0), 0);
        assert_eq!(rating_earned(99), 0);
        assert_eq!(rating_earned(100), 1);
        assert_eq!(rating_earned(1999), 19);
        assert_eq!(rating_earned(-50), 0);
    }

    #[test]
    fn test_score_answer_wrong_is_zero() {
        let limit = Duration::from_secs(20);
        assert_eq!(score_answer(false, Duration::ZERO, limit, 1000), 0);
    }

    #[test]
    fn test_score_answer_decays_to_half() {
        let limit = Duration::from_secs(20);
        assert_eq!(score_answer(true, Duration::ZERO, limit, 1000), 1000);
        assert_eq!(score_answer(true, Duration::from_secs(10), limit, 1000), 750);
        assert_eq!(score_answer(true, Duration::from_secs(20), limit, 1000), 500);
        assert_eq!(score_answer(true, Duration::from_secs(60), limit, 1000), 500);
    }

    #[test]
    fn test_score_answer_is_monotonic() {
        let limit = Duration::from_secs(30);
        let mut previous = u64::MAX;
        for ms in (0..=30_000).step_by(250) {
            let points = score_answer(true, Duration::from_millis(ms), limit, 1000);
            assert!(points <= previous);
            previous = points;
        }
    }

    #[test]
    fn test_score_answer_untimed() {
        assert_eq!(
            score_answer(true, Duration::from_secs(5), Duration::ZERO, 1000),
            1000
        );
    }

    #[test]
    fn test_aggregate_stats() {
        let stats = aggregate_stats(&[(250, 2), (100, 1), (151, 1)]);
        assert_eq!(stats.total_quizzes, 3);
        assert_eq!(stats.total_score, 501);
        assert_eq!(stats.total_rating_earned, 4);
        assert_eq!(stats.average_score, 167);
        assert_eq!(stats.best_score, 250);
    }

    #[test]
    fn test_aggregate_stats_rounds_half_up() {
        assert_eq!(aggregate_stats(&[(1, 0), (2, 0)]).average_score, 2);
    }

    #[test]
    fn test_aggregate_stats_saturates() {
        let stats = aggregate_stats(&[(i64::MAX, i64::MAX), (1, 1)]);
        assert_eq!(stats.total_score, i64::MAX);
        assert_eq!(stats.total_rating_earned, i64::MAX);
        assert_eq!(stats.best_score, i64::MAX);
        assert!(stats.average_score > 0);
    }

    #[test]
    fn test_aggregate_stats_empty() {
        assert_eq!(aggregate_stats(&[]), PlayerStats::default());
    }
}
