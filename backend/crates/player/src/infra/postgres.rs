//! PostgreSQL Repository Implementations

use crate::domain::entities::{Player, QuizResult};
use crate::domain::repository::{PlayerRepository, QuizResultRepository};
use crate::error::{PlayerError, PlayerResult};
use chrono::{DateTime, Utc};
use kernel::id::QuizResultId;
use sqlx::PgPool;
use uuid::Uuid;

const PLAYER_COLUMNS: &str = "id, first_name, last_name, username, photo_url, language_code, \
     is_premium, rating, created_at, updated_at";

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgPlayerRepository {
    pool: PgPool,
}

impl PgPlayerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PlayerRepository for PgPlayerRepository {
    async fn find_by_id(&self, player_id: i64) -> PlayerResult<Option<Player>> {
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players WHERE id = $1"
        ))
        .bind(player_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PlayerRow::into_player))
    }

    async fn create(&self, player: &Player) -> PlayerResult<Player> {
        // The no-op update makes RETURNING yield the existing row on conflict
        let row = sqlx::query_as::<_, PlayerRow>(&format!(
            r#"
            INSERT INTO players (
                id,
                first_name,
                last_name,
                username,
                photo_url,
                language_code,
                is_premium,
                rating
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET updated_at = players.updated_at
            RETURNING {PLAYER_COLUMNS}
            "#
        ))
        .bind(player.id)
        .bind(&player.first_name)
        .bind(&player.last_name)
        .bind(&player.username)
        .bind(&player.photo_url)
        .bind(&player.language_code)
        .bind(player.is_premium)
        .bind(player.rating)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_player())
    }

    async fn top_by_rating(&self, limit: i64) -> PlayerResult<Vec<Player>> {
        let rows = sqlx::query_as::<_, PlayerRow>(&format!(
            "SELECT {PLAYER_COLUMNS} FROM players ORDER BY rating DESC, id ASC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PlayerRow::into_player).collect())
    }
}

impl QuizResultRepository for PgPlayerRepository {
    async fn record_and_credit(&self, result: &QuizResult) -> PlayerResult<i64> {
        let mut tx = self.pool.begin().await?;

        // Dropping `tx` without commit rolls both statements back
        let rating = sqlx::query_scalar::<_, i64>(
            r#"
            UPDATE players
            SET rating = rating + $2, updated_at = NOW()
            WHERE id = $1
            RETURNING rating
            "#,
        )
        .bind(result.user_id)
        .bind(result.rating_earned)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(PlayerError::PlayerNotFound)?;

        sqlx::query(
            r#"
            INSERT INTO quiz_results (
                id,
                user_id,
                quiz_id,
                score,
                rating_earned,
                questions_answered,
                correct_answers,
                completed_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(result.id.into_uuid())
        .bind(result.user_id)
        .bind(&result.quiz_id)
        .bind(result.score)
        .bind(result.rating_earned)
        .bind(result.questions_answered)
        .bind(result.correct_answers)
        .bind(result.completed_at)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(rating)
    }

    async fn scores_for(&self, player_id: i64) -> PlayerResult<Vec<(i64, i64)>> {
        let rows = sqlx::query_as::<_, (i64, i64)>(
            "SELECT score, rating_earned FROM quiz_results WHERE user_id = $1",
        )
        .bind(player_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn recent_for(&self, player_id: i64, limit: i64) -> PlayerResult<Vec<QuizResult>> {
        let rows = sqlx::query_as::<_, QuizResultRow>(
            r#"
            SELECT
                id,
                user_id,
                quiz_id,
                score,
                rating_earned,
                questions_answered,
                correct_answers,
                completed_at
            FROM quiz_results
            WHERE user_id = $1
            ORDER BY completed_at DESC, id
            LIMIT $2
            "#,
        )
        .bind(player_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(QuizResultRow::into_result).collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct PlayerRow {
    id: i64,
    first_name: String,
    last_name: Option<String>,
    username: Option<String>,
    photo_url: Option<String>,
    language_code: Option<String>,
    is_premium: Option<bool>,
    rating: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PlayerRow {
    fn into_player(self) -> Player {
        Player {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            username: self.username,
            photo_url: self.photo_url,
            language_code: self.language_code,
            is_premium: self.is_premium,
            rating: self.rating,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct QuizResultRow {
    id: Uuid,
    user_id: i64,
    quiz_id: Option<String>,
    score: i64,
    rating_earned: i64,
    questions_answered: i32,
    correct_answers: i32,
    completed_at: DateTime<Utc>,
}

impl QuizResultRow {
    fn into_result(self) -> QuizResult {
        QuizResult {
            id: QuizResultId::from_uuid(self.id),
            user_id: self.user_id,
            quiz_id: self.quiz_id,
            score: self.score,
            rating_earned: self.rating_earned,
            questions_answered: self.questions_answered,
            correct_answers: self.correct_answers,
            completed_at: self.completed_at,
        }
    }
}
