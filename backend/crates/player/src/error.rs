//! Player Error Types
//!
//! Player-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type PlayerResult<T> = Result<T, PlayerError>;

#[derive(Debug, Error)]
pub enum PlayerError {
    /// No player record for this identity yet
    #[error("Player not found")]
    PlayerNotFound,

    /// Submitted result is inconsistent
    #[error("Invalid result: {0}")]
    InvalidResult(&'static str),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl PlayerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PlayerError::PlayerNotFound => ErrorKind::NotFound,
            PlayerError::InvalidResult(_) => ErrorKind::UnprocessableEntity,
            PlayerError::Database(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Convert to AppError; database errors are classified by the kernel
    pub fn into_app_error(self) -> AppError {
        match self {
            PlayerError::Database(e) => AppError::from(e),
            other => AppError::new(other.kind(), other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            PlayerError::Database(e) => {
                tracing::error!(error = %e, "Player database error");
            }
            PlayerError::InvalidResult(reason) => {
                tracing::warn!(reason = *reason, "Rejected quiz result");
            }
            _ => {
                tracing::debug!(error = %self, "Player error");
            }
        }
    }
}

impl IntoResponse for PlayerError {
    fn into_response(self) -> Response {
        self.log();
        self.into_app_error().into_response()
    }
}
