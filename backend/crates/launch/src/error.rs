//! Launch Error Types
//!
//! Internal rejection reasons for launch payloads. Callers only ever see
//! "invalid": the reason is logged, never returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

pub type LaunchResult<T> = Result<T, LaunchError>;

#[derive(Debug, Error)]
pub enum LaunchError {
    /// Bot token not configured; verification cannot run
    #[error("Launch verification secret is not configured")]
    ConfigurationMissing,

    /// Payload absent, not a query string, without `hash`, or `user` not JSON
    #[error("Malformed launch payload: {0}")]
    MalformedPayload(&'static str),

    /// Computed signature differs from the supplied `hash`
    #[error("Launch payload signature mismatch")]
    SignatureMismatch,

    /// Signature valid, but no `user` field
    #[error("Launch payload carries no identity")]
    IdentityMissing,

    /// Signed `auth_date` older than the configured maximum age
    #[error("Launch payload expired")]
    Expired,
}

impl LaunchError {
    /// Short machine-readable reason, for structured logs
    pub fn reason(&self) -> &'static str {
        match self {
            LaunchError::ConfigurationMissing => "configuration_missing",
            LaunchError::MalformedPayload(_) => "malformed_payload",
            LaunchError::SignatureMismatch => "signature_mismatch",
            LaunchError::IdentityMissing => "identity_missing",
            LaunchError::Expired => "expired",
        }
    }

    /// Every reason maps to the same status so responses cannot act as an oracle
    pub fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    pub(crate) fn log(&self) {
        match self {
            LaunchError::ConfigurationMissing => {
                tracing::error!(reason = self.reason(), "Launch payload rejected: secret not configured");
            }
            LaunchError::SignatureMismatch => {
                tracing::warn!(reason = self.reason(), "Launch payload rejected");
            }
            LaunchError::MalformedPayload(detail) => {
                tracing::warn!(reason = self.reason(), detail = *detail, "Launch payload rejected");
            }
            LaunchError::IdentityMissing | LaunchError::Expired => {
                tracing::info!(reason = self.reason(), "Launch payload rejected");
            }
        }
    }
}

impl IntoResponse for LaunchError {
    fn into_response(self) -> Response {
        self.log();
        // Empty body: the reason stays server-side
        (self.status_code(), ()).into_response()
    }
}
