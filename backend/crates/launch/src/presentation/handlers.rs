//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::LaunchConfig;
use crate::application::validate_launch::{ValidateLaunchUseCase, Verdict};
use crate::presentation::dto::{ValidateRequest, ValidateResponse};

/// Shared state for launch handlers and middleware
#[derive(Clone)]
pub struct LaunchAppState {
    pub config: Arc<LaunchConfig>,
}

impl LaunchAppState {
    pub fn new(config: LaunchConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// POST /api/validate
///
/// Never answers with an error body: every failure is `{"valid":false}`.
/// 400 only when the caller sent no usable `initData`; verification
/// failures of any kind are 200.
pub async fn validate(
    State(state): State<LaunchAppState>,
    body: Result<Json<ValidateRequest>, JsonRejection>,
) -> (StatusCode, Json<ValidateResponse>) {
    let init_data = match body {
        Ok(Json(req)) => req.init_data.filter(|data| !data.trim().is_empty()),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Validate request body rejected");
            None
        }
    };

    let Some(init_data) = init_data else {
        return (StatusCode::BAD_REQUEST, Json(ValidateResponse::invalid()));
    };

    let use_case = ValidateLaunchUseCase::new(state.config.clone());

    match use_case.verdict(&init_data) {
        Verdict::Valid(user) => (StatusCode::OK, Json(ValidateResponse::valid(user))),
        Verdict::Invalid => (StatusCode::OK, Json(ValidateResponse::invalid())),
    }
}
