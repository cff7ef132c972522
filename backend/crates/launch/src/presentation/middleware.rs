//! Launch Middleware
//!
//! Authenticates each request of a protected route from the header
//! `Authorization: tma <launch payload>`. On success the
//! [`VerifiedIdentity`] is stored in request extensions for handlers to
//! pick up with `Extension<VerifiedIdentity>`.

use axum::body::Body;
use axum::extract::State;
use axum::http::{HeaderMap, Request, header};
use axum::middleware::Next;
use axum::response::Response;

use crate::application::validate_launch::ValidateLaunchUseCase;
use crate::domain::identity::VerifiedIdentity;
use crate::error::LaunchError;
use crate::presentation::handlers::LaunchAppState;

/// Authorization scheme carrying a raw launch payload
pub const AUTH_SCHEME: &str = "tma";

/// Raw launch payload from the `Authorization` header, if present
pub fn extract_launch_data(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, data) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case(AUTH_SCHEME) {
        return None;
    }

    let data = data.trim();
    (!data.is_empty()).then_some(data)
}

/// Middleware that requires a valid launch payload
pub async fn require_launch_identity(
    State(state): State<LaunchAppState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, LaunchError> {
    let raw = extract_launch_data(req.headers())
        .ok_or(LaunchError::MalformedPayload("missing launch data"))?;

    let use_case = ValidateLaunchUseCase::new(state.config.clone());
    let identity: VerifiedIdentity = use_case.execute(raw)?;

    req.extensions_mut().insert(identity);

    Ok(next.run(req).await)
}
