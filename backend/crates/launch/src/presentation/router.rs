//! Launch Router

use axum::{Router, routing::post};

use crate::presentation::handlers::{self, LaunchAppState};

/// Router exposing `POST /validate`
pub fn launch_router(state: LaunchAppState) -> Router {
    Router::new()
        .route("/validate", post(handlers::validate))
        .with_state(state)
}
