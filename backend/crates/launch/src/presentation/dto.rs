//! API DTOs (Data Transfer Objects)

use serde::{Deserialize, Serialize};

use crate::domain::identity::VerifiedIdentity;

/// Request for POST /api/validate
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    #[serde(default)]
    pub init_data: Option<String>,
}

/// Response for POST /api/validate
#[derive(Debug, Clone, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<VerifiedIdentity>,
}

impl ValidateResponse {
    pub fn valid(user: VerifiedIdentity) -> Self {
        Self {
            valid: true,
            user: Some(user),
        }
    }

    pub fn invalid() -> Self {
        Self {
            valid: false,
            user: None,
        }
    }
}
