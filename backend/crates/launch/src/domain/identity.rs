//! Verified Identity
//!
//! The `user` claim of a launch payload. There is no public way to build a
//! [`VerifiedIdentity`] from raw JSON: the only constructor runs after the
//! signature check, so holding one proves the host platform vouched for it.

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, LaunchResult};

/// Wire shape of the `user` claim; unknown fields are ignored
#[derive(Debug, Deserialize)]
struct IdentityClaim {
    id: i64,
    #[serde(default)]
    first_name: Option<String>,
    #[serde(default)]
    last_name: Option<String>,
    #[serde(default)]
    username: Option<String>,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    language_code: Option<String>,
    #[serde(default)]
    is_premium: Option<bool>,
    #[serde(default)]
    allows_write_to_pm: Option<bool>,
}

/// Authenticated user, as vouched for by the host platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VerifiedIdentity {
    id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    photo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    language_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    allows_write_to_pm: Option<bool>,
}

impl VerifiedIdentity {
    /// Decode the `user` claim. Only call on fields whose signature matched.
    pub(crate) fn from_signed_claim(json: &str) -> LaunchResult<Self> {
        let claim: IdentityClaim = serde_json::from_str(json)
            .map_err(|_| LaunchError::MalformedPayload("user is not a valid identity object"))?;

        Ok(Self {
            id: claim.id,
            first_name: claim.first_name,
            last_name: claim.last_name,
            username: claim.username,
            photo_url: claim.photo_url,
            language_code: claim.language_code,
            is_premium: claim.is_premium,
            allows_write_to_pm: claim.allows_write_to_pm,
        })
    }

    /// Durable external identity key
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn photo_url(&self) -> Option<&str> {
        self.photo_url.as_deref()
    }

    pub fn language_code(&self) -> Option<&str> {
        self.language_code.as_deref()
    }

    pub fn is_premium(&self) -> Option<bool> {
        self.is_premium
    }
}
