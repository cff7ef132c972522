//! Validate Launch Use Case
//!
//! Decides whether a launch payload was issued by the host platform and,
//! if so, yields the identity it carries.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::application::config::LaunchConfig;
use crate::domain::identity::VerifiedIdentity;
use crate::domain::payload::{AUTH_DATE_KEY, USER_KEY};
use crate::domain::services::{SignedFields, verify_signature};
use crate::error::{LaunchError, LaunchResult};

/// Caller-facing outcome: fully trusted or fully rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Valid(VerifiedIdentity),
    Invalid,
}

impl Verdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid(_))
    }
}

/// Validate Launch Use Case
pub struct ValidateLaunchUseCase {
    config: Arc<LaunchConfig>,
}

impl ValidateLaunchUseCase {
    pub fn new(config: Arc<LaunchConfig>) -> Self {
        Self { config }
    }

    /// Verify `raw` and extract its identity, keeping the rejection reason
    pub fn execute(&self, raw: &str) -> LaunchResult<VerifiedIdentity> {
        self.execute_at(raw, Utc::now())
    }

    /// [`Self::execute`] against an explicit clock
    pub fn execute_at(&self, raw: &str, now: DateTime<Utc>) -> LaunchResult<VerifiedIdentity> {
        let secret = self
            .config
            .bot_token
            .as_ref()
            .ok_or(LaunchError::ConfigurationMissing)?;

        let signed = verify_signature(raw, secret)?;

        self.check_freshness(&signed, now)?;

        let user = signed.get(USER_KEY).ok_or(LaunchError::IdentityMissing)?;
        let identity = VerifiedIdentity::from_signed_claim(user)?;

        tracing::debug!(user_id = identity.id(), "Launch payload verified");

        Ok(identity)
    }

    /// Collapse every failure into [`Verdict::Invalid`], logging the reason
    pub fn verdict(&self, raw: &str) -> Verdict {
        match self.execute(raw) {
            Ok(identity) => Verdict::Valid(identity),
            Err(err) => {
                err.log();
                Verdict::Invalid
            }
        }
    }

    fn check_freshness(&self, signed: &SignedFields, now: DateTime<Utc>) -> LaunchResult<()> {
        let Some(max_age) = self.config.max_age else {
            return Ok(());
        };

        let auth_date: i64 = signed
            .get(AUTH_DATE_KEY)
            .ok_or(LaunchError::MalformedPayload("missing auth_date"))?
            .parse()
            .map_err(|_| LaunchError::MalformedPayload("auth_date is not a timestamp"))?;

        // Issue times in the future count as age zero
        let age_secs = now.timestamp().saturating_sub(auth_date).max(0);
        let max_age_secs = i64::try_from(max_age.as_secs()).unwrap_or(i64::MAX);

        if age_secs > max_age_secs {
            return Err(LaunchError::Expired);
        }

        Ok(())
    }
}
