//! Application Configuration
//!
//! Configuration for launch-payload verification.

use std::time::Duration;

use platform::secret::SharedSecret;

/// Launch verification configuration
#[derive(Debug, Clone, Default)]
pub struct LaunchConfig {
    /// Bot token issued by the host platform. `None` fails every check.
    pub bot_token: Option<SharedSecret>,
    /// Reject payloads whose signed `auth_date` is older than this.
    /// `None` disables the freshness check.
    pub max_age: Option<Duration>,
}

impl LaunchConfig {
    pub fn new(bot_token: Option<SharedSecret>) -> Self {
        Self {
            bot_token,
            ..Self::default()
        }
    }

    /// Enable the freshness check; a zero duration disables it
    pub fn with_max_age(mut self, max_age: Duration) -> Self {
        self.max_age = (!max_age.is_zero()).then_some(max_age);
        self
    }

    pub fn is_configured(&self) -> bool {
        self.bot_token.is_some()
    }
}
