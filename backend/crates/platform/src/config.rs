//! Environment configuration helpers
//!
//! Values are read once at startup. Blank values count as unset so that
//! `FOO=` in a `.env` file cannot smuggle an empty secret in.

use std::str::FromStr;

use crate::secret::SharedSecret;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable {name} has invalid value {value:?}")]
    Invalid { name: String, value: String },
}

/// Trimmed, non-blank value of `name`
pub fn env_var(name: &str) -> Option<String> {
    non_blank(std::env::var(name).ok())
}

/// Secret from `name`; `None` when unset or blank. The value is not logged.
pub fn env_secret(name: &str) -> Option<SharedSecret> {
    env_var(name).and_then(SharedSecret::new)
}

/// Parse `name` as `T`; unset is `Ok(None)`, unparsable is an error
pub fn env_parse<T: FromStr>(name: &str) -> Result<Option<T>, ConfigError> {
    parse_value(name, env_var(name))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_value<T: FromStr>(name: &str, raw: Option<String>) -> Result<Option<T>, ConfigError> {
    match non_blank(raw) {
        None => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| {
            tracing::error!(variable = name, "Invalid configuration value");
            ConfigError::Invalid {
                name: name.to_string(),
                value,
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_is_unset() {
        assert_eq!(non_blank(Some("   ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" x ".to_string())), Some("x".to_string()));
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value::<u64>("N", Some("3600".into())), Ok(Some(3600)));
        assert_eq!(parse_value::<u64>("N", None), Ok(None));
        assert_eq!(parse_value::<u64>("N", Some("".into())), Ok(None));
        assert_eq!(
            parse_value::<u64>("N", Some("soon".into())),
            Err(ConfigError::Invalid {
                name: "N".into(),
                value: "soon".into()
            })
        );
    }

    #[test]
    fn test_missing_variable_reads_as_none() {
        assert!(env_var("PLATFORM_TEST_SURELY_UNSET_VARIABLE").is_none());
        assert!(env_secret("PLATFORM_TEST_SURELY_UNSET_VARIABLE").is_none());
    }
}
