//! Launch Payload
//!
//! The query string the host platform hands to the mini-app at startup,
//! e.g. `query_id=...&user=%7B%22id%22%3A42%7D&auth_date=1700000000&hash=...`.

use crate::error::{LaunchError, LaunchResult};

/// Key of the signature pair
pub const HASH_KEY: &str = "hash";
/// Key of the identity claim (JSON)
pub const USER_KEY: &str = "user";
/// Key of the issue timestamp (unix seconds)
pub const AUTH_DATE_KEY: &str = "auth_date";

/// A parsed launch payload: the supplied signature plus the signed fields
///
/// Field values are stored decoded (`+` and `%XX` resolved) and in their
/// original order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPayload {
    hash: String,
    fields: Vec<(String, String)>,
}

impl LaunchPayload {
    /// Parse a raw payload, separating out the single `hash` pair
    pub fn parse(raw: &str) -> LaunchResult<Self> {
        if raw.trim().is_empty() {
            return Err(LaunchError::MalformedPayload("empty payload"));
        }

        let mut hash = None;
        let mut fields = Vec::new();

        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key == HASH_KEY {
                if hash.replace(value.into_owned()).is_some() {
                    return Err(LaunchError::MalformedPayload("duplicate hash"));
                }
            } else {
                fields.push((key.into_owned(), value.into_owned()));
            }
        }

        let hash = hash.ok_or(LaunchError::MalformedPayload("missing hash"))?;

        Ok(Self { hash, fields })
    }

    /// Signature as supplied by the client
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Signed fields, `hash` excluded, in payload order
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn data_check_string(&self) -> String {
        data_check_string(&self.fields)
    }
}

/// Canonical check-string: `key=value` lines sorted by key bytes, joined by `\n`
///
/// The sort is stable, so repeated keys keep their relative order. Values
/// are rendered decoded, exactly as the issuing side signs them.
pub fn data_check_string<K, V>(fields: &[(K, V)]) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut sorted: Vec<&(K, V)> = fields.iter().collect();
    sorted.sort_by(|a, b| a.0.as_ref().as_bytes().cmp(b.0.as_ref().as_bytes()));

    sorted
        .iter()
        .map(|(key, value)| format!("{}={}", key.as_ref(), value.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
