//! Long-lived secrets
//!
//! [`SharedSecret`] holds credentials such as the bot registration token.
//! It never prints its contents and wipes its buffer on drop.

use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret key material, never empty
///
/// ## Security
/// - `Debug` output is redacted
/// - Memory is zeroized on drop
/// - No `Display`, no `Serialize`
///
/// ```rust
/// use platform::secret::SharedSecret;
///
/// let secret = SharedSecret::new("123456:ABC-DEF").unwrap();
/// assert_eq!(format!("{:?}", secret), "SharedSecret(<redacted>)");
/// assert!(SharedSecret::new("").is_none());
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    /// `None` for empty input: an empty key must never be usable
    pub fn new(value: impl Into<Vec<u8>>) -> Option<Self> {
        let bytes = value.into();
        if bytes.is_empty() {
            None
        } else {
            Some(Self(bytes))
        }
    }

    /// Raw bytes, for use as HMAC key material only
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}
