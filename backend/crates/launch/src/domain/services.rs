//! Domain Services
//!
//! The host platform's launch-payload signature scheme:
//!
//! ```text
//! signing_key = HMAC-SHA256(key = "WebAppData", msg = bot_token)
//! hash        = hex(HMAC-SHA256(key = signing_key, msg = data_check_string))
//! ```

use platform::crypto::{constant_time_eq, hmac_sha256, to_hex};
use platform::secret::SharedSecret;

use crate::domain::payload::{HASH_KEY, LaunchPayload, data_check_string};
use crate::error::{LaunchError, LaunchResult};

/// Fixed key of the signing-key derivation step
pub const WEB_APP_DATA: &[u8] = b"WebAppData";

/// Per-bot signing key, derived from the bot token
pub fn derive_signing_key(secret: &SharedSecret) -> [u8; 32] {
    hmac_sha256(WEB_APP_DATA, secret.expose())
}

/// Lowercase hex signature of a canonical check-string
pub fn compute_signature(secret: &SharedSecret, check_string: &str) -> String {
    let signing_key = derive_signing_key(secret);
    to_hex(&hmac_sha256(&signing_key, check_string.as_bytes()))
}

/// Fields of a payload whose signature has been checked
#[derive(Debug, Clone)]
pub struct SignedFields {
    payload: LaunchPayload,
}

impl SignedFields {
    /// First value for `key`
    pub fn get(&self, key: &str) -> Option<&str> {
        self.payload.get(key)
    }

    pub fn fields(&self) -> &[(String, String)] {
        self.payload.fields()
    }

    /// The canonical string the signature covered
    pub fn data_check_string(&self) -> String {
        self.payload.data_check_string()
    }
}

/// Parse `raw` and check its `hash` against the signature computed with `secret`
///
/// Fails with [`LaunchError::MalformedPayload`] before any HMAC work when the
/// payload cannot be parsed or has no `hash`.
pub fn verify_signature(raw: &str, secret: &SharedSecret) -> LaunchResult<SignedFields> {
    let payload = LaunchPayload::parse(raw)?;

    let expected = compute_signature(secret, &payload.data_check_string());

    if !constant_time_eq(expected.as_bytes(), payload.hash().as_bytes()) {
        return Err(LaunchError::SignatureMismatch);
    }

    Ok(SignedFields { payload })
}

/// Issuing side: signature for `fields` (which must not contain `hash`)
pub fn sign_fields<K, V>(fields: &[(K, V)], secret: &SharedSecret) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    compute_signature(secret, &data_check_string(fields))
}

/// Issuing side: encode `fields` as a payload with its `hash` appended
pub fn sign_payload<K, V>(fields: &[(K, V)], secret: &SharedSecret) -> String
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let hash = sign_fields(fields, secret);

    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in fields {
        serializer.append_pair(key.as_ref(), value.as_ref());
    }
    serializer.append_pair(HASH_KEY, &hash);
    serializer.finish()
}
