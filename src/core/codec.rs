//! Identifier codec.
//!
//! Turns a (realm, account) pair into a lookup key that is safe both as an
//! environment variable name fragment and as a flat-file key. Realms made of
//! safelisted characters pass through untouched so the common case (a bare
//! hostname) stays human-readable; anything else gets a Base64 transform.
//!
//! The transform uses the standard alphabet without padding: `_` is not in
//! that alphabet, so the key's own separator stays unambiguous, and `=` is
//! never emitted, so an encoded realm cannot collide with the `key=value`
//! separator of an override file. The account is never transformed.

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;

use crate::core::constants::KEY_SEPARATOR;
use crate::error::CodecError;

/// Whether a realm passes through the codec unchanged.
///
/// Safelisted characters are ASCII letters, digits, `.` and `_`. An empty
/// realm is trivially plain.
pub fn is_plain(realm: &str) -> bool {
    realm
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '_')
}

/// Encode a realm for use in a lookup key.
///
/// Plain realms are returned verbatim; all others are Base64-encoded
/// (standard alphabet, no padding).
pub fn encode_realm(realm: &str) -> String {
    if is_plain(realm) {
        realm.to_string()
    } else {
        STANDARD_NO_PAD.encode(realm.as_bytes())
    }
}

/// Build the lookup key for a (realm, account) pair.
///
/// The key is the encoded-or-passthrough realm, a `_` separator, and the
/// literal account string.
pub fn lookup_key(realm: &str, account: &str) -> String {
    format!("{}{}{}", encode_realm(realm), KEY_SEPARATOR, account)
}

/// Split a lookup key into its realm token and account at the first separator.
///
/// Exact for encoded realm tokens (the transform's alphabet excludes `_`);
/// for passthrough realms that themselves contain `_` the split is
/// ambiguous, so callers compare the account half against a known account
/// rather than trusting it blindly.
pub fn split_key(key: &str) -> Result<(&str, &str), CodecError> {
    key.split_once(KEY_SEPARATOR)
        .ok_or_else(|| CodecError::MissingSeparator {
            key: key.to_string(),
        })
}

/// Decode a realm token back to the original realm.
///
/// # Errors
///
/// Returns [`CodecError::InvalidToken`] when the token is not valid Base64
/// (standard alphabet, no padding), and [`CodecError::NonUtf8Token`] when it
/// decodes to bytes that are not UTF-8.
pub fn decode_realm(token: &str) -> Result<String, CodecError> {
    let bytes = STANDARD_NO_PAD
        .decode(token.as_bytes())
        .map_err(|e| CodecError::InvalidToken {
            token: token.to_string(),
            reason: e.to_string(),
        })?;

    String::from_utf8(bytes).map_err(|_| CodecError::NonUtf8Token {
        token: token.to_string(),
    })
}
