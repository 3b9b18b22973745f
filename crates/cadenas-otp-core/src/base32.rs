//! RFC 4648 Base32 codec for textual secret keys.
//!
//! Authenticator secrets arrive as human-typed Base32: any case, often
//! grouped with spaces, sometimes carrying trailing `=` padding. Decoding
//! normalizes all of that before handing the string to [`data_encoding`];
//! encoding always renders the unpadded uppercase form, which is what
//! `otpauth://` consumers accept.

use data_encoding::BASE32_NOPAD;

use crate::error::OtpError;

/// Decode a Base32 secret into raw key bytes.
///
/// Normalization, in order: uppercase, strip ASCII whitespace, strip
/// trailing `=` padding. The remainder must be non-empty, contain only
/// `A-Z2-7`, and form a canonical Base32 string (valid length, zero
/// trailing bits).
///
/// # Errors
///
/// Returns [`OtpError::Validation`] if the normalized input is empty,
/// contains characters outside the Base32 alphabet (`=` is only valid as
/// trailing padding), or fails canonical decoding.
pub fn decode(secret: &str) -> Result<Vec<u8>, OtpError> {
    let normalized: String = secret
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let trimmed = normalized.trim_end_matches('=');

    if trimmed.is_empty() {
        return Err(OtpError::Validation("empty secret".to_owned()));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !matches!(c, 'A'..='Z' | '2'..='7'))
    {
        return Err(OtpError::Validation(format!(
            "character {bad:?} is not valid Base32"
        )));
    }

    BASE32_NOPAD
        .decode(trimmed.as_bytes())
        .map_err(|e| OtpError::Validation(format!("malformed Base32: {e}")))
}

/// Encode raw key bytes as unpadded uppercase Base32.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE32_NOPAD.encode(bytes)
}
