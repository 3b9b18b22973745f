//! `otpauth://` provisioning URI construction.
//!
//! Renders the URI authenticator apps import via QR code. Pure string
//! building; the QR rendering itself belongs to the calling layers.

use crate::engine::OtpDigits;
use crate::error::OtpError;
use crate::secret::SecretKey;

/// Render a TOTP provisioning URI from already-validated parts.
///
/// Label and issuer are percent-encoded; the secret is Base32 (`A-Z2-7`)
/// and needs no escaping. Parameter order is fixed — secret, issuer,
/// algorithm, digits, period — so output is reproducible.
pub(crate) fn render_totp_uri(
    secret: &str,
    label: &str,
    issuer: &str,
    digits: u8,
    period: u32,
) -> String {
    format!(
        "otpauth://totp/{}?secret={}&issuer={}&algorithm=SHA1&digits={}&period={}",
        urlencoding::encode(label),
        secret,
        urlencoding::encode(issuer),
        digits,
        period,
    )
}

/// Build a TOTP provisioning URI, validating every input.
///
/// # Errors
///
/// Returns [`OtpError::Configuration`] if `digits` is not 6 or 8 or
/// `period` is zero, and [`OtpError::Validation`] if the secret is not
/// well-formed Base32.
pub fn build_totp_uri(
    secret: &str,
    label: &str,
    issuer: &str,
    digits: u8,
    period: u32,
) -> Result<String, OtpError> {
    let digits = OtpDigits::try_from(digits)?;
    if period == 0 {
        return Err(OtpError::Configuration("period must be > 0".to_owned()));
    }
    let secret = SecretKey::parse(secret)?;
    Ok(render_totp_uri(
        secret.encoded(),
        label,
        issuer,
        digits.value(),
        period,
    ))
}
