//! Stateless RFC 4226 / RFC 6238 computation pipeline.
//!
//! Everything here is a pure function over immutable inputs: HMAC-SHA1 via
//! `ring::hmac`, dynamic truncation, time-step derivation, and zero-padded
//! code formatting. The [`crate::totp`] and [`crate::hotp`] wrappers are thin
//! configuration holders over this module; nothing in it touches a clock,
//! allocator-global state, or I/O.

use ring::hmac;

use crate::error::OtpError;

/// Number of digits in an OTP code (6 or 8 only).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OtpDigits {
    /// 6-digit code (standard).
    Six,
    /// 8-digit code.
    Eight,
}

impl OtpDigits {
    /// Return the numeric digit count.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Six => 6,
            Self::Eight => 8,
        }
    }

    /// Return the modulus value (10^digits) for truncation.
    const fn modulus(self) -> u32 {
        match self {
            Self::Six => 1_000_000,
            Self::Eight => 100_000_000,
        }
    }
}

impl TryFrom<u8> for OtpDigits {
    type Error = OtpError;

    fn try_from(digits: u8) -> Result<Self, OtpError> {
        match digits {
            6 => Ok(Self::Six),
            8 => Ok(Self::Eight),
            other => Err(OtpError::Configuration(format!(
                "digit count must be 6 or 8, got {other}"
            ))),
        }
    }
}

/// Compute HMAC-SHA1(key, message).
///
/// Any key length is accepted, including empty — HMAC pads or hashes the
/// key internally per RFC 2104.
fn hmac_sha1(key: &[u8], message: &[u8]) -> hmac::Tag {
    let key = hmac::Key::new(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY, key);
    hmac::sign(&key, message)
}

/// Dynamic truncation per RFC 4226 §5.3.
///
/// `offset` is the low nibble of the last digest byte; the four bytes at
/// `digest[offset..offset + 4]` are read big-endian with the sign bit
/// cleared, yielding a value in `[0, 2^31 - 1]`.
fn dynamic_truncate(digest: &[u8]) -> u32 {
    let offset = usize::from(digest[digest.len().wrapping_sub(1)] & 0x0F);
    u32::from_be_bytes([
        digest[offset] & 0x7F,
        digest[offset.wrapping_add(1)],
        digest[offset.wrapping_add(2)],
        digest[offset.wrapping_add(3)],
    ])
}

/// Reduce a truncated value modulo 10^digits and left-pad with zeros.
fn format_code(value: u32, digits: OtpDigits) -> String {
    // modulus is always 1_000_000 or 100_000_000 (never zero).
    let modulus = digits.modulus();
    #[allow(clippy::arithmetic_side_effects)]
    let code = value % modulus;
    let width = usize::from(digits.value());
    format!("{code:0>width$}")
}

/// Run the full RFC 4226 pipeline over raw key bytes.
///
/// The counter is encoded as 8 bytes big-endian (RFC 4226 §5.2), fed to
/// HMAC-SHA1, dynamically truncated, and formatted to `digits` decimal
/// characters. Infallible: HMAC accepts any key, truncation cannot miss on
/// a 20-byte digest, and formatting has no failure path.
///
/// This is the raw-bytes entry point the RFC test vectors exercise; the
/// generator types in [`crate::totp`] and [`crate::hotp`] decode a Base32
/// secret once and call this per code.
#[must_use = "OTP code should be used or stored"]
pub fn hotp(key: &[u8], counter: u64, digits: OtpDigits) -> String {
    let tag = hmac_sha1(key, &counter.to_be_bytes());
    let truncated = dynamic_truncate(tag.as_ref());
    format_code(truncated, digits)
}

/// Derive the TOTP time-step counter: `floor(timestamp / period)`.
///
/// Timestamps are seconds since the Unix epoch and may be fractional; the
/// fraction truncates toward the period boundary. Negative or NaN input
/// clamps to zero rather than wrapping.
#[must_use]
pub fn time_step(timestamp: f64, period: u32) -> u64 {
    let ts = timestamp.max(0.0);
    // period is validated non-zero by every caller; the cast truncates,
    // which is the floor of a non-negative quotient.
    #[allow(
        clippy::arithmetic_side_effects,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let step = (ts / f64::from(period)) as u64;
    step
}

/// Seconds until the current time step rolls over.
///
/// Always in `[1, period]`: a timestamp exactly on a period boundary has
/// the full period remaining.
#[must_use]
pub fn remaining_seconds(timestamp: f64, period: u32) -> u32 {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole_seconds = timestamp.max(0.0) as u64;
    // period is validated non-zero by every caller; the remainder is
    // strictly less than period, so neither cast nor subtraction can fail.
    #[allow(clippy::arithmetic_side_effects, clippy::cast_possible_truncation)]
    let remaining = period - (whole_seconds % u64::from(period)) as u32;
    remaining
}

/// Constant-time byte comparison for OTP codes.
///
/// Returns `true` iff both slices have equal length and identical contents.
/// Uses bitwise OR accumulation to avoid short-circuit timing leaks. The
/// early return on length mismatch is acceptable because the expected digit
/// count (6 or 8) is public information; the constant-time property protects
/// the code value, not its length.
pub(crate) fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
