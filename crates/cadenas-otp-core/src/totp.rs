//! RFC 6238 time-based one-time password generator.
//!
//! A [`TotpGenerator`] is a validated configuration (secret, digits, period)
//! over the stateless [`crate::engine`] pipeline. Construction is the only
//! fallible step; generation and verification never error afterwards.

use serde::Serialize;

use crate::engine::{self, OtpDigits};
use crate::error::OtpError;
use crate::secret::SecretKey;
use crate::uri;

/// Default TOTP period in seconds (RFC 6238 §4).
pub const DEFAULT_PERIOD: u32 = 30;

/// Default verification window: ±1 time step (RFC 6238 §5.2).
pub const DEFAULT_TOTP_WINDOW: u32 = 1;

/// Seconds since the Unix epoch as a fractional value.
///
/// A clock before the epoch reads as zero rather than failing; the engine
/// clamps the same way.
fn unix_now() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0.0, |d| d.as_secs_f64())
}

/// Serializable snapshot of a generator's current state.
///
/// Produced for calling layers (web, bot) that marshal it straight to JSON.
/// Note that it carries the secret itself; it is the caller's job to keep
/// it out of logs and responses to anyone but the enrolling user.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TotpInfo {
    /// Normalized Base32 secret.
    pub secret_key: String,
    /// Code valid at the snapshot timestamp.
    pub current_code: String,
    /// Seconds until that code rolls over, in `[1, period]`.
    pub remaining_time: u32,
    /// Digit count (6 or 8).
    pub digits: u8,
    /// Period in seconds.
    pub period: u32,
    /// `otpauth://` URI for QR-rendering clients.
    pub provisioning_uri: String,
}

/// Time-based OTP generator and verifier.
#[derive(Debug, Clone)]
pub struct TotpGenerator {
    secret: SecretKey,
    digits: OtpDigits,
    period: u32,
}

impl TotpGenerator {
    /// Build a generator from a Base32 secret, digit count, and period.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Configuration`] if `digits` is not 6 or 8 or
    /// `period` is zero, and [`OtpError::Validation`] if the secret is not
    /// well-formed Base32.
    pub fn new(secret: &str, digits: u8, period: u32) -> Result<Self, OtpError> {
        let digits = OtpDigits::try_from(digits)?;
        if period == 0 {
            return Err(OtpError::Configuration("period must be > 0".to_owned()));
        }
        let secret = SecretKey::parse(secret)?;
        Ok(Self {
            secret,
            digits,
            period,
        })
    }

    /// Build a generator with the conventional 6 digits / 30 seconds.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Validation`] if the secret is not well-formed
    /// Base32.
    pub fn with_defaults(secret: &str) -> Result<Self, OtpError> {
        Self::new(secret, 6, DEFAULT_PERIOD)
    }

    /// The configured period in seconds.
    #[must_use]
    pub const fn period(&self) -> u32 {
        self.period
    }

    /// The configured digit count.
    #[must_use]
    pub const fn digits(&self) -> u8 {
        self.digits.value()
    }

    /// Generate the code for the current wall-clock time.
    #[must_use = "OTP code should be used or stored"]
    pub fn generate(&self) -> String {
        self.generate_at(unix_now())
    }

    /// Generate the code for an explicit timestamp (seconds since epoch).
    #[must_use = "OTP code should be used or stored"]
    pub fn generate_at(&self, timestamp: f64) -> String {
        let counter = engine::time_step(timestamp, self.period);
        engine::hotp(self.secret.expose(), counter, self.digits)
    }

    /// Verify a code against the current wall-clock time with the default
    /// ±[`DEFAULT_TOTP_WINDOW`] window.
    #[must_use = "validation result should be checked"]
    pub fn verify(&self, code: &str) -> bool {
        self.verify_at(code, unix_now(), DEFAULT_TOTP_WINDOW)
    }

    /// Verify a code at an explicit timestamp, accepting `window` time
    /// steps of drift on either side.
    ///
    /// Every counter in `[T - window, T + window]` is checked with
    /// constant-time comparison; the scan always runs to completion.
    /// `window = 0` accepts only the exact current step.
    #[must_use = "validation result should be checked"]
    pub fn verify_at(&self, code: &str, timestamp: f64, window: u32) -> bool {
        let current = engine::time_step(timestamp, self.period);
        let start = current.saturating_sub(u64::from(window));
        let end = current.saturating_add(u64::from(window));

        let mut valid = false;
        let mut step = start;
        loop {
            let expected = engine::hotp(self.secret.expose(), step, self.digits);
            if engine::constant_time_eq(expected.as_bytes(), code.as_bytes()) {
                valid = true;
            }
            if step == end {
                break;
            }
            step = step.wrapping_add(1);
        }
        valid
    }

    /// Seconds the current code remains valid.
    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining_time_at(unix_now())
    }

    /// Seconds the code at `timestamp` remains valid, in `[1, period]`.
    #[must_use]
    pub fn remaining_time_at(&self, timestamp: f64) -> u32 {
        engine::remaining_seconds(timestamp, self.period)
    }

    /// Render the `otpauth://totp/` provisioning URI for this generator.
    #[must_use]
    pub fn provisioning_uri(&self, label: &str, issuer: &str) -> String {
        uri::render_totp_uri(
            self.secret.encoded(),
            label,
            issuer,
            self.digits.value(),
            self.period,
        )
    }

    /// Snapshot the generator state at the current wall-clock time.
    #[must_use]
    pub fn info(&self, label: &str, issuer: &str) -> TotpInfo {
        self.info_at(unix_now(), label, issuer)
    }

    /// Snapshot the generator state at an explicit timestamp.
    #[must_use]
    pub fn info_at(&self, timestamp: f64, label: &str, issuer: &str) -> TotpInfo {
        TotpInfo {
            secret_key: self.secret.encoded().to_owned(),
            current_code: self.generate_at(timestamp),
            remaining_time: self.remaining_time_at(timestamp),
            digits: self.digits.value(),
            period: self.period,
            provisioning_uri: self.provisioning_uri(label, issuer),
        }
    }
}
