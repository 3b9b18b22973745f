//! Error types for `cadenas-otp-core`.

use thiserror::Error;

/// Errors produced by the one-time password engine.
///
/// All variants surface at generator construction or secret generation;
/// code generation and verification are infallible once a generator exists.
#[derive(Debug, Error)]
pub enum OtpError {
    /// Invalid generator parameters (digits not 6 or 8, period of zero,
    /// secret length below the RFC 4226 minimum).
    #[error("invalid OTP configuration: {0}")]
    Configuration(String),

    /// Secret key failed Base32 decoding (empty input, characters outside
    /// `A-Z2-7`, malformed length).
    #[error("invalid secret key: {0}")]
    Validation(String),

    /// OS CSPRNG failure while generating a fresh secret.
    #[error("entropy source failure: {0}")]
    Entropy(String),
}
