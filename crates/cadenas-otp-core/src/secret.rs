//! Secret key material for OTP generators.
//!
//! A [`SecretKey`] is parsed from its Base32 rendering exactly once, at
//! construction; generators then reuse the decoded bytes for every code.
//! Both representations are zeroized on drop and masked in `Debug` so key
//! material never reaches logs by accident.

use rand::rngs::OsRng;
use rand::RngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::base32;
use crate::error::OtpError;

/// Minimum secret length in bytes (RFC 4226 R6: at least 128 bits).
pub const MIN_SECRET_LEN: usize = 16;

/// Default generated secret length in bytes (RFC 4226 recommends 160 bits).
pub const DEFAULT_SECRET_LEN: usize = 20;

/// An immutable, decoded OTP secret.
///
/// Holds the raw key bytes alongside the normalized (uppercase, unpadded)
/// Base32 string used when rendering provisioning URIs.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretKey {
    bytes: Vec<u8>,
    encoded: String,
}

impl SecretKey {
    /// Parse a Base32 secret as supplied by a user or calling layer.
    ///
    /// Case-insensitive; ASCII whitespace and trailing `=` padding are
    /// accepted and normalized away.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Validation`] if the input is not well-formed
    /// Base32 or decodes to zero bytes.
    pub fn parse(secret: &str) -> Result<Self, OtpError> {
        let bytes = base32::decode(secret)?;
        let encoded = base32::encode(&bytes);
        Ok(Self { bytes, encoded })
    }

    /// Generate a fresh random secret of `len` bytes from the OS CSPRNG.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Configuration`] if `len` is below
    /// [`MIN_SECRET_LEN`], or [`OtpError::Entropy`] if the CSPRNG fails.
    pub fn generate(len: usize) -> Result<Self, OtpError> {
        if len < MIN_SECRET_LEN {
            return Err(OtpError::Configuration(format!(
                "secret length must be at least {MIN_SECRET_LEN} bytes, got {len}"
            )));
        }
        let mut bytes = vec![0u8; len];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| OtpError::Entropy(format!("CSPRNG fill failed: {e}")))?;
        let encoded = base32::encode(&bytes);
        Ok(Self { bytes, encoded })
    }

    /// Generate a fresh random secret of [`DEFAULT_SECRET_LEN`] bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Entropy`] if the CSPRNG fails.
    pub fn generate_default() -> Result<Self, OtpError> {
        Self::generate(DEFAULT_SECRET_LEN)
    }

    /// Expose the decoded key bytes.
    ///
    /// Callers must not copy these into long-lived or unzeroized storage.
    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.bytes
    }

    /// The normalized Base32 rendering (uppercase, unpadded).
    #[must_use]
    pub fn encoded(&self) -> &str {
        &self.encoded
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(***)")
    }
}
