//! RFC 4226 counter-based one-time password generator.

use crate::engine::{self, OtpDigits};
use crate::error::OtpError;
use crate::secret::SecretKey;

/// Default verification window: 5 counters of look-ahead.
pub const DEFAULT_HOTP_WINDOW: u32 = 5;

/// Counter-based OTP generator and verifier.
///
/// The counter is supplied by the caller on every operation and is expected
/// to advance monotonically by convention; the core holds no counter state.
#[derive(Debug, Clone)]
pub struct HotpGenerator {
    secret: SecretKey,
    digits: OtpDigits,
}

impl HotpGenerator {
    /// Build a generator from a Base32 secret and digit count.
    ///
    /// # Errors
    ///
    /// Returns [`OtpError::Configuration`] if `digits` is not 6 or 8, and
    /// [`OtpError::Validation`] if the secret is not well-formed Base32.
    pub fn new(secret: &str, digits: u8) -> Result<Self, OtpError> {
        let digits = OtpDigits::try_from(digits)?;
        let secret = SecretKey::parse(secret)?;
        Ok(Self { secret, digits })
    }

    /// The configured digit count.
    #[must_use]
    pub const fn digits(&self) -> u8 {
        self.digits.value()
    }

    /// Generate the code for an explicit counter value.
    #[must_use = "OTP code should be used or stored"]
    pub fn generate(&self, counter: u64) -> String {
        engine::hotp(self.secret.expose(), counter, self.digits)
    }

    /// Verify a code against counters `[counter, counter + window)`.
    ///
    /// The search is forward-only: HOTP counters must advance monotonically,
    /// so look-behind tolerance would accept replayed codes. A match does
    /// not advance anything here — the core is stateless, and the storage
    /// layer owns persisting the last accepted counter so the same code
    /// cannot be presented twice.
    ///
    /// `window = 0` matches nothing.
    #[must_use = "validation result should be checked"]
    pub fn verify(&self, code: &str, counter: u64, window: u32) -> bool {
        let mut valid = false;
        for i in 0..u64::from(window) {
            let candidate = counter.saturating_add(i);
            let expected = engine::hotp(self.secret.expose(), candidate, self.digits);
            if engine::constant_time_eq(expected.as_bytes(), code.as_bytes()) {
                valid = true;
            }
        }
        valid
    }
}
