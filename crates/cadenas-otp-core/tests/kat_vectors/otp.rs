//! RFC 4226 Appendix D and RFC 6238 Appendix B test vectors.
//!
//! The RFC harnesses feed the shared secret as raw ASCII bytes, so these
//! vectors drive `engine::hotp` directly; a second pass drives the public
//! Base32 generator API with the same key re-encoded, proving both entry
//! points agree byte-for-byte.

use cadenas_otp_core::engine::{hotp, OtpDigits};
use cadenas_otp_core::{HotpGenerator, TotpGenerator};

// Shared secret for both RFCs: "12345678901234567890" (ASCII, 20 bytes).
const RFC_SECRET: &[u8] = b"12345678901234567890";

// The same 20 bytes, Base32-encoded, for the public API.
const RFC_SECRET_BASE32: &str = "GEZDGNBVGY3TQOJQGEZDGNBVGY3TQOJQ";

const HOTP_EXPECTED: [(u64, &str); 10] = [
    (0, "755224"),
    (1, "287082"),
    (2, "359152"),
    (3, "969429"),
    (4, "338314"),
    (5, "254676"),
    (6, "287922"),
    (7, "162583"),
    (8, "399871"),
    (9, "520489"),
];

// RFC 6238 Appendix B, SHA1 column, 8 digits, 30-second period.
const TOTP_EXPECTED: [(f64, &str); 6] = [
    (59.0, "94287082"),
    (1_111_111_109.0, "07081804"),
    (1_111_111_111.0, "14050471"),
    (1_234_567_890.0, "89005924"),
    (2_000_000_000.0, "69279037"),
    (20_000_000_000.0, "65353130"),
];

#[test]
fn rfc4226_appendix_d_raw_key() {
    for (counter, expected) in &HOTP_EXPECTED {
        let code = hotp(RFC_SECRET, *counter, OtpDigits::Six);
        assert_eq!(&code, expected, "HOTP mismatch at counter {counter}");
    }
}

#[test]
fn rfc4226_appendix_d_base32_api() {
    let generator = HotpGenerator::new(RFC_SECRET_BASE32, 6).expect("construct");
    for (counter, expected) in &HOTP_EXPECTED {
        let code = generator.generate(*counter);
        assert_eq!(&code, expected, "HOTP mismatch at counter {counter}");
    }
}

#[test]
fn rfc6238_appendix_b_raw_key() {
    for (time, expected) in &TOTP_EXPECTED {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let step = (*time / 30.0) as u64;
        let code = hotp(RFC_SECRET, step, OtpDigits::Eight);
        assert_eq!(&code, expected, "TOTP mismatch at time {time}");
    }
}

#[test]
fn rfc6238_appendix_b_base32_api() {
    let generator = TotpGenerator::new(RFC_SECRET_BASE32, 8, 30).expect("construct");
    for (time, expected) in &TOTP_EXPECTED {
        let code = generator.generate_at(*time);
        assert_eq!(&code, expected, "TOTP mismatch at time {time}");
    }
}

#[test]
fn rfc6238_vectors_verify_with_zero_window() {
    let generator = TotpGenerator::new(RFC_SECRET_BASE32, 8, 30).expect("construct");
    for (time, expected) in &TOTP_EXPECTED {
        assert!(
            generator.verify_at(expected, *time, 0),
            "vector at time {time} should verify against itself"
        );
    }
}
