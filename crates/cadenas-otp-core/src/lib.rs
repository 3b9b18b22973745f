//! `cadenas-otp-core` — One-time password engine for CADENAS.
//!
//! This crate is the audit target: zero network, zero async, zero storage
//! dependencies. It implements RFC 4226 (HOTP) and RFC 6238 (TOTP) over
//! HMAC-SHA1, byte-exact with the authenticator apps on the other side of
//! the enrollment QR code. Calling layers (web, bot, storage) inject
//! secrets and parameters per call; nothing here holds user state.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod base32;

pub mod engine;

pub mod secret;

pub mod totp;

pub mod hotp;

pub mod uri;

pub use engine::{remaining_seconds, time_step, OtpDigits};
pub use error::OtpError;
pub use hotp::{HotpGenerator, DEFAULT_HOTP_WINDOW};
pub use secret::{SecretKey, DEFAULT_SECRET_LEN, MIN_SECRET_LEN};
pub use totp::{TotpGenerator, TotpInfo, DEFAULT_PERIOD, DEFAULT_TOTP_WINDOW};
pub use uri::build_totp_uri;
