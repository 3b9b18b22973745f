//! RFC 4648 §10 Base32 test vectors, decode and encode.

use cadenas_otp_core::base32;
use cadenas_otp_core::OtpError;

// (plain, padded encoding, unpadded encoding)
const VECTORS: [(&[u8], &str, &str); 6] = [
    (b"f", "MY======", "MY"),
    (b"fo", "MZXQ====", "MZXQ"),
    (b"foo", "MZXW6===", "MZXW6"),
    (b"foob", "MZXW6YQ=", "MZXW6YQ"),
    (b"fooba", "MZXW6YTB", "MZXW6YTB"),
    (b"foobar", "MZXW6YTBOI======", "MZXW6YTBOI"),
];

#[test]
fn rfc4648_decode_padded() {
    for (plain, padded, _) in &VECTORS {
        assert_eq!(&base32::decode(padded).expect("decode"), plain);
    }
}

#[test]
fn rfc4648_decode_unpadded() {
    for (plain, _, unpadded) in &VECTORS {
        assert_eq!(&base32::decode(unpadded).expect("decode"), plain);
    }
}

#[test]
fn rfc4648_decode_lowercase() {
    for (plain, _, unpadded) in &VECTORS {
        assert_eq!(
            &base32::decode(&unpadded.to_lowercase()).expect("decode"),
            plain
        );
    }
}

#[test]
fn rfc4648_encode_unpadded() {
    for (plain, _, unpadded) in &VECTORS {
        assert_eq!(&base32::encode(plain), unpadded);
    }
}

#[test]
fn empty_input_is_a_validation_error() {
    // RFC 4648 maps "" to ""; an OTP secret must decode to at least one byte.
    assert!(matches!(base32::decode(""), Err(OtpError::Validation(_))));
}
