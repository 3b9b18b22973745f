//! Enrollment lifecycle: fresh secret → provisioning URI → first code.
//!
//! Snapshot tests pin the exact strings calling layers hand to QR
//! renderers and JSON marshalling — parameter order included.

use cadenas_otp_core::{build_totp_uri, SecretKey, TotpGenerator, DEFAULT_SECRET_LEN};

#[test]
fn fresh_secret_enrolls_and_verifies() {
    let secret = SecretKey::generate_default().expect("generate");
    assert_eq!(secret.expose().len(), DEFAULT_SECRET_LEN);

    let totp = TotpGenerator::with_defaults(secret.encoded()).expect("construct");
    let t = 1_754_000_000.0;
    let code = totp.generate_at(t);
    assert!(totp.verify_at(&code, t, 1));

    let uri = totp.provisioning_uri("user@example.com", "CADENAS");
    assert!(uri.contains(&format!("secret={}", secret.encoded())));
}

#[test]
fn provisioning_uri_snapshot() {
    let uri = build_totp_uri(
        "JBSWY3DPEHPK3PXP",
        "Demo Account",
        "2FA Demo",
        6,
        30,
    )
    .expect("build");
    insta::assert_snapshot!(
        uri,
        @"otpauth://totp/Demo%20Account?secret=JBSWY3DPEHPK3PXP&issuer=2FA%20Demo&algorithm=SHA1&digits=6&period=30"
    );
}

#[test]
fn generator_info_snapshot() {
    let totp = TotpGenerator::with_defaults("JBSWY3DPEHPK3PXP").expect("construct");
    let info = totp.info_at(1_111_111_109.0, "demo@example.com", "CADENAS");
    insta::assert_json_snapshot!(info, @r#"
    {
      "secretKey": "JBSWY3DPEHPK3PXP",
      "currentCode": "071271",
      "remainingTime": 1,
      "digits": 6,
      "period": 30,
      "provisioningUri": "otpauth://totp/demo%40example.com?secret=JBSWY3DPEHPK3PXP&issuer=CADENAS&algorithm=SHA1&digits=6&period=30"
    }
    "#);
}
