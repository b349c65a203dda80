//! Shared test fixtures for the SDK integration tests.
//!
//! Provides unsigned-but-well-formed JWTs for each role and SDK instances
//! wired to a throwaway session file and an unroutable base URL, so any
//! accidental network call fails fast instead of hanging.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use fdbank_sdk::FdBankSdk;
use std::fs;
use tempfile::TempDir;

/// A base URL no test should ever successfully reach.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:9";

/// Build a three-segment JWT whose payload carries the given role. The
/// signature is a dummy; the SDK decodes without verifying.
pub fn make_token(role: &str) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let claims = serde_json::json!({
        "sub": "user-001",
        "email": "jane@example.com",
        "firstName": "Jane",
        "lastName": "Kapoor",
        "role": role,
    });
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string().as_bytes());
    let signature = URL_SAFE_NO_PAD.encode(b"not-a-real-signature");
    format!("{header}.{payload}.{signature}")
}

/// An SDK with no session. The `TempDir` must be kept alive for the
/// duration of the test.
pub fn sdk_anonymous() -> (FdBankSdk, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let sdk = FdBankSdk::builder()
        .base_url(UNREACHABLE_BASE_URL)
        .session_file(tmp.path().join("session.token"))
        .build()
        .unwrap();
    (sdk, tmp)
}

/// An SDK restored from a persisted token carrying the given role.
pub fn sdk_with_role(role: &str) -> (FdBankSdk, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let session_file = tmp.path().join("session.token");
    fs::write(&session_file, make_token(role)).unwrap();

    let sdk = FdBankSdk::builder()
        .base_url(UNREACHABLE_BASE_URL)
        .session_file(&session_file)
        .build()
        .unwrap();
    (sdk, tmp)
}
