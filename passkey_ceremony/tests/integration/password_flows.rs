//! Password sign-in and health-probe flows against the mock relying party.

use passkey_ceremony::{CeremonyStatus, PasswordCeremony};
use serde_json::{Value, json};

use crate::common::{MockRelyingParty, client_for};

/// Test the happy path: one request to /api/login carrying the credentials,
/// resolving to the server's message.
#[tokio::test]
async fn test_successful_password_login() {
    let mock = MockRelyingParty::new();
    let mut ceremony = PasswordCeremony::new(client_for(&mock).await);

    assert_eq!(ceremony.status(), CeremonyStatus::Idle);
    assert_eq!(ceremony.message(), "");

    let result = ceremony
        .login_with_password("user@example.com", "password")
        .await;

    assert_eq!(result.status, CeremonyStatus::Succeeded);
    assert_eq!(result.message, "Login successful");
    assert_eq!(mock.paths(), vec!["/api/login"]);

    let calls = mock.calls();
    let body: Value = serde_json::from_str(&calls[0].body).expect("body should be JSON");
    assert_eq!(
        body,
        json!({ "email": "user@example.com", "password": "password" })
    );
}

/// Test that a rejection surfaces the server's `error` field after exactly
/// one request.
#[tokio::test]
async fn test_invalid_credentials_surface_server_error() {
    let mock = MockRelyingParty::new();
    mock.set_password_login(401, r#"{"error":"Invalid credentials"}"#);
    let mut ceremony = PasswordCeremony::new(client_for(&mock).await);

    let result = ceremony
        .login_with_password("user@example.com", "wrong")
        .await;

    assert_eq!(result.status, CeremonyStatus::Failed);
    assert_eq!(result.message, "Invalid credentials");
    assert_eq!(mock.paths(), vec!["/api/login"]);
}

/// Test the generic fallback when a rejection body has no `error` field.
#[tokio::test]
async fn test_rejection_without_error_field_falls_back() {
    let mock = MockRelyingParty::new();
    mock.set_password_login(401, r#"{}"#);
    let mut ceremony = PasswordCeremony::new(client_for(&mock).await);

    let result = ceremony
        .login_with_password("user@example.com", "wrong")
        .await;

    assert_eq!(result.status, CeremonyStatus::Failed);
    assert_eq!(result.message, "Invalid credentials");
}

/// Test that a non-JSON body yields the invalid-response diagnostic.
#[tokio::test]
async fn test_non_json_body_yields_invalid_response_diagnostic() {
    let mock = MockRelyingParty::new();
    mock.set_password_login(500, "Internal Server Error");
    let mut ceremony = PasswordCeremony::new(client_for(&mock).await);

    let result = ceremony
        .login_with_password("user@example.com", "password")
        .await;

    assert_eq!(result.status, CeremonyStatus::Failed);
    assert_eq!(
        result.message,
        "Server returned invalid response: Internal Server Error"
    );
}

/// Test the health probe against healthy and unhealthy relying parties.
#[tokio::test]
async fn test_health_probe() {
    let mock = MockRelyingParty::new();
    let client = client_for(&mock).await;

    assert!(client.health().await.expect("health request should send"));

    mock.set_health(503, "");
    assert!(!client.health().await.expect("health request should send"));
}
