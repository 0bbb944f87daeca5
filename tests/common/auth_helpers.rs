//! Authentication test helpers
//!
//! Provides utilities for registering accounts, obtaining tokens, and
//! crafting tokens in known-bad states.

use axum::http::StatusCode;
use axum_test::TestServer;
use uuid::Uuid;

use super::server::TEST_SECRET;

/// Test account credentials
pub struct TestAccount {
    pub id: String,
    pub email: String,
    pub password: String,
    pub token: String,
}

/// Register an account and log it in through the API
pub async fn create_test_account(
    server: &TestServer,
    email: &str,
    password: &str,
) -> TestAccount {
    let register = server
        .post("/register")
        .json(&serde_json::json!({
            "name": "Test Account",
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(register.status_code(), StatusCode::CREATED);
    let account: serde_json::Value = register.json();

    let login = server
        .post("/login")
        .json(&serde_json::json!({
            "email": email,
            "password": password,
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let body: serde_json::Value = login.json();

    TestAccount {
        id: account["id"].as_str().unwrap_or_default().to_string(),
        email: email.to_string(),
        password: password.to_string(),
        token: body["token"].as_str().unwrap_or_default().to_string(),
    }
}

/// Sign a token that expired an hour ago, using the test server secret
pub fn expired_token(email: &str) -> String {
    sign_token(email, TEST_SECRET, -3600)
}

/// Sign a currently-valid token with the wrong secret
pub fn wrong_secret_token(email: &str) -> String {
    sign_token(email, "some other secret", 3600)
}

fn sign_token(email: &str, secret: &str, expires_in: i64) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = serde_json::json!({
        "sub": Uuid::new_v4().to_string(),
        "email": email,
        "iat": now - 7200,
        "exp": now + expires_in,
    });

    jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(secret.as_bytes()),
    )
    .expect("Failed to sign test token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
