//! Authentication API integration tests
//!
//! Tests for the authentication endpoints: register, login and verify.

use axum::http::StatusCode;

use crate::common::auth_helpers::{
    auth_header, create_test_account, expired_token, wrong_secret_token,
};
use crate::common::server::create_test_server;

#[tokio::test]
async fn test_register_success() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com",
            "password": "hunter22"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Ada");
    assert_eq!(body["email"], "ada@example.com");
    assert!(body.get("id").is_some());
    assert!(body.get("created_at").is_some());
    // No token and no password material on registration
    assert!(body.get("token").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = create_test_server();

    let payload = serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "password": "hunter22"
    });

    let first = server.post("/register").json(&payload).await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server.post("/register").json(&payload).await;
    assert_eq!(second.status_code(), StatusCode::CONFLICT);
    let body: serde_json::Value = second.json();
    assert_eq!(body["error"], "email already registered");
}

#[tokio::test]
async fn test_register_missing_password() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .json(&serde_json::json!({
            "name": "Ada",
            "email": "ada@example.com"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation error: password is required");
}

#[tokio::test]
async fn test_login_success() {
    let server = create_test_server();
    let account = create_test_account(&server, "ada@example.com", "hunter22").await;

    let response = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "ada@example.com",
            "password": "hunter22"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body.get("token").is_some());
    assert_eq!(body["account"]["id"], account.id.as_str());
    assert_eq!(body["account"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_login_failures_are_uniform() {
    let server = create_test_server();
    create_test_account(&server, "ada@example.com", "hunter22").await;

    // Wrong password for a known account
    let wrong_password = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "ada@example.com",
            "password": "wrong"
        }))
        .await;

    // Unknown account entirely
    let unknown_email = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .await;

    // Both cases look identical from the outside
    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_email.status_code(), StatusCode::UNAUTHORIZED);

    let first: serde_json::Value = wrong_password.json();
    let second: serde_json::Value = unknown_email.json();
    assert_eq!(first, second);
    assert_eq!(first["error"], "invalid credentials");
}

#[tokio::test]
async fn test_register_login_verify_flow() {
    let server = create_test_server();

    let register = server
        .post("/register")
        .json(&serde_json::json!({
            "name": "A",
            "email": "a@x.com",
            "password": "pw123"
        }))
        .await;
    assert_eq!(register.status_code(), StatusCode::CREATED);

    let login = server
        .post("/login")
        .json(&serde_json::json!({
            "email": "a@x.com",
            "password": "pw123"
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let token = login.json::<serde_json::Value>()["token"]
        .as_str()
        .unwrap_or_default()
        .to_string();

    let verify = server
        .get("/verify")
        .add_header("Authorization", auth_header(&token))
        .await;
    assert_eq!(verify.status_code(), StatusCode::OK);
    let body: serde_json::Value = verify.json();
    assert_eq!(body["email"], "a@x.com");
    assert_eq!(body["name"], "A");
}

#[tokio::test]
async fn test_verify_without_token() {
    let server = create_test_server();

    let response = server.get("/verify").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "missing bearer token");
}

#[tokio::test]
async fn test_verify_garbage_token() {
    let server = create_test_server();

    let response = server
        .get("/verify")
        .add_header("Authorization", auth_header("not.a.token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid token");
}

#[tokio::test]
async fn test_verify_tampered_token() {
    let server = create_test_server();
    let account = create_test_account(&server, "ada@example.com", "hunter22").await;

    // Flip one character of the signature of an otherwise-valid token
    let dot = account.token.rfind('.').expect("token has no signature");
    let mut chars: Vec<char> = account.token.chars().collect();
    chars[dot + 1] = if chars[dot + 1] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    let response = server
        .get("/verify")
        .add_header("Authorization", auth_header(&tampered))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid token");
}

#[tokio::test]
async fn test_verify_wrong_signature() {
    let server = create_test_server();
    create_test_account(&server, "ada@example.com", "hunter22").await;

    let response = server
        .get("/verify")
        .add_header(
            "Authorization",
            auth_header(&wrong_secret_token("ada@example.com")),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "invalid token");
}

#[tokio::test]
async fn test_verify_expired_token() {
    let server = create_test_server();
    create_test_account(&server, "ada@example.com", "hunter22").await;

    let response = server
        .get("/verify")
        .add_header(
            "Authorization",
            auth_header(&expired_token("ada@example.com")),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "token expired");
}
