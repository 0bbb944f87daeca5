//! Server surface integration tests
//!
//! Tests for the health endpoint, the 404 fallback and malformed
//! request bodies.

use axum::http::StatusCode;

use crate::common::server::create_test_server;

#[tokio::test]
async fn test_health() {
    let server = create_test_server();

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<serde_json::Value>(),
        serde_json::json!({ "status": "ok" })
    );
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = create_test_server();

    let response = server.get("/nope").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "not found");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = create_test_server();

    let response = server
        .post("/register")
        .text("{\"name\": ")
        .content_type("application/json")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let message = body["error"].as_str().unwrap_or_default();
    assert!(
        message.starts_with("validation error: invalid request body"),
        "unexpected error: {message}"
    );
}

#[tokio::test]
async fn test_wrong_body_type_is_rejected() {
    let server = create_test_server();

    // Rating as a string fails deserialization, not validation
    let response = server
        .post("/reviews")
        .json(&serde_json::json!({
            "rating": "five",
            "comment": "Typed wrong",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
