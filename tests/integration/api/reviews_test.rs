//! Review API integration tests
//!
//! Tests for submitting and listing reviews, including the rating
//! bounds.

use axum::http::StatusCode;

use crate::common::auth_helpers::create_test_account;
use crate::common::server::create_test_server;

#[tokio::test]
async fn test_create_review_success() {
    let server = create_test_server();

    let response = server
        .post("/reviews")
        .json(&serde_json::json!({
            "rating": 4,
            "comment": "Fixed within a day",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["rating"], 4);
    assert_eq!(body["comment"], "Fixed within a day");
    assert_eq!(body["author_id"], serde_json::Value::Null);
    assert!(body.get("id").is_some());
    assert!(body.get("created_at").is_some());
}

#[tokio::test]
async fn test_create_review_with_author() {
    let server = create_test_server();
    let account = create_test_account(&server, "ada@example.com", "hunter22").await;

    let response = server
        .post("/reviews")
        .json(&serde_json::json!({
            "rating": 5,
            "comment": "Great service",
            "author_id": account.id,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["author_id"], account.id.as_str());
}

#[tokio::test]
async fn test_create_review_rating_bounds() {
    let server = create_test_server();

    for rating in [1, 5] {
        let response = server
            .post("/reviews")
            .json(&serde_json::json!({
                "rating": rating,
                "comment": "Boundary rating",
            }))
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::CREATED,
            "rating {rating} should be accepted"
        );
    }

    for rating in [0, 6, -1] {
        let response = server
            .post("/reviews")
            .json(&serde_json::json!({
                "rating": rating,
                "comment": "Out of range",
            }))
            .await;
        assert_eq!(
            response.status_code(),
            StatusCode::BAD_REQUEST,
            "rating {rating} should be rejected"
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], "validation error: rating must be between 1 and 5");
    }
}

#[tokio::test]
async fn test_create_review_missing_rating() {
    let server = create_test_server();

    let response = server
        .post("/reviews")
        .json(&serde_json::json!({
            "comment": "No rating given",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "validation error: rating is required");
}

#[tokio::test]
async fn test_create_review_malformed_author_id() {
    let server = create_test_server();

    // A non-UUID author id fails body deserialization
    let response = server
        .post("/reviews")
        .json(&serde_json::json!({
            "rating": 3,
            "comment": "Bad author id",
            "author_id": "not-a-uuid",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_reviews_newest_first() {
    let server = create_test_server();

    for (rating, comment) in [(2, "First"), (4, "Second")] {
        let response = server
            .post("/reviews")
            .json(&serde_json::json!({
                "rating": rating,
                "comment": comment,
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);
    }

    let response = server.get("/reviews").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let listed: Vec<serde_json::Value> = response.json();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0]["comment"], "Second");
    assert_eq!(listed[1]["comment"], "First");
}
