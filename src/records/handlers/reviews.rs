/**
 * Review Handlers
 *
 * Handlers for POST /reviews and GET /reviews.
 *
 * # Validation
 *
 * Creation requires a non-blank comment and a rating in 1..=5. The
 * optional `author_id` is stored as given; it is not checked against the
 * accounts store.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::error::types::require_field;
use crate::error::ApiError;
use crate::records::handlers::types::CreateReviewRequest;
use crate::records::reviews::{NewReview, Review, ReviewRepository, RATING_RANGE};

/// Create review handler
///
/// # Errors
///
/// * `400 Bad Request` - missing fields, malformed body, or a rating
///   outside 1..=5
/// * `500 Internal Server Error` - storage failure
pub async fn create_review(
    State(reviews): State<Arc<dyn ReviewRepository>>,
    body: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::validation(format!("invalid request body: {}", e)))?;

    let comment = require_field(&request.comment, "comment")?;

    let rating = request
        .rating
        .ok_or_else(|| ApiError::validation("rating is required"))?;
    if !RATING_RANGE.contains(&rating) {
        tracing::warn!("Rating out of range: {}", rating);
        return Err(ApiError::validation(format!(
            "rating must be between {} and {}",
            RATING_RANGE.start(),
            RATING_RANGE.end()
        )));
    }

    let review = reviews
        .insert(NewReview {
            rating,
            comment: comment.to_string(),
            author_id: request.author_id,
        })
        .await?;

    tracing::info!("Review created: {} (rating {})", review.id, review.rating);

    Ok((StatusCode::CREATED, Json(review)))
}

/// List reviews handler
///
/// Returns all reviews, newest first.
pub async fn list_reviews(
    State(reviews): State<Arc<dyn ReviewRepository>>,
) -> Result<Json<Vec<Review>>, ApiError> {
    let listed = reviews.list_sorted().await?;
    Ok(Json(listed))
}
