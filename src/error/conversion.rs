/**
 * Error Conversion
 *
 * This module provides conversion implementations for API errors, allowing
 * them to be returned directly from handlers and built from storage-layer
 * failures.
 *
 * # HTTP Response Conversion
 *
 * `ApiError` implements `IntoResponse` from Axum. The error is converted
 * to its status code and a JSON body:
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 *
 * Internal errors are logged here, at the last point where the cause is
 * still available, and the caller only ever sees a generic message.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;
use crate::storage::StorageError;

impl IntoResponse for ApiError {
    /// Convert an API error into an HTTP response
    ///
    /// The response is a JSON object with:
    /// - `error`: The message for the caller
    /// - `status`: The HTTP status code
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("request failed: {}", self);
        }

        let body = serde_json::json!({
            "error": self.public_message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

/// Map storage failures to API errors
///
/// The only unique constraint in the schema is the account email, so a
/// duplicate-key conflict always means a duplicate identity. Everything
/// else is an unexpected server failure.
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { .. } => ApiError::DuplicateIdentity,
            other => ApiError::internal(other.to_string()),
        }
    }
}
