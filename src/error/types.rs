/**
 * API Error Types
 *
 * This module defines the error type used in HTTP handlers. Every failure
 * a handler can produce is one of these variants, and each variant maps to
 * a fixed HTTP status code and response message.
 *
 * # Error Categories
 *
 * ## Client Errors
 *
 * - `Validation` - missing or malformed input
 * - `DuplicateIdentity` - registration with an email that is already taken
 * - `InvalidCredentials` - login with an unknown email or wrong password;
 *   both cases produce the identical error so callers cannot tell which
 *   account emails exist
 * - `TokenMissing` / `TokenInvalid` / `TokenExpired` - bearer token failures
 * - `NotFound` - the referenced resource does not exist
 *
 * ## Server Errors
 *
 * - `Internal` - unexpected failure; the caller receives a generic message
 *   and the real cause is logged server-side only
 */

use axum::http::StatusCode;
use thiserror::Error;

/// API error type
///
/// Each variant carries enough context to build an HTTP response. Handlers
/// return `Result<_, ApiError>` and let the `IntoResponse` impl translate
/// failures at the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input
    #[error("validation error: {message}")]
    Validation {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Registration attempted with an email that is already registered
    #[error("email already registered")]
    DuplicateIdentity,

    /// Login failed; unknown email and wrong password are indistinguishable
    #[error("invalid credentials")]
    InvalidCredentials,

    /// No bearer token in the Authorization header
    #[error("missing bearer token")]
    TokenMissing,

    /// Token failed signature or structural checks
    #[error("invalid token")]
    TokenInvalid,

    /// Token signature is valid but the expiry has passed
    #[error("token expired")]
    TokenExpired,

    /// The referenced resource does not exist
    #[error("{message}")]
    NotFound {
        /// What was not found
        message: String,
    },

    /// Unexpected server-side failure
    #[error("internal error: {message}")]
    Internal {
        /// Cause description, logged but never sent to the caller
        message: String,
    },
}

impl ApiError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `Validation` - 400 Bad Request
    /// - `DuplicateIdentity` - 409 Conflict
    /// - `InvalidCredentials` - 401 Unauthorized
    /// - `TokenMissing` - 401 Unauthorized
    /// - `TokenInvalid` / `TokenExpired` - 403 Forbidden
    /// - `NotFound` - 404 Not Found
    /// - `Internal` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::DuplicateIdentity => StatusCode::CONFLICT,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::TokenMissing => StatusCode::UNAUTHORIZED,
            Self::TokenInvalid => StatusCode::FORBIDDEN,
            Self::TokenExpired => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the message to send to the caller
    ///
    /// The wire message is the error's display string, with one exception:
    /// `Internal` always answers with a generic message, and the real cause
    /// stays in the server logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Internal { .. } => "internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

/// Extract a required string field from a request DTO
///
/// Request fields are `Option<String>` so missing fields deserialize
/// instead of failing in the framework; this turns absent or blank values
/// into a `Validation` error naming the field.
pub(crate) fn require_field<'a>(
    value: &'a Option<String>,
    name: &str,
) -> Result<&'a str, ApiError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ApiError::validation(format!("{} is required", name))),
    }
}
