/**
 * Login Handler
 *
 * This module implements the credential verification handler for
 * POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a JWT session token
 * 4. Return the token and account info
 *
 * # Security
 *
 * - An unknown email and a wrong password return the identical error
 *   (same status, same message), so the endpoint cannot be used to probe
 *   which emails are registered
 * - Password comparison goes through bcrypt (constant-time against the
 *   stored hash); plaintext is never compared or stored
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::auth::accounts::AccountRepository;
use crate::auth::handlers::types::{AccountResponse, AuthResponse, LoginRequest};
use crate::auth::passwords;
use crate::auth::sessions::SessionKeys;
use crate::error::types::require_field;
use crate::error::ApiError;

/// Login handler
///
/// Verifies an email/password pair and returns a session token valid for
/// 24 hours.
///
/// # Errors
///
/// * `400 Bad Request` - missing fields or malformed body
/// * `401 Unauthorized` - unknown email or wrong password (uniform)
/// * `500 Internal Server Error` - storage or signing failure
///
/// # Example Response
///
/// ```json
/// {
///   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
///   "account": {
///     "id": "123e4567-e89b-12d3-a456-426614174000",
///     "name": "Ada",
///     "email": "ada@example.com",
///     "created_at": "2026-01-01T00:00:00Z"
///   }
/// }
/// ```
pub async fn login(
    State(accounts): State<Arc<dyn AccountRepository>>,
    State(keys): State<SessionKeys>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::validation(format!("invalid request body: {}", e)))?;

    let email = require_field(&request.email, "email")?;
    let password = require_field(&request.password, "password")?;

    tracing::info!("Login request for: {}", email);

    let account = accounts.find_by_email(email).await?.ok_or_else(|| {
        tracing::warn!("Login for unknown email: {}", email);
        ApiError::InvalidCredentials
    })?;

    // Verify password
    let valid = passwords::verify_password(password, &account.password_hash)
        .map_err(|e| ApiError::internal(format!("password verification error: {}", e)))?;

    if !valid {
        tracing::warn!("Wrong password for: {}", email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = keys.issue(account.id, &account.email)?;

    tracing::info!("Login succeeded: {}", account.email);

    Ok(Json(AuthResponse {
        token,
        account: AccountResponse::from(account),
    }))
}
