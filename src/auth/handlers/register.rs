/**
 * Register Handler
 *
 * This module implements the account registration handler for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate that name, email and password are present and non-blank
 * 2. Check that no account with this email exists
 * 3. Hash the password with bcrypt
 * 4. Insert the account
 * 5. Return the created account (no token; tokens come from login)
 *
 * # Validation
 *
 * - Email must contain '@' (basic shape check)
 * - Email must be unique; a duplicate is answered with 409 Conflict
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt (cost 10) before storage
 * - The response never includes the hash
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::auth::accounts::{AccountRepository, NewAccount};
use crate::auth::handlers::types::{AccountResponse, RegisterRequest};
use crate::auth::passwords;
use crate::error::types::require_field;
use crate::error::ApiError;

/// Register handler
///
/// Creates a new account from a name, email and password.
///
/// # Errors
///
/// * `400 Bad Request` - missing/blank fields, malformed body, or bad email shape
/// * `409 Conflict` - an account with this email already exists
/// * `500 Internal Server Error` - hashing or storage failure
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {
///   "name": "Ada",
///   "email": "ada@example.com",
///   "password": "pw123"
/// }
/// ```
pub async fn register(
    State(accounts): State<Arc<dyn AccountRepository>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AccountResponse>), ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::validation(format!("invalid request body: {}", e)))?;

    let name = require_field(&request.name, "name")?;
    let email = require_field(&request.email, "email")?;
    let password = require_field(&request.password, "password")?;

    // Basic email shape check
    if !email.contains('@') {
        tracing::warn!("Invalid email format: {}", email);
        return Err(ApiError::validation("invalid email format"));
    }

    tracing::info!("Register request for email: {}", email);

    // Check if email already exists
    if accounts.find_by_email(email).await?.is_some() {
        tracing::warn!("Email already registered: {}", email);
        return Err(ApiError::DuplicateIdentity);
    }

    // Hash password
    let password_hash = passwords::hash_password(password)
        .map_err(|e| ApiError::internal(format!("failed to hash password: {}", e)))?;

    // Insert the account. A racing registration for the same email loses
    // the unique-key conflict here and gets the same 409 as the pre-check.
    let account = accounts
        .insert(NewAccount {
            name: name.to_string(),
            email: email.to_string(),
            password_hash,
        })
        .await?;

    tracing::info!("Account created: {} ({})", account.name, account.email);

    Ok((StatusCode::CREATED, Json(AccountResponse::from(account))))
}
