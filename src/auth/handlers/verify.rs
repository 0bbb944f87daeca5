/**
 * Verify Handler
 *
 * This module implements the token verification handler for GET /verify,
 * which resolves a bearer token back to its account.
 *
 * # Authentication
 *
 * The endpoint requires `Authorization: Bearer <token>`. Each failure kind
 * has its own status so clients can react precisely:
 *
 * - no bearer token presented → 401
 * - token tampered or malformed → 403
 * - token correctly signed but expired → 403
 * - token valid but the account no longer exists → 404
 */

use std::sync::Arc;

use axum::{extract::State, http::HeaderMap, response::Json};

use crate::auth::accounts::AccountRepository;
use crate::auth::handlers::types::AccountResponse;
use crate::auth::sessions::{self, SessionKeys};
use crate::error::ApiError;

/// Verify handler
///
/// Validates the presented session token and returns the account it was
/// issued for, without credential material.
///
/// # Errors
///
/// * `401 Unauthorized` - Authorization header missing or not a Bearer token
/// * `403 Forbidden` - token invalid or expired
/// * `404 Not Found` - token valid but the account is gone
/// * `500 Internal Server Error` - storage failure
pub async fn verify(
    State(accounts): State<Arc<dyn AccountRepository>>,
    State(keys): State<SessionKeys>,
    headers: HeaderMap,
) -> Result<Json<AccountResponse>, ApiError> {
    let token = sessions::bearer_token(&headers)?;
    let claims = keys.verify(token)?;
    let account_id = claims.account_id()?;

    let account = accounts.find_by_id(account_id).await?.ok_or_else(|| {
        tracing::warn!("Valid token for missing account: {}", account_id);
        ApiError::not_found("account not found")
    })?;

    Ok(Json(AccountResponse::from(account)))
}
