/**
 * API Route Handlers
 *
 * This module wires the JSON API endpoints to their handlers:
 * - Authentication endpoints (register, login, verify)
 * - Record endpoints (problems, reviews)
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /register` - Account registration
 * - `POST /login` - Credential login
 * - `GET /verify` - Validate a bearer token
 *
 * ## Records
 * - `POST /problems` / `GET /problems` - Problem reports
 * - `POST /reviews` / `GET /reviews` - Reviews
 */

use axum::Router;

use crate::auth::{login, register, verify};
use crate::records::{create_problem, create_review, list_problems, list_reviews};
use crate::server::state::AppState;

/// Configure API routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
///
/// # Returns
///
/// Router with API routes configured
///
/// # Authentication
///
/// Only `/verify` requires a JWT in the `Authorization` header. The
/// record endpoints are public: problems and reviews can be submitted
/// anonymously.
pub fn configure_api_routes(router: Router<AppState>) -> Router<AppState> {
    router
        // Authentication endpoints
        .route(
            "/register",
            axum::routing::post(register),
        )
        .route(
            "/login",
            axum::routing::post(login),
        )
        .route(
            "/verify",
            axum::routing::get(verify),
        )
        // Problem report endpoints
        .route(
            "/problems",
            axum::routing::post(create_problem).get(list_problems),
        )
        // Review endpoints
        .route(
            "/reviews",
            axum::routing::post(create_review).get(list_reviews),
        )
}
