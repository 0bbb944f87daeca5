/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * the API routes, the health endpoint and the fallback handler into a
 * single Axum router, then applies the shared middleware layers.
 *
 * # Middleware
 *
 * Every route runs behind:
 * - `TraceLayer` - request/response logging via `tracing`
 * - `CorsLayer::permissive()` - the API is consumed by browser clients
 *   on other origins
 */

use axum::{http::StatusCode, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing the repositories and
///   session keys
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    // Start with the health endpoint
    let router = Router::new().route("/health", axum::routing::get(health));

    // Add API routes
    let router = configure_api_routes(router);

    // Fallback handler for 404
    let router = router.fallback(not_found);

    // Use AppState as router state, then apply shared layers
    router
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Liveness probe
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// JSON 404 for unknown paths, same body shape as handler errors
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "error": "not found",
            "status": StatusCode::NOT_FOUND.as_u16(),
        })),
    )
}
