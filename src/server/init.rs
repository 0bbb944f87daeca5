/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP
 * server: storage connection, session key derivation, state creation
 * and route configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL and run migrations
 * 2. Derive the JWT keys from the configured secret
 * 3. Assemble the application state
 * 4. Create and configure the router
 *
 * # Error Handling
 *
 * Unlike request handling, initialization fails fast: a missing or
 * unreachable database is a startup error, not something to limp along
 * without.
 */

use axum::Router;
use std::sync::Arc;

use crate::auth::sessions::SessionKeys;
use crate::config::AppConfig;
use crate::routes::create_router;
use crate::server::state::AppState;
use crate::storage::{PgStore, StorageError};

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Validated application configuration
///
/// # Returns
///
/// Configured Axum Router ready to serve requests, or the storage error
/// that prevented startup
pub async fn create_app(config: &AppConfig) -> Result<Router, StorageError> {
    tracing::info!("Initializing FixIt backend server");

    // Step 1: Connect storage and run migrations
    let store = Arc::new(PgStore::connect(&config.database_url).await?);

    // Step 2: Derive session keys from the configured secret
    let session_keys = SessionKeys::new(&config.jwt_secret);

    // Step 3: Create app state
    let app_state = AppState::with_store(store, session_keys);

    // Step 4: Create router with all routes
    let app = create_router(app_state);

    tracing::info!("Router configured");

    Ok(app)
}
