//! Test server construction
//!
//! Builds an application instance backed by the in-memory store, so
//! integration tests exercise the real router without a database.

use axum_test::TestServer;
use std::sync::Arc;

use fixit::auth::sessions::SessionKeys;
use fixit::routes::create_router;
use fixit::server::state::AppState;
use fixit::storage::MemoryStore;

/// JWT secret shared by every test server
pub const TEST_SECRET: &str = "test secret";

/// Create a test server backed by the in-memory store
pub fn create_test_server() -> TestServer {
    let state = AppState::with_store(
        Arc::new(MemoryStore::new()),
        SessionKeys::new(TEST_SECRET),
    );
    TestServer::new(create_router(state)).expect("Failed to start test server")
}
