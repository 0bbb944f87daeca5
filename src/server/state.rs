/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - Repository handles for accounts, problem reports and reviews
 * - JWT signing/verification keys
 *
 * Repositories are held as `Arc<dyn Trait>`, so handlers never know
 * which storage implementation is behind them. Production wires in
 * `PgStore`; the test suites wire in `MemoryStore`.
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. A login
 * handler, for example, takes `State<Arc<dyn AccountRepository>>` and
 * `State<SessionKeys>` rather than the whole container.
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::auth::accounts::AccountRepository;
use crate::auth::sessions::SessionKeys;
use crate::records::problems::ProblemRepository;
use crate::records::reviews::ReviewRepository;

/// Application state shared by every handler
///
/// # Fields
///
/// * `accounts` - Account repository
/// * `problems` - Problem report repository
/// * `reviews` - Review repository
/// * `session_keys` - JWT encoding/decoding keys
#[derive(Clone)]
pub struct AppState {
    /// Account repository
    pub accounts: Arc<dyn AccountRepository>,

    /// Problem report repository
    pub problems: Arc<dyn ProblemRepository>,

    /// Review repository
    pub reviews: Arc<dyn ReviewRepository>,

    /// JWT encoding/decoding keys, derived once at startup
    pub session_keys: SessionKeys,
}

impl AppState {
    /// Build state from a single store that implements every repository
    ///
    /// Both `PgStore` and `MemoryStore` do, so production startup and
    /// the test suites construct state the same way.
    pub fn with_store<S>(store: Arc<S>, session_keys: SessionKeys) -> Self
    where
        S: AccountRepository + ProblemRepository + ReviewRepository + 'static,
    {
        Self {
            accounts: store.clone(),
            problems: store.clone(),
            reviews: store,
            session_keys,
        }
    }
}

/// Implement FromRef for the account repository
///
/// This allows Axum handlers to extract `Arc<dyn AccountRepository>`
/// directly from `AppState` using `State(accounts)`.
impl FromRef<AppState> for Arc<dyn AccountRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.accounts.clone()
    }
}

/// Implement FromRef for the problem report repository
impl FromRef<AppState> for Arc<dyn ProblemRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.problems.clone()
    }
}

/// Implement FromRef for the review repository
impl FromRef<AppState> for Arc<dyn ReviewRepository> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.reviews.clone()
    }
}

/// Implement FromRef for the session keys
///
/// This allows the login and verify handlers to extract `SessionKeys`
/// without taking the repositories along.
impl FromRef<AppState> for SessionKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.session_keys.clone()
    }
}
