//! Server Module
//!
//! This module contains the code for initializing and configuring the
//! Axum HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs   - Module exports and documentation
//! ├── state.rs - AppState and FromRef implementations
//! └── init.rs  - Server initialization and app creation
//! ```
//!
//! # State Management
//!
//! The server uses `AppState` as the central state container, which
//! holds the repository handles and the JWT signing keys. Repositories
//! are stored as trait objects, so the same handlers serve requests
//! whether PostgreSQL or the in-memory store backs them.
//!
//! # Initialization Flow
//!
//! 1. **Storage**: Connect to PostgreSQL and run migrations
//! 2. **Session Keys**: Derive JWT keys from the configured secret
//! 3. **Router Creation**: Configure all routes and middleware

/// Application state management
pub mod state;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use init::create_app;
pub use state::AppState;
