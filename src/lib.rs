//! FixIt - Account & Records API Backend
//!
//! FixIt is a small HTTP API backend built with Axum. It provides user
//! account registration and login with bcrypt-hashed credentials, signed
//! session tokens (JWT), and plain create/read storage for two record
//! types: problem reports and reviews.
//!
//! # Module Structure
//!
//! The crate is organized into focused modules:
//!
//! - **`config`** - Environment configuration, validated once at startup
//! - **`error`** - API error types and their HTTP response mapping
//! - **`auth`** - Accounts, password hashing, session tokens, auth handlers
//! - **`records`** - Problem reports and reviews with their handlers
//! - **`storage`** - Repository implementations (PostgreSQL and in-memory)
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`server`** - Application state and server initialization
//!
//! # Authentication Flow
//!
//! 1. **Register**: Client provides name, email and password → account
//!    created with a bcrypt hash of the password
//! 2. **Login**: Credentials verified → JWT token returned (24h expiry)
//! 3. **Verify**: Client presents `Authorization: Bearer <token>` → token
//!    checked, account info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage and never returned
//! - Invalid login credentials fail uniformly (no account enumeration)
//! - The signing secret comes from configuration only; there is no
//!   fallback value
//!
//! # Usage
//!
//! ```rust,no_run
//! use fixit::config::AppConfig;
//! use fixit::server::init::create_app;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(&config).await?;
//! // Use app with axum::serve
//! # Ok(())
//! # }
//! ```

/// Environment configuration
pub mod config;

/// API error types
pub mod error;

/// Authentication: accounts, passwords, sessions, handlers
pub mod auth;

/// Problem reports and reviews
pub mod records;

/// Repository implementations
pub mod storage;

/// Route configuration
pub mod routes;

/// Server state and initialization
pub mod server;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::ApiError;
pub use server::state::AppState;
