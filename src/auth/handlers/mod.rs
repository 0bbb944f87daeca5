//! Authentication Handlers Module
//!
//! This module contains the HTTP handlers for the authentication
//! endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── register.rs - Account registration handler
//! ├── login.rs    - Credential verification handler
//! └── verify.rs   - Token verification handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - Account registration (201)
//! - **`login`** - POST /login - Credential verification, token issuance (200)
//! - **`verify`** - GET /verify - Token verification (200)

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

/// Verify handler
pub mod verify;

// Re-export commonly used types
pub use types::{AccountResponse, AuthResponse, LoginRequest, RegisterRequest};

// Re-export handlers
pub use login::login;
pub use register::register;
pub use verify::verify;
