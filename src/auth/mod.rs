//! Authentication Module
//!
//! This module handles user account registration, login, and session
//! management. It provides HTTP handlers for the authentication endpoints
//! and manages account data and JWT session tokens.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── accounts.rs     - Account model and repository interface
//! ├── passwords.rs    - bcrypt password hashing
//! ├── sessions.rs     - JWT session token management
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - Account registration handler
//!     ├── login.rs    - Credential verification handler
//!     └── verify.rs   - Token verification handler
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: name + email + password → account created with a
//!    bcrypt hash of the password
//! 2. **Login**: email + password → credentials verified → JWT token
//!    returned (24h expiry)
//! 3. **Verify**: bearer token → token verified → account info returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt (cost 10) before storage
//! - Login failures are uniform: unknown email and wrong password produce
//!   the same status and message
//! - Session tokens are stateless JWTs; expiry is the only invalidation

/// Account model and repository interface
pub mod accounts;

/// Password hashing
pub mod passwords;

/// JWT session token management
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use accounts::{Account, AccountRepository, NewAccount};
pub use handlers::types::{AccountResponse, AuthResponse, LoginRequest, RegisterRequest};
pub use handlers::{login, register, verify};
pub use sessions::{Claims, SessionKeys};
