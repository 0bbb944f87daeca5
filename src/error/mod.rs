//! API Error Module
//!
//! This module defines the error type used across all HTTP handlers and
//! its conversion to HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Kinds
//!
//! - `Validation` - missing or malformed input (400)
//! - `DuplicateIdentity` - email already registered (409)
//! - `InvalidCredentials` - login failure, uniform for unknown email and
//!   wrong password (401)
//! - `TokenMissing` / `TokenInvalid` / `TokenExpired` - bearer token
//!   failures (401 / 403 / 403)
//! - `NotFound` - missing resource (404)
//! - `Internal` - unexpected server failure (500, generic message to the
//!   caller, details logged server-side)
//!
//! # HTTP Response Conversion
//!
//! `ApiError` implements `IntoResponse`, so handlers can return it
//! directly. The response body is JSON: `{"error": <message>, "status": <code>}`.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::ApiError;
