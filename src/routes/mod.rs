//! Route Configuration Module
//!
//! This module configures all HTTP routes for the server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs        - Module exports and documentation
//! ├── router.rs     - Main router creation
//! └── api_routes.rs - API endpoint wiring
//! ```
//!
//! # Routes
//!
//! ## Authentication
//! - `POST /register` - Account registration
//! - `POST /login` - Credential login, returns a JWT
//! - `GET /verify` - Validate a bearer token
//!
//! ## Records
//! - `POST /problems` - Submit a problem report
//! - `GET /problems` - List problem reports, newest first
//! - `POST /reviews` - Submit a review
//! - `GET /reviews` - List reviews, newest first
//!
//! ## Operational
//! - `GET /health` - Liveness probe
//!
//! Unknown paths fall through to a JSON 404 handler.

/// Main router creation
pub mod router;

/// API endpoint wiring
pub mod api_routes;

// Re-export commonly used functions
pub use router::create_router;
