//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory test server construction
//! - Authentication test helpers

pub mod auth_helpers;
pub mod server;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use server::*;
