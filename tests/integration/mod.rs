//! Integration tests
//!
//! End-to-end tests running against the full router

pub mod api;
