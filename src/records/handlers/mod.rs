//! Record Handlers Module
//!
//! HTTP handlers for the problem report and review endpoints.
//!
//! # Handlers
//!
//! - **`create_problem`** - POST /problems (201)
//! - **`list_problems`** - GET /problems (200)
//! - **`create_review`** - POST /reviews (201)
//! - **`list_reviews`** - GET /reviews (200)

/// Request types
pub mod types;

/// Problem report handlers
pub mod problems;

/// Review handlers
pub mod reviews;

// Re-export commonly used types and handlers
pub use problems::{create_problem, list_problems};
pub use reviews::{create_review, list_reviews};
pub use types::{CreateProblemRequest, CreateReviewRequest};
