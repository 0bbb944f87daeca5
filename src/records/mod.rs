//! Records Module
//!
//! This module holds the two plain record types the API stores: problem
//! reports and reviews. Both are create/read only — records are never
//! updated or deleted — and both are listed newest first.
//!
//! # Module Structure
//!
//! ```text
//! records/
//! ├── mod.rs       - Module exports and documentation
//! ├── problems.rs  - Problem report model, urgency, repository interface
//! ├── reviews.rs   - Review model and repository interface
//! └── handlers/    - HTTP handlers
//!     ├── mod.rs
//!     ├── types.rs
//!     ├── problems.rs
//!     └── reviews.rs
//! ```

/// Problem report model and repository interface
pub mod problems;

/// Review model and repository interface
pub mod reviews;

/// HTTP handlers for record endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{create_problem, create_review, list_problems, list_reviews};
pub use problems::{NewProblem, ProblemReport, ProblemRepository, Urgency};
pub use reviews::{NewReview, Review, ReviewRepository};
