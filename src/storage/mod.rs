//! Storage Module
//!
//! Repository implementations behind the `AccountRepository`,
//! `ProblemRepository` and `ReviewRepository` interfaces. Handlers only
//! ever see the traits; which implementation backs them is decided at
//! startup (PostgreSQL) or in tests (in-memory).
//!
//! # Module Structure
//!
//! ```text
//! storage/
//! ├── mod.rs      - Storage error type
//! ├── postgres.rs - PgStore, the sqlx/PostgreSQL implementation
//! └── memory.rs   - MemoryStore, the in-memory implementation
//! ```

use thiserror::Error;

/// PostgreSQL repository implementations
pub mod postgres;

/// In-memory repository implementations
pub mod memory;

// Re-export commonly used types
pub use memory::MemoryStore;
pub use postgres::PgStore;

/// Storage layer errors
///
/// Both implementations produce the same error type so handlers stay
/// implementation-agnostic.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Unique-key conflict
    #[error("duplicate value for {field}")]
    Duplicate {
        /// The conflicting column
        field: String,
    },

    /// A stored value failed to map back to a domain type
    #[error("failed to decode column {column}: {message}")]
    Decode {
        /// The offending column
        column: String,
        /// What was wrong with the value
        message: String,
    },

    /// Underlying database failure
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Create a duplicate-key error
    pub fn duplicate(field: impl Into<String>) -> Self {
        Self::Duplicate {
            field: field.into(),
        }
    }

    /// Create a decode error
    pub fn decode(column: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.into(),
            message: message.into(),
        }
    }
}
