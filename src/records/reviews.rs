/**
 * Review Model
 *
 * This module defines the review record and its storage interface. A
 * review may reference the account that wrote it, but the reference is
 * kept as a plain optional ID and not enforced against the accounts
 * store.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StorageError;

/// Valid rating range, inclusive
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

/// Review record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    /// Unique review ID (UUID)
    pub id: Uuid,
    /// Rating, 1 to 5
    pub rating: i32,
    /// Review text
    pub comment: String,
    /// Optional reference to the authoring account (not enforced)
    pub author_id: Option<Uuid>,
    /// Created at timestamp (server-assigned)
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a review
///
/// ID and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewReview {
    pub rating: i32,
    pub comment: String,
    pub author_id: Option<Uuid>,
}

/// Storage interface for reviews
#[async_trait::async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Insert a new review
    async fn insert(&self, review: NewReview) -> Result<Review, StorageError>;

    /// List all reviews, newest first
    async fn list_sorted(&self) -> Result<Vec<Review>, StorageError>;
}
