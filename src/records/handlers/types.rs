/**
 * Record Handler Types
 *
 * Request types for the problem report and review endpoints. Fields are
 * optional at the deserialization layer so missing values become 400
 * validation errors with field-specific messages; the stored records
 * themselves serve as the response types.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Problem report creation request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateProblemRequest {
    /// Short summary
    pub title: Option<String>,
    /// Full description
    pub description: Option<String>,
    /// Free-form category label
    pub category: Option<String>,
    /// Urgency; normalized to {Low, Medium, High}
    pub urgency: Option<String>,
}

/// Review creation request
#[derive(Deserialize, Serialize, Debug)]
pub struct CreateReviewRequest {
    /// Rating, 1 to 5
    pub rating: Option<i32>,
    /// Review text
    pub comment: Option<String>,
    /// Optional authoring account reference
    pub author_id: Option<Uuid>,
}
