/**
 * Problem Report Model
 *
 * This module defines the problem report record, its urgency tag, and the
 * storage interface the handlers go through.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::StorageError;

/// Urgency tag on a problem report
///
/// Closed set; anything outside it is rejected at the API boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Canonical form for storage and responses
    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }

    /// Parse urgency from client or database input
    ///
    /// Case-insensitive. Also accepts the legacy Spanish spellings older
    /// clients still send; those normalize to the canonical set.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "low" | "baja" => Some(Urgency::Low),
            "medium" | "media" => Some(Urgency::Medium),
            "high" | "alta" => Some(Urgency::High),
            _ => None,
        }
    }
}

/// Problem report record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemReport {
    /// Unique report ID (UUID)
    pub id: Uuid,
    /// Short summary
    pub title: String,
    /// Full description
    pub description: String,
    /// Free-form category label
    pub category: String,
    /// Normalized urgency
    pub urgency: Urgency,
    /// Created at timestamp (server-assigned)
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a problem report
///
/// ID and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewProblem {
    pub title: String,
    pub description: String,
    pub category: String,
    pub urgency: Urgency,
}

/// Storage interface for problem reports
#[async_trait::async_trait]
pub trait ProblemRepository: Send + Sync {
    /// Insert a new problem report
    async fn insert(&self, problem: NewProblem) -> Result<ProblemReport, StorageError>;

    /// List all problem reports, newest first
    async fn list_sorted(&self) -> Result<Vec<ProblemReport>, StorageError>;
}
