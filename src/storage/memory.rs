/**
 * In-Memory Storage
 *
 * MemoryStore keeps every collection in a `tokio::sync::RwLock<Vec<_>>`
 * and implements the same repository traits as the PostgreSQL store.
 * Handler and integration tests run against it so they need no database.
 */

use tokio::sync::RwLock;
use uuid::Uuid;
use chrono::Utc;

use crate::auth::accounts::{Account, AccountRepository, NewAccount};
use crate::records::problems::{NewProblem, ProblemReport, ProblemRepository};
use crate::records::reviews::{NewReview, Review, ReviewRepository};
use crate::storage::StorageError;

/// In-memory store backed by vectors
#[derive(Default)]
pub struct MemoryStore {
    accounts: RwLock<Vec<Account>>,
    problems: RwLock<Vec<ProblemReport>>,
    reviews: RwLock<Vec<Review>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl AccountRepository for MemoryStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, StorageError> {
        let mut accounts = self.accounts.write().await;

        // Same uniqueness rule the accounts table enforces
        if accounts.iter().any(|a| a.email == account.email) {
            return Err(StorageError::duplicate("email"));
        }

        let account = Account {
            id: Uuid::new_v4(),
            name: account.name,
            email: account.email,
            password_hash: account.password_hash,
            created_at: Utc::now(),
        };
        accounts.push(account.clone());

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StorageError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.email == email).cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StorageError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.iter().find(|a| a.id == id).cloned())
    }
}

#[async_trait::async_trait]
impl ProblemRepository for MemoryStore {
    async fn insert(&self, problem: NewProblem) -> Result<ProblemReport, StorageError> {
        let report = ProblemReport {
            id: Uuid::new_v4(),
            title: problem.title,
            description: problem.description,
            category: problem.category,
            urgency: problem.urgency,
            created_at: Utc::now(),
        };

        self.problems.write().await.push(report.clone());

        Ok(report)
    }

    async fn list_sorted(&self) -> Result<Vec<ProblemReport>, StorageError> {
        let problems = self.problems.read().await;

        let mut listed = problems.clone();
        // Stable sort then reverse: equal timestamps resolve to the
        // most recently inserted entry first
        listed.sort_by_key(|p| p.created_at);
        listed.reverse();

        Ok(listed)
    }
}

#[async_trait::async_trait]
impl ReviewRepository for MemoryStore {
    async fn insert(&self, review: NewReview) -> Result<Review, StorageError> {
        let review = Review {
            id: Uuid::new_v4(),
            rating: review.rating,
            comment: review.comment,
            author_id: review.author_id,
            created_at: Utc::now(),
        };

        self.reviews.write().await.push(review.clone());

        Ok(review)
    }

    async fn list_sorted(&self) -> Result<Vec<Review>, StorageError> {
        let reviews = self.reviews.read().await;

        let mut listed = reviews.clone();
        listed.sort_by_key(|r| r.created_at);
        listed.reverse();

        Ok(listed)
    }
}
