/**
 * Account Model and Repository Interface
 *
 * This module defines the account record and the storage interface used
 * by the authentication handlers. Handlers never talk to a database
 * directly; they go through `AccountRepository`, which is implemented by
 * the PostgreSQL store in production and by an in-memory store in tests.
 */

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::storage::StorageError;

/// Account record as stored
///
/// The email is the unique identity. `password_hash` holds the bcrypt
/// hash, never the plaintext; this struct is never serialized to clients.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Account {
    /// Unique account ID (UUID)
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique identity)
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new account
///
/// ID and creation timestamp are assigned by the store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// bcrypt hash of the password
    pub password_hash: String,
}

/// Storage interface for accounts
///
/// Object-safe so the application state can hold it as
/// `Arc<dyn AccountRepository>` and tests can substitute an in-memory
/// implementation.
#[async_trait::async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account
    ///
    /// Fails with `StorageError::Duplicate` if an account with the same
    /// email already exists.
    async fn insert(&self, account: NewAccount) -> Result<Account, StorageError>;

    /// Look up an account by email
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StorageError>;

    /// Look up an account by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StorageError>;
}
