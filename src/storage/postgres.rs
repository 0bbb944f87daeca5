/**
 * PostgreSQL Storage
 *
 * PgStore wraps a sqlx connection pool and implements every repository
 * trait against PostgreSQL. Connecting also runs the migrations under
 * `migrations/`, so a fresh database is ready after `connect` returns.
 */

use sqlx::{PgPool, Row};
use uuid::Uuid;
use chrono::Utc;

use crate::auth::accounts::{Account, AccountRepository, NewAccount};
use crate::records::problems::{NewProblem, ProblemReport, ProblemRepository, Urgency};
use crate::records::reviews::{NewReview, Review, ReviewRepository};
use crate::storage::StorageError;

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect to PostgreSQL and run pending migrations
    ///
    /// # Arguments
    /// * `database_url` - PostgreSQL connection string
    ///
    /// # Returns
    /// Connected store or error
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        tracing::info!("Connecting to database...");

        let pool = PgPool::connect(database_url).await?;

        tracing::info!("Running database migrations...");

        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(sqlx::Error::from)?;

        tracing::info!("Database ready");

        Ok(Self { pool })
    }
}

#[async_trait::async_trait]
impl AccountRepository for PgStore {
    async fn insert(&self, account: NewAccount) -> Result<Account, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let account = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO accounts (id, name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&account.name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                StorageError::duplicate("email")
            }
            _ => StorageError::Database(e),
        })?;

        Ok(account)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, StorageError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, StorageError> {
        let account = sqlx::query_as::<_, Account>(
            r#"
            SELECT id, name, email, password_hash, created_at
            FROM accounts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(account)
    }
}

#[async_trait::async_trait]
impl ProblemRepository for PgStore {
    async fn insert(&self, problem: NewProblem) -> Result<ProblemReport, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO problems (id, title, description, category, urgency, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(&problem.title)
        .bind(&problem.description)
        .bind(&problem.category)
        .bind(problem.urgency.as_str())
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(ProblemReport {
            id,
            title: problem.title,
            description: problem.description,
            category: problem.category,
            urgency: problem.urgency,
            created_at: now,
        })
    }

    async fn list_sorted(&self) -> Result<Vec<ProblemReport>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, category, urgency, created_at
            FROM problems
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                let raw: String = row.get("urgency");
                let urgency = Urgency::from_str(&raw).ok_or_else(|| {
                    StorageError::decode("urgency", format!("unknown value '{}'", raw))
                })?;

                Ok(ProblemReport {
                    id: row.get("id"),
                    title: row.get("title"),
                    description: row.get("description"),
                    category: row.get("category"),
                    urgency,
                    created_at: row.get("created_at"),
                })
            })
            .collect()
    }
}

#[async_trait::async_trait]
impl ReviewRepository for PgStore {
    async fn insert(&self, review: NewReview) -> Result<Review, StorageError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO reviews (id, rating, comment, author_id, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(review.rating)
        .bind(&review.comment)
        .bind(review.author_id)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(Review {
            id,
            rating: review.rating,
            comment: review.comment,
            author_id: review.author_id,
            created_at: now,
        })
    }

    async fn list_sorted(&self) -> Result<Vec<Review>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT id, rating, comment, author_id, created_at
            FROM reviews
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Review {
                id: row.get("id"),
                rating: row.get("rating"),
                comment: row.get("comment"),
                author_id: row.get("author_id"),
                created_at: row.get("created_at"),
            })
            .collect())
    }
}
