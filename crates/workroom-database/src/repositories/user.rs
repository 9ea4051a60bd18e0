//! User repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::user::{UpsertUser, User};

/// Repository for user lookup and identity-sync operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by primary key.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user by id", e))
    }

    /// Find a user by the identity provider's subject identifier.
    pub async fn find_by_external_id(&self, external_id: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE external_id = $1")
            .bind(external_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by external id", e)
            })
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// Insert or refresh a user keyed by external identity.
    ///
    /// One statement, concurrent-safe under the unique index. Absent claim
    /// values leave the stored profile fields untouched.
    pub async fn upsert_by_external_id(&self, data: &UpsertUser) -> AppResult<User> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, external_id, email, name, avatar_url) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT (external_id) DO UPDATE SET \
                 email = COALESCE(EXCLUDED.email, users.email), \
                 name = COALESCE(EXCLUDED.name, users.name), \
                 avatar_url = COALESCE(EXCLUDED.avatar_url, users.avatar_url), \
                 updated_at = NOW() \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(&data.external_id)
        .bind(&data.email)
        .bind(&data.name)
        .bind(&data.avatar_url)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))
    }

    /// Search users by email substring (case-insensitive).
    pub async fn search_by_email(&self, query: &str, limit: i64) -> AppResult<Vec<User>> {
        let pattern = format!("%{query}%");

        sqlx::query_as::<_, User>(
            "SELECT * FROM users WHERE email ILIKE $1 ORDER BY email ASC LIMIT $2",
        )
        .bind(&pattern)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search users", e))
    }
}
