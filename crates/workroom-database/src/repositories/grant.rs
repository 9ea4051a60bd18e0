//! File access grant repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::file::FileAccessGrant;

/// Repository for explicit per-user file grants.
#[derive(Debug, Clone)]
pub struct FileGrantRepository {
    pool: PgPool,
}

impl FileGrantRepository {
    /// Create a new grant repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether an explicit grant exists for the user on the file.
    pub async fn exists_for(&self, file_id: ObjectId, user_id: ObjectId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM file_access_grants WHERE file_id = $1 AND user_id = $2)",
        )
        .bind(file_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check file grant", e))
    }

    /// List all grants issued for a file.
    pub async fn list_for_file(&self, file_id: ObjectId) -> AppResult<Vec<FileAccessGrant>> {
        sqlx::query_as::<_, FileAccessGrant>(
            "SELECT * FROM file_access_grants WHERE file_id = $1 ORDER BY granted_at ASC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file grants", e))
    }
}
