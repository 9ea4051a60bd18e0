//! Share link repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::file::FileShareLink;

/// Repository for tokenized file share links.
#[derive(Debug, Clone)]
pub struct ShareLinkRepository {
    pool: PgPool,
}

impl ShareLinkRepository {
    /// Create a new share link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all share links issued for a file.
    pub async fn list_for_file(&self, file_id: ObjectId) -> AppResult<Vec<FileShareLink>> {
        sqlx::query_as::<_, FileShareLink>(
            "SELECT * FROM file_share_links WHERE file_id = $1 ORDER BY created_at ASC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list share links", e))
    }
}
