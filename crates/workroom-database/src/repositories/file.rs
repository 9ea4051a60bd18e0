//! File repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::file::{CreateFile, File, FileStatus};

/// Repository for file records.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a file by primary key.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<File>> {
        sqlx::query_as::<_, File>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file by id", e))
    }

    /// List active files in one scope of a project.
    ///
    /// A `None` folder means the project root. A folder id with no matching
    /// rows yields an empty list.
    pub async fn list_in_scope(
        &self,
        project_id: ObjectId,
        folder_id: Option<ObjectId>,
    ) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files \
             WHERE project_id = $1 AND folder_id IS NOT DISTINCT FROM $2 AND status = 'ACTIVE' \
             ORDER BY created_at DESC",
        )
        .bind(project_id)
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    /// List the versions recorded against a file, ascending by version.
    pub async fn find_versions(&self, file_id: ObjectId) -> AppResult<Vec<File>> {
        sqlx::query_as::<_, File>(
            "SELECT * FROM files WHERE parent_file_id = $1 ORDER BY version ASC",
        )
        .bind(file_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list file versions", e))
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateFile) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "INSERT INTO files \
                 (id, file_name, file_type, file_size, storage_key, project_id, folder_id, \
                  category, description, tags, uploader_id, visibility) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(&data.file_name)
        .bind(&data.file_type)
        .bind(data.file_size)
        .bind(&data.storage_key)
        .bind(data.project_id)
        .bind(data.folder_id)
        .bind(data.category)
        .bind(&data.description)
        .bind(&data.tags)
        .bind(data.uploader_id)
        .bind(data.visibility)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create file record", e))
    }

    /// Set the starred flag.
    pub async fn set_starred(&self, id: ObjectId, starred: bool) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET starred = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(starred)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update starred flag", e))?
        .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// Set the lifecycle status.
    pub async fn set_status(&self, id: ObjectId, status: FileStatus) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET status = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update file status", e))?
        .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }

    /// Bump the download counter.
    pub async fn increment_download_count(&self, id: ObjectId) -> AppResult<File> {
        sqlx::query_as::<_, File>(
            "UPDATE files SET download_count = download_count + 1, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to bump download count", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("File {id} not found")))
    }
}
