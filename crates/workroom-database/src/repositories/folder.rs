//! Folder repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::folder::{CreateFolder, Folder};

/// Repository for folder CRUD within the project hierarchy.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by primary key.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find folder by id", e)
            })
    }

    /// List direct children of a scope within a project.
    ///
    /// A `None` parent means the project root. An id with no matching rows
    /// simply yields an empty list; listing never 404s on the scope.
    pub async fn list_children(
        &self,
        project_id: ObjectId,
        parent_folder_id: Option<ObjectId>,
    ) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "SELECT * FROM folders \
             WHERE project_id = $1 AND parent_folder_id IS NOT DISTINCT FROM $2 \
             ORDER BY name ASC",
        )
        .bind(project_id)
        .bind(parent_folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders \
                 (id, name, project_id, parent_folder_id, description, color, metadata, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(&data.name)
        .bind(data.project_id)
        .bind(data.parent_folder_id)
        .bind(&data.description)
        .bind(&data.color)
        .bind(&data.metadata)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create folder", e))
    }
}
