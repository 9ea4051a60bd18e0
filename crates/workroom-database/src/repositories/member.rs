//! Project membership repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::project::ProjectMember;

/// Repository for project membership rows.
#[derive(Debug, Clone)]
pub struct ProjectMemberRepository {
    pool: PgPool,
}

impl ProjectMemberRepository {
    /// Create a new membership repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Whether the user has a membership row in the project.
    pub async fn is_member(&self, project_id: ObjectId, user_id: ObjectId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM project_members WHERE project_id = $1 AND user_id = $2)",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check membership", e))
    }

    /// List the user ids of all members of a project.
    pub async fn user_ids(&self, project_id: ObjectId) -> AppResult<Vec<ObjectId>> {
        sqlx::query_scalar::<_, ObjectId>(
            "SELECT user_id FROM project_members WHERE project_id = $1 ORDER BY joined_at ASC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list member ids", e))
    }

    /// Add a member to a project.
    pub async fn add(
        &self,
        project_id: ObjectId,
        user_id: ObjectId,
        role: &str,
        permissions: &[String],
    ) -> AppResult<ProjectMember> {
        sqlx::query_as::<_, ProjectMember>(
            "INSERT INTO project_members (id, project_id, user_id, role, permissions) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(project_id)
        .bind(user_id)
        .bind(role)
        .bind(permissions)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("project_members_project_user_key") =>
            {
                AppError::conflict("User is already a member of this project")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to add project member", e),
        })
    }
}
