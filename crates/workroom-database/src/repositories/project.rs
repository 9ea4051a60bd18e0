//! Project repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::project::{CreateProject, Project, ProjectMember};

/// Repository for project CRUD and listing operations.
#[derive(Debug, Clone)]
pub struct ProjectRepository {
    pool: PgPool,
}

impl ProjectRepository {
    /// Create a new project repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a project by primary key.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Project>> {
        sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find project by id", e)
            })
    }

    /// List every project the user created or belongs to.
    pub async fn list_for_user(&self, user_id: ObjectId) -> AppResult<Vec<Project>> {
        sqlx::query_as::<_, Project>(
            "SELECT DISTINCT p.* FROM projects p \
             LEFT JOIN project_members pm ON pm.project_id = p.id \
             WHERE p.creator_id = $1 OR pm.user_id = $1 \
             ORDER BY p.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list projects", e))
    }

    /// Create a project together with its owner membership row.
    ///
    /// Both inserts run in one transaction so a project can never exist
    /// without its creator among the members.
    pub async fn create_with_owner(&self, data: &CreateProject) -> AppResult<Project> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let project = sqlx::query_as::<_, Project>(
            "INSERT INTO projects \
                 (id, name, description, creator_id, visibility, project_type, \
                  start_date, due_date, tags, color) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.creator_id)
        .bind(&data.visibility)
        .bind(&data.project_type)
        .bind(data.start_date)
        .bind(data.due_date)
        .bind(&data.tags)
        .bind(&data.color)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("projects_creator_name_key") =>
            {
                AppError::conflict(format!("A project named '{}' already exists", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create project", e),
        })?;

        sqlx::query(
            "INSERT INTO project_members (id, project_id, user_id, role, permissions) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(ObjectId::new())
        .bind(project.id)
        .bind(project.creator_id)
        .bind(ProjectMember::ROLE_OWNER)
        .bind(ProjectMember::owner_permissions())
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to create owner membership", e)
        })?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit project creation", e)
        })?;

        Ok(project)
    }
}
