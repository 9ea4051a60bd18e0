//! Notification repository implementation.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::notification::{CreateNotification, Notification};

/// Repository for user notifications.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: PgPool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a notification by primary key.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Notification>> {
        sqlx::query_as::<_, Notification>("SELECT * FROM notifications WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification by id", e)
            })
    }

    /// Create a new notification.
    pub async fn create(&self, data: &CreateNotification) -> AppResult<Notification> {
        sqlx::query_as::<_, Notification>(
            "INSERT INTO notifications (id, user_id, kind, message, invite_id, project_id, sender_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(data.user_id)
        .bind(data.kind)
        .bind(&data.message)
        .bind(data.invite_id)
        .bind(data.project_id)
        .bind(data.sender_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create notification", e))
    }

    /// List unread notifications for a user, newest first.
    ///
    /// Invite notifications whose underlying invite is no longer pending are
    /// filtered out so a stale invite never resurfaces in the bell.
    pub async fn list_unread(&self, user_id: ObjectId) -> AppResult<Vec<Notification>> {
        sqlx::query_as::<_, Notification>(
            "SELECT n.* FROM notifications n \
             LEFT JOIN project_invites pi ON pi.id = n.invite_id \
             WHERE n.user_id = $1 \
               AND n.read = FALSE \
               AND (n.kind <> 'invite' OR pi.status = 'pending') \
             ORDER BY n.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list unread notifications", e)
        })
    }

    /// Mark one of the user's notifications as read.
    ///
    /// Scoped to the owning user so nobody can flip someone else's
    /// notification by guessing ids.
    pub async fn mark_read(&self, id: ObjectId, user_id: ObjectId) -> AppResult<()> {
        let result = sqlx::query(
            "UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Notification not found"));
        }
        Ok(())
    }
}
