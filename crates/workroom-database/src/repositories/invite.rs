//! Project invite repository implementation.
//!
//! Responding to an invite touches four tables at once; the accept and
//! decline paths run inside a single transaction so a membership can never
//! appear without the invite flipping state, and vice versa.

use sqlx::PgPool;

use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_entity::notification::CreateNotification;
use workroom_entity::project::{CreateInvite, ProjectInvite, ProjectMember};

/// Repository for project invites.
#[derive(Debug, Clone)]
pub struct InviteRepository {
    pool: PgPool,
}

impl InviteRepository {
    /// Create a new invite repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an invite by primary key.
    pub async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<ProjectInvite>> {
        sqlx::query_as::<_, ProjectInvite>("SELECT * FROM project_invites WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find invite by id", e)
            })
    }

    /// Create a new pending invite.
    pub async fn create(&self, data: &CreateInvite) -> AppResult<ProjectInvite> {
        sqlx::query_as::<_, ProjectInvite>(
            "INSERT INTO project_invites (id, project_id, inviter_id, invitee_id, expires_at) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(data.project_id)
        .bind(data.inviter_id)
        .bind(data.invitee_id)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create invite", e))
    }

    /// Accept an invite.
    ///
    /// In one transaction: insert the membership, flip the invite to
    /// `accepted` (guarded on it still being pending), notify the inviter,
    /// and mark the invitee's original notification read. Any failure rolls
    /// the whole response back.
    pub async fn accept(
        &self,
        invite: &ProjectInvite,
        notification_id: ObjectId,
        reciprocal: &CreateNotification,
    ) -> AppResult<ProjectMember> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let member = sqlx::query_as::<_, ProjectMember>(
            "INSERT INTO project_members (id, project_id, user_id, role, permissions) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING *",
        )
        .bind(ObjectId::new())
        .bind(invite.project_id)
        .bind(invite.invitee_id)
        .bind(ProjectMember::ROLE_MEMBER)
        .bind(ProjectMember::member_permissions())
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("project_members_project_user_key") =>
            {
                AppError::conflict("User is already a member of this project")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to insert membership", e),
        })?;

        let flipped = sqlx::query(
            "UPDATE project_invites \
             SET status = 'accepted', accepted_at = NOW() \
             WHERE id = $1 AND status = 'pending'",
        )
        .bind(invite.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update invite", e))?;

        // Dropping the transaction here rolls the membership back too.
        if flipped.rows_affected() == 0 {
            return Err(AppError::conflict("Invite is no longer pending"));
        }

        insert_notification(&mut tx, reciprocal).await?;
        mark_notification_read(&mut tx, notification_id, invite.invitee_id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit invite acceptance", e)
        })?;

        Ok(member)
    }

    /// Decline an invite.
    ///
    /// Same transactional shape as [`InviteRepository::accept`], without
    /// the membership insert.
    pub async fn decline(
        &self,
        invite: &ProjectInvite,
        notification_id: ObjectId,
        reciprocal: &CreateNotification,
    ) -> AppResult<()> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let flipped = sqlx::query(
            "UPDATE project_invites \
             SET status = 'declined', declined_at = NOW() \
             WHERE id = $1 AND status = 'pending'",
        )
        .bind(invite.id)
        .execute(&mut *tx)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update invite", e))?;

        if flipped.rows_affected() == 0 {
            return Err(AppError::conflict("Invite is no longer pending"));
        }

        insert_notification(&mut tx, reciprocal).await?;
        mark_notification_read(&mut tx, notification_id, invite.invitee_id).await?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit invite decline", e)
        })?;

        Ok(())
    }
}

async fn insert_notification(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    data: &CreateNotification,
) -> AppResult<()> {
    sqlx::query(
        "INSERT INTO notifications (id, user_id, kind, message, invite_id, project_id, sender_id) \
         VALUES ($1, $2, $3, $4, $5, $6, $7)",
    )
    .bind(ObjectId::new())
    .bind(data.user_id)
    .bind(data.kind)
    .bind(&data.message)
    .bind(data.invite_id)
    .bind(data.project_id)
    .bind(data.sender_id)
    .execute(&mut **tx)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert notification", e))?;
    Ok(())
}

async fn mark_notification_read(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    notification_id: ObjectId,
    user_id: ObjectId,
) -> AppResult<()> {
    sqlx::query("UPDATE notifications SET read = TRUE WHERE id = $1 AND user_id = $2")
        .bind(notification_id)
        .bind(user_id)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to mark notification read", e)
        })?;
    Ok(())
}
