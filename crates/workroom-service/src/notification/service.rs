//! Notification reads and the invite accept/decline flows.

use std::sync::Arc;

use tracing::info;

use workroom_core::error::AppError;
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_database::repositories::{
    InviteRepository, NotificationRepository, ProjectRepository,
};
use workroom_entity::notification::{CreateNotification, Notification, NotificationKind};
use workroom_entity::project::{Project, ProjectInvite, ProjectMember};
use workroom_entity::user::User;

/// Identifiers a client submits when responding to an invite.
///
/// The project and inviter ids are cross-checked against the stored invite
/// so a stale or tampered payload is rejected before anything changes.
#[derive(Debug, Clone, Copy)]
pub struct InviteResponseInput {
    /// The invite notification being acted on.
    pub notification_id: ObjectId,
    /// The invite itself.
    pub invite_id: ObjectId,
    /// The project the invite is for.
    pub project_id: ObjectId,
    /// The member who sent the invite.
    pub inviter_id: ObjectId,
}

/// Notification use cases: unread listing, read marking, invite responses.
#[derive(Debug, Clone)]
pub struct NotificationService {
    notifications: Arc<NotificationRepository>,
    invites: Arc<InviteRepository>,
    projects: Arc<ProjectRepository>,
}

impl NotificationService {
    /// Creates a new notification service.
    pub fn new(
        notifications: Arc<NotificationRepository>,
        invites: Arc<InviteRepository>,
        projects: Arc<ProjectRepository>,
    ) -> Self {
        Self {
            notifications,
            invites,
            projects,
        }
    }

    /// Lists the user's unread notifications, newest first.
    ///
    /// Invite notifications whose invite is no longer pending are filtered
    /// out, so a responded invite disappears from the list.
    pub async fn list_unread(&self, user: &User) -> AppResult<Vec<Notification>> {
        self.notifications.list_unread(user.id).await
    }

    /// Marks one of the user's notifications as read.
    pub async fn mark_read(&self, user: &User, notification_id: ObjectId) -> AppResult<()> {
        self.notifications.mark_read(notification_id, user.id).await
    }

    /// Accepts a project invite.
    ///
    /// On success the user becomes a member, the invite is accepted, the
    /// invite notification is marked read, and the inviter is notified, all
    /// in one transaction.
    pub async fn accept_invite(
        &self,
        user: &User,
        input: InviteResponseInput,
    ) -> AppResult<ProjectMember> {
        let (notification, invite, project) = self.validated_invite(user, input).await?;

        let reciprocal = CreateNotification {
            user_id: invite.inviter_id,
            kind: NotificationKind::Update,
            message: format!(
                "{} accepted your invitation to join {}",
                user.display_label(),
                project.name
            ),
            invite_id: Some(invite.id),
            project_id: Some(project.id),
            sender_id: Some(user.id),
        };
        let member = self
            .invites
            .accept(&invite, notification.id, &reciprocal)
            .await?;

        info!(
            user_id = %user.id,
            project_id = %project.id,
            invite_id = %invite.id,
            "Invite accepted"
        );
        Ok(member)
    }

    /// Declines a project invite.
    ///
    /// Same transactional shape as acceptance, without a membership row.
    pub async fn decline_invite(&self, user: &User, input: InviteResponseInput) -> AppResult<()> {
        let (notification, invite, project) = self.validated_invite(user, input).await?;

        let reciprocal = CreateNotification {
            user_id: invite.inviter_id,
            kind: NotificationKind::Update,
            message: format!(
                "{} declined your invitation to join {}",
                user.display_label(),
                project.name
            ),
            invite_id: Some(invite.id),
            project_id: Some(project.id),
            sender_id: Some(user.id),
        };
        self.invites
            .decline(&invite, notification.id, &reciprocal)
            .await?;

        info!(
            user_id = %user.id,
            project_id = %project.id,
            invite_id = %invite.id,
            "Invite declined"
        );
        Ok(())
    }

    /// Loads and cross-checks everything an invite response touches.
    ///
    /// Ownership is checked before the invite's state so a stranger learns
    /// nothing about an invite's status.
    async fn validated_invite(
        &self,
        user: &User,
        input: InviteResponseInput,
    ) -> AppResult<(Notification, ProjectInvite, Project)> {
        let notification = self
            .notifications
            .find_by_id(input.notification_id)
            .await?
            .ok_or_else(|| AppError::not_found("Notification not found"))?;
        if notification.user_id != user.id {
            return Err(AppError::authorization(
                "This notification does not belong to you",
            ));
        }

        let invite = self
            .invites
            .find_by_id(input.invite_id)
            .await?
            .ok_or_else(|| AppError::not_found("Invite not found"))?;
        if invite.invitee_id != user.id {
            return Err(AppError::authorization("This invite does not belong to you"));
        }
        if !invite.is_pending() {
            return Err(AppError::conflict("Invite is no longer pending"));
        }
        if invite.is_expired() {
            return Err(AppError::conflict("Invite has expired"));
        }

        if invite.project_id != input.project_id {
            return Err(AppError::validation("Project does not match the invite"));
        }
        if invite.inviter_id != input.inviter_id {
            return Err(AppError::validation("Inviter does not match the invite"));
        }
        if notification.invite_id != Some(invite.id) {
            return Err(AppError::validation(
                "Notification is not linked to this invite",
            ));
        }

        let project = self
            .projects
            .find_by_id(invite.project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        Ok((notification, invite, project))
    }
}
