//! Notification entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

use super::kind::NotificationKind;

/// A notification delivered to one user.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Notification {
    /// Unique notification identifier.
    pub id: ObjectId,
    /// The recipient.
    pub user_id: ObjectId,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// Whether the recipient has read it.
    pub read: bool,
    /// Linked invite, for invite notifications.
    pub invite_id: Option<ObjectId>,
    /// Linked project, when applicable.
    pub project_id: Option<ObjectId>,
    /// The user who triggered the notification.
    pub sender_id: Option<ObjectId>,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNotification {
    /// The recipient.
    pub user_id: ObjectId,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// Linked invite.
    pub invite_id: Option<ObjectId>,
    /// Linked project.
    pub project_id: Option<ObjectId>,
    /// The user who triggered the notification.
    pub sender_id: Option<ObjectId>,
}
