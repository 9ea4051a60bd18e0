//! Project invite entity and status enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use workroom_core::types::ObjectId;

/// Lifecycle status of a project invite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "invite_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InviteStatus {
    /// Waiting for the invitee's response.
    Pending,
    /// The invitee accepted and became a member.
    Accepted,
    /// The invitee declined.
    Declined,
}

impl InviteStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }
}

impl fmt::Display for InviteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InviteStatus {
    type Err = workroom_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            _ => Err(workroom_core::AppError::validation(format!(
                "Invalid invite status: '{s}'. Expected one of: pending, accepted, declined"
            ))),
        }
    }
}

/// An invitation for a user to join a project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectInvite {
    /// Unique invite identifier.
    pub id: ObjectId,
    /// The project being joined.
    pub project_id: ObjectId,
    /// The member who sent the invite.
    pub inviter_id: ObjectId,
    /// The invited user.
    pub invitee_id: ObjectId,
    /// Current status.
    pub status: InviteStatus,
    /// When the invite stops being acceptable.
    pub expires_at: DateTime<Utc>,
    /// When the invite was accepted.
    pub accepted_at: Option<DateTime<Utc>>,
    /// When the invite was declined.
    pub declined_at: Option<DateTime<Utc>>,
    /// When the invite was created.
    pub created_at: DateTime<Utc>,
}

impl ProjectInvite {
    /// Whether the invite is still awaiting a response.
    pub fn is_pending(&self) -> bool {
        self.status == InviteStatus::Pending
    }

    /// Whether the invite has passed its expiry.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Data required to create a new invite.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateInvite {
    /// The project being joined.
    pub project_id: ObjectId,
    /// The member sending the invite.
    pub inviter_id: ObjectId,
    /// The invited user.
    pub invitee_id: ObjectId,
    /// Expiry timestamp.
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!(
            "pending".parse::<InviteStatus>().unwrap(),
            InviteStatus::Pending
        );
        assert_eq!(
            "ACCEPTED".parse::<InviteStatus>().unwrap(),
            InviteStatus::Accepted
        );
        assert!("revoked".parse::<InviteStatus>().is_err());
    }

    #[test]
    fn test_status_display() {
        assert_eq!(InviteStatus::Declined.to_string(), "declined");
    }
}
