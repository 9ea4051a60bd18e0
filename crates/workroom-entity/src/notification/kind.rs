//! Notification kind enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "notification_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// A project invite awaiting a response.
    Invite,
    /// A plain message.
    Message,
    /// A status update (e.g. an invite you sent was accepted).
    Update,
}

impl NotificationKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invite => "invite",
            Self::Message => "message",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotificationKind {
    type Err = workroom_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "invite" => Ok(Self::Invite),
            "message" => Ok(Self::Message),
            "update" => Ok(Self::Update),
            _ => Err(workroom_core::AppError::validation(format!(
                "Invalid notification kind: '{s}'. Expected one of: invite, message, update"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "invite".parse::<NotificationKind>().unwrap(),
            NotificationKind::Invite
        );
        assert!("poke".parse::<NotificationKind>().is_err());
    }

    #[test]
    fn test_wire_form() {
        assert_eq!(
            serde_json::to_string(&NotificationKind::Update).unwrap(),
            "\"update\""
        );
    }
}
