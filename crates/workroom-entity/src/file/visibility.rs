//! File visibility enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who may access a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_visibility", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileVisibility {
    /// Anyone may access, no membership required.
    Public,
    /// Restricted to the uploader (plus explicit grants).
    Private,
    /// Any member of the owning project.
    ProjectMembers,
    /// Individually granted users.
    SpecificUsers,
}

impl FileVisibility {
    /// Whether download URLs for this visibility must be presigned.
    ///
    /// Only the restrictive levels pay the signing cost; `PUBLIC` and
    /// `PROJECT_MEMBERS` hand out the raw stored reference.
    pub fn requires_presigned_url(&self) -> bool {
        matches!(self, Self::Private | Self::SpecificUsers)
    }

    /// Return the visibility as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "PUBLIC",
            Self::Private => "PRIVATE",
            Self::ProjectMembers => "PROJECT_MEMBERS",
            Self::SpecificUsers => "SPECIFIC_USERS",
        }
    }
}

impl fmt::Display for FileVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FileVisibility {
    type Err = workroom_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "PUBLIC" => Ok(Self::Public),
            "PRIVATE" => Ok(Self::Private),
            "PROJECT_MEMBERS" => Ok(Self::ProjectMembers),
            "SPECIFIC_USERS" => Ok(Self::SpecificUsers),
            _ => Err(workroom_core::AppError::validation(format!(
                "Invalid visibility: '{s}'. Expected one of: PUBLIC, PRIVATE, PROJECT_MEMBERS, SPECIFIC_USERS"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presign_split() {
        assert!(!FileVisibility::Public.requires_presigned_url());
        assert!(!FileVisibility::ProjectMembers.requires_presigned_url());
        assert!(FileVisibility::Private.requires_presigned_url());
        assert!(FileVisibility::SpecificUsers.requires_presigned_url());
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "PROJECT_MEMBERS".parse::<FileVisibility>().unwrap(),
            FileVisibility::ProjectMembers
        );
        assert_eq!(
            "private".parse::<FileVisibility>().unwrap(),
            FileVisibility::Private
        );
        assert!("FRIENDS".parse::<FileVisibility>().is_err());
    }

    #[test]
    fn test_wire_form() {
        let json = serde_json::to_string(&FileVisibility::SpecificUsers).unwrap();
        assert_eq!(json, "\"SPECIFIC_USERS\"");
    }
}
