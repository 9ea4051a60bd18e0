//! File status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a file record.
///
/// Deletion is soft: the row stays, the status flips, and listings and
/// detail fetches skip `Deleted` records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "file_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FileStatus {
    /// Visible and downloadable.
    Active,
    /// Soft-deleted.
    Deleted,
}

impl FileStatus {
    /// Return the status as its wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Deleted => "DELETED",
        }
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
