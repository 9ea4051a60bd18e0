//! Explicit per-user file access grant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

/// An explicit access grant for one user on one file.
///
/// Grants are the last rule the access evaluation falls through to, and
/// the only one that can open a `SPECIFIC_USERS` file to a non-member.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileAccessGrant {
    /// Unique grant identifier.
    pub id: ObjectId,
    /// The file being shared.
    pub file_id: ObjectId,
    /// The user receiving access.
    pub user_id: ObjectId,
    /// Granted permission label (e.g. "VIEW", "EDIT").
    pub permission: String,
    /// When the grant was issued.
    pub granted_at: DateTime<Utc>,
}
