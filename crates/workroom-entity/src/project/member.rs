//! Project membership entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

/// A user's membership in a project.
///
/// Row existence is what grants baseline membership; the role and
/// permission set refine what the member may do.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProjectMember {
    /// Unique membership identifier.
    pub id: ObjectId,
    /// The project.
    pub project_id: ObjectId,
    /// The member.
    pub user_id: ObjectId,
    /// Membership role.
    pub role: String,
    /// Granted permissions.
    pub permissions: Vec<String>,
    /// When the user joined.
    pub joined_at: DateTime<Utc>,
}

impl ProjectMember {
    /// Role assigned to the project creator.
    pub const ROLE_OWNER: &'static str = "OWNER";
    /// Role assigned to invited members.
    pub const ROLE_MEMBER: &'static str = "MEMBER";

    /// Default permission set for the owner role.
    pub fn owner_permissions() -> Vec<String> {
        ["READ", "WRITE", "DELETE", "SHARE"]
            .iter()
            .map(|p| p.to_string())
            .collect()
    }

    /// Default permission set for invited members.
    pub fn member_permissions() -> Vec<String> {
        ["READ", "WRITE"].iter().map(|p| p.to_string()).collect()
    }
}
