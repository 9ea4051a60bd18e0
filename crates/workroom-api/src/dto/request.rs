//! Request DTOs with validation.
//!
//! Wire field names are camelCase. Identifier fields arrive as strings and
//! are parsed into [`ObjectId`] at the handler boundary so malformed ids
//! become validation errors before any store access.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Create folder request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolderRequest {
    /// Owning project id.
    pub project_id: String,
    /// Folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder id, for nested folders.
    pub parent_folder_id: Option<String>,
    /// Description.
    pub description: Option<String>,
    /// Display color.
    pub color: Option<String>,
    /// Open key-value metadata.
    pub metadata: Option<serde_json::Value>,
}

/// Create project request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRequest {
    /// Project name.
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    /// Description.
    pub description: Option<String>,
    /// Member emails to invite.
    #[serde(default)]
    pub members: Vec<String>,
    /// Visibility label.
    pub visibility: String,
    /// Project type label.
    pub project_type: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned due date.
    pub due_date: Option<NaiveDate>,
    /// Tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Display color.
    pub color: Option<String>,
}

/// Invite accept/decline request body. All four ids are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteActionRequest {
    /// The invite notification being acted on.
    pub notification_id: String,
    /// The invite itself.
    pub invite_id: String,
    /// The project the invite is for.
    pub project_id: String,
    /// The member who sent the invite.
    pub inviter_id: String,
}

/// Query parameters for the project scope listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListScopeQuery {
    /// Folder to list; absent means the project root.
    pub folder_id: Option<String>,
}

/// Query parameters for user search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Email substring to match.
    pub q: Option<String>,
    /// Maximum results to return.
    pub limit: Option<i64>,
}
