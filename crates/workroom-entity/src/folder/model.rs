//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

/// A folder inside a project's hierarchy.
///
/// A `None` parent means the folder sits at the project root. A parent,
/// when set, always belongs to the same project.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: ObjectId,
    /// Sanitized display name.
    pub name: String,
    /// Owning project.
    pub project_id: ObjectId,
    /// Parent folder, or `None` at the project root.
    pub parent_folder_id: Option<ObjectId>,
    /// Free-form description.
    pub description: Option<String>,
    /// Display color.
    pub color: Option<String>,
    /// Open key-value metadata (sanitized before storage).
    pub metadata: Option<serde_json::Value>,
    /// The user who created the folder.
    pub created_by: ObjectId,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Sanitized display name.
    pub name: String,
    /// Owning project.
    pub project_id: ObjectId,
    /// Parent folder, or `None` for the project root.
    pub parent_folder_id: Option<ObjectId>,
    /// Free-form description.
    pub description: Option<String>,
    /// Display color.
    pub color: Option<String>,
    /// Sanitized metadata object.
    pub metadata: Option<serde_json::Value>,
    /// Creating user.
    pub created_by: ObjectId,
}
