//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

use super::category::FileCategory;
use super::status::FileStatus;
use super::visibility::FileVisibility;

/// A file record in a project.
///
/// The bytes live in the object store under `storage_key`; this row holds
/// everything else.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct File {
    /// Unique file identifier.
    pub id: ObjectId,
    /// Display name (including extension).
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Key of the object in the blob store.
    pub storage_key: String,
    /// Owning project.
    pub project_id: ObjectId,
    /// Containing folder, or `None` at the project root.
    pub folder_id: Option<ObjectId>,
    /// Content category.
    pub category: FileCategory,
    /// Free-form description.
    pub description: Option<String>,
    /// Free-form tags, order preserved.
    pub tags: Vec<String>,
    /// The user who uploaded the file.
    pub uploader_id: ObjectId,
    /// Lifecycle status.
    pub status: FileStatus,
    /// Who may access the file.
    pub visibility: FileVisibility,
    /// Starred flag.
    pub starred: bool,
    /// Download counter.
    pub download_count: i32,
    /// The file this record is a version of.
    pub parent_file_id: Option<ObjectId>,
    /// Version number within the chain.
    pub version: i32,
    /// When the file was uploaded.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Whether this file is still active (not soft-deleted).
    pub fn is_active(&self) -> bool {
        self.status == FileStatus::Active
    }

    /// Get the file extension (lowercase), if any.
    pub fn extension(&self) -> Option<String> {
        self.file_name
            .rsplit('.')
            .next()
            .filter(|ext| *ext != self.file_name)
            .map(|ext| ext.to_lowercase())
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFile {
    /// Display name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// File size in bytes.
    pub file_size: i64,
    /// Key of the object in the blob store.
    pub storage_key: String,
    /// Owning project.
    pub project_id: ObjectId,
    /// Containing folder, or `None` for the project root.
    pub folder_id: Option<ObjectId>,
    /// Content category.
    pub category: FileCategory,
    /// Free-form description.
    pub description: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Uploading user.
    pub uploader_id: ObjectId,
    /// Who may access the file.
    pub visibility: FileVisibility,
}
