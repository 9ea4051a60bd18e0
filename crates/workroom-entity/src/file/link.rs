//! Shareable file link.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

/// A tokenized share link for a file.
///
/// Links are listed alongside file detail; the token itself never leaves
/// the server through that surface.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FileShareLink {
    /// Unique link identifier.
    pub id: ObjectId,
    /// The shared file.
    pub file_id: ObjectId,
    /// Opaque link token.
    #[serde(skip_serializing)]
    pub token: String,
    /// Permission the link conveys.
    pub permission: String,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
}

impl FileShareLink {
    /// Whether the link has passed its expiry.
    pub fn is_expired(&self) -> bool {
        self.expires_at.is_some_and(|at| Utc::now() >= at)
    }
}
