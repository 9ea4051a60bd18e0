//! Project entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

/// A collaborative project grouping folders, files, and members.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Project {
    /// Unique project identifier.
    pub id: ObjectId,
    /// Project name, unique per creator (case-insensitive).
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// The user who created the project.
    pub creator_id: ObjectId,
    /// Project-level visibility label.
    pub visibility: String,
    /// Project type label (e.g. "DESIGN", "GENERAL").
    pub project_type: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned due date.
    pub due_date: Option<NaiveDate>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Display color.
    pub color: Option<String>,
    /// When the project was created.
    pub created_at: DateTime<Utc>,
    /// When the project was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Whether the given user created this project.
    pub fn is_creator(&self, user_id: ObjectId) -> bool {
        self.creator_id == user_id
    }
}

/// Data required to create a new project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProject {
    /// Project name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Creating user.
    pub creator_id: ObjectId,
    /// Project-level visibility label.
    pub visibility: String,
    /// Project type label.
    pub project_type: String,
    /// Planned start date.
    pub start_date: Option<NaiveDate>,
    /// Planned due date.
    pub due_date: Option<NaiveDate>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Display color.
    pub color: Option<String>,
}
