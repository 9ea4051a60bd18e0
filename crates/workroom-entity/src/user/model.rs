//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use workroom_core::types::ObjectId;

/// A user known to Workroom.
///
/// Accounts live in the external identity provider; this row is the local
/// mirror keyed by the provider's subject identifier and refreshed from
/// token claims on every sync.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: ObjectId,
    /// Identity-provider subject identifier (unique).
    pub external_id: String,
    /// Email address, when the provider supplies one.
    pub email: Option<String>,
    /// Human-readable display name.
    pub name: Option<String>,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// When the user was first seen.
    pub created_at: DateTime<Utc>,
    /// When the profile was last refreshed.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Best human-readable label for this user, for messages and logs.
    pub fn display_label(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.external_id)
    }
}

/// Profile fields applied when syncing a user from token claims.
///
/// Absent claims leave the stored value untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUser {
    /// Identity-provider subject identifier.
    pub external_id: String,
    /// Email address claim.
    pub email: Option<String>,
    /// Display name claim.
    pub name: Option<String>,
    /// Avatar URL claim.
    pub avatar_url: Option<String>,
}
