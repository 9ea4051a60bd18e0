//! Response DTOs.
//!
//! Wire field names are camelCase, timestamps are RFC 3339 with
//! millisecond precision and a `Z` suffix, and `None` fields are omitted
//! rather than sent as `null`. Nested relations are projected into
//! minimal public shapes; share-link tokens never leave the server.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use workroom_entity::file::{
    File, FileAccessGrant, FileCategory, FileShareLink, FileStatus, FileVisibility,
};
use workroom_entity::folder::Folder;
use workroom_entity::notification::{Notification, NotificationKind};
use workroom_entity::project::{Project, ProjectMember};
use workroom_entity::user::User;
use workroom_service::file::{DeliveredFile, FileDetail};
use workroom_service::folder::FolderDetail;

/// Formats a timestamp for the wire.
pub fn wire_time(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Minimal public projection of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User id.
    pub id: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Full projection of the caller's own user record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    /// User id.
    pub id: String,
    /// Identity-provider subject.
    pub external_id: String,
    /// Email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Avatar image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// When the user was first seen.
    pub created_at: String,
    /// When the profile was last refreshed.
    pub updated_at: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            external_id: user.external_id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            created_at: wire_time(user.created_at),
            updated_at: wire_time(user.updated_at),
        }
    }
}

/// File projection for listings and version chains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSummary {
    /// File id.
    pub id: String,
    /// Display name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Category.
    pub category: FileCategory,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags, in upload order.
    pub tags: Vec<String>,
    /// Lifecycle status.
    pub status: FileStatus,
    /// Visibility.
    pub visibility: FileVisibility,
    /// Star flag.
    pub starred: bool,
    /// Download counter.
    pub download_count: i32,
    /// Version number within the chain.
    pub version: i32,
    /// Owning project.
    pub project_id: String,
    /// Containing folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Uploading user.
    pub uploader_id: String,
    /// Version-chain predecessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_file_id: Option<String>,
    /// Download URL; absent when presigning failed for this item.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// When the file was uploaded.
    pub created_at: String,
    /// When the record last changed.
    pub updated_at: String,
}

impl FileSummary {
    /// Projects a file without a download URL.
    pub fn from_file(file: &File) -> Self {
        Self {
            id: file.id.to_string(),
            file_name: file.file_name.clone(),
            file_type: file.file_type.clone(),
            file_size: file.file_size,
            category: file.category,
            description: file.description.clone(),
            tags: file.tags.clone(),
            status: file.status,
            visibility: file.visibility,
            starred: file.starred,
            download_count: file.download_count,
            version: file.version,
            project_id: file.project_id.to_string(),
            folder_id: file.folder_id.map(|id| id.to_string()),
            uploader_id: file.uploader_id.to_string(),
            parent_file_id: file.parent_file_id.map(|id| id.to_string()),
            url: None,
            created_at: wire_time(file.created_at),
            updated_at: wire_time(file.updated_at),
        }
    }

    /// Projects a listed file together with its best-effort URL.
    pub fn from_delivered(delivered: &DeliveredFile) -> Self {
        let mut summary = Self::from_file(&delivered.file);
        summary.url = delivered.url.clone();
        summary
    }
}

/// Full file detail with projected relations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    /// File id.
    pub id: String,
    /// Display name.
    pub file_name: String,
    /// MIME type.
    pub file_type: String,
    /// Size in bytes.
    pub file_size: i64,
    /// Category.
    pub category: FileCategory,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Tags, in upload order.
    pub tags: Vec<String>,
    /// Lifecycle status.
    pub status: FileStatus,
    /// Visibility.
    pub visibility: FileVisibility,
    /// Star flag.
    pub starred: bool,
    /// Download counter.
    pub download_count: i32,
    /// Version number within the chain.
    pub version: i32,
    /// Owning project.
    pub project_id: String,
    /// Containing folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,
    /// Uploading user.
    pub uploader_id: String,
    /// Version-chain predecessor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_file_id: Option<String>,
    /// Download URL (presigned or raw key, per visibility).
    pub url: String,
    /// Uploading user's public profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploader: Option<UserSummary>,
    /// Containing folder summary.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<FolderSummary>,
    /// Version-chain predecessor record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_file: Option<FileSummary>,
    /// Later versions in the chain.
    pub versions: Vec<FileSummary>,
    /// Explicit per-user grants.
    pub access_grants: Vec<GrantEntry>,
    /// Share links, without tokens.
    pub share_links: Vec<ShareLinkEntry>,
    /// When the file was uploaded.
    pub created_at: String,
    /// When the record last changed.
    pub updated_at: String,
}

impl From<&FileDetail> for FileResponse {
    fn from(detail: &FileDetail) -> Self {
        let file = &detail.file;
        Self {
            id: file.id.to_string(),
            file_name: file.file_name.clone(),
            file_type: file.file_type.clone(),
            file_size: file.file_size,
            category: file.category,
            description: file.description.clone(),
            tags: file.tags.clone(),
            status: file.status,
            visibility: file.visibility,
            starred: file.starred,
            download_count: file.download_count,
            version: file.version,
            project_id: file.project_id.to_string(),
            folder_id: file.folder_id.map(|id| id.to_string()),
            uploader_id: file.uploader_id.to_string(),
            parent_file_id: file.parent_file_id.map(|id| id.to_string()),
            url: detail.url.clone(),
            uploader: detail.uploader.as_ref().map(UserSummary::from),
            folder: detail.folder.as_ref().map(FolderSummary::from),
            parent_file: detail.parent_file.as_ref().map(FileSummary::from_file),
            versions: detail.versions.iter().map(FileSummary::from_file).collect(),
            access_grants: detail.grants.iter().map(GrantEntry::from).collect(),
            share_links: detail.share_links.iter().map(ShareLinkEntry::from).collect(),
            created_at: wire_time(file.created_at),
            updated_at: wire_time(file.updated_at),
        }
    }
}

/// Public projection of an explicit file-access grant.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrantEntry {
    /// Grant id.
    pub id: String,
    /// The user holding access.
    pub user_id: String,
    /// Granted permission label.
    pub permission: String,
    /// When the grant was issued.
    pub granted_at: String,
}

impl From<&FileAccessGrant> for GrantEntry {
    fn from(grant: &FileAccessGrant) -> Self {
        Self {
            id: grant.id.to_string(),
            user_id: grant.user_id.to_string(),
            permission: grant.permission.clone(),
            granted_at: wire_time(grant.granted_at),
        }
    }
}

/// Public projection of a share link. The token stays server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLinkEntry {
    /// Link id.
    pub id: String,
    /// Permission the link conveys.
    pub permission: String,
    /// Expiry, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
    /// When the link was created.
    pub created_at: String,
}

impl From<&FileShareLink> for ShareLinkEntry {
    fn from(link: &FileShareLink) -> Self {
        Self {
            id: link.id.to_string(),
            permission: link.permission.clone(),
            expires_at: link.expires_at.map(wire_time),
            created_at: wire_time(link.created_at),
        }
    }
}

/// Folder projection for listings and nesting.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderSummary {
    /// Folder id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning project.
    pub project_id: String,
    /// Parent folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Open key-value metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Creating user.
    pub created_by: String,
    /// When the folder was created.
    pub created_at: String,
    /// When the folder last changed.
    pub updated_at: String,
}

impl From<&Folder> for FolderSummary {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            project_id: folder.project_id.to_string(),
            parent_folder_id: folder.parent_folder_id.map(|id| id.to_string()),
            description: folder.description.clone(),
            color: folder.color.clone(),
            metadata: folder.metadata.clone(),
            created_by: folder.created_by.to_string(),
            created_at: wire_time(folder.created_at),
            updated_at: wire_time(folder.updated_at),
        }
    }
}

/// Project context embedded in a folder detail.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectContext {
    /// Project id.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Creating user.
    pub creator_id: String,
    /// Ids of the project's members.
    pub member_ids: Vec<String>,
    /// The creator's public profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<UserSummary>,
}

/// Full folder detail with project context and contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FolderResponse {
    /// Folder id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning project.
    pub project_id: String,
    /// Parent folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_folder_id: Option<String>,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Open key-value metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    /// Creating user.
    pub created_by: String,
    /// The owning project with membership context.
    pub project: ProjectContext,
    /// Files in the folder with best-effort URLs.
    pub files: Vec<FileSummary>,
    /// Direct subfolders.
    pub subfolders: Vec<FolderSummary>,
    /// When the folder was created.
    pub created_at: String,
    /// When the folder last changed.
    pub updated_at: String,
}

impl From<&FolderDetail> for FolderResponse {
    fn from(detail: &FolderDetail) -> Self {
        let folder = &detail.folder;
        Self {
            id: folder.id.to_string(),
            name: folder.name.clone(),
            project_id: folder.project_id.to_string(),
            parent_folder_id: folder.parent_folder_id.map(|id| id.to_string()),
            description: folder.description.clone(),
            color: folder.color.clone(),
            metadata: folder.metadata.clone(),
            created_by: folder.created_by.to_string(),
            project: ProjectContext {
                id: detail.project.id.to_string(),
                name: detail.project.name.clone(),
                creator_id: detail.project.creator_id.to_string(),
                member_ids: detail.member_ids.iter().map(|id| id.to_string()).collect(),
                creator: detail.creator.as_ref().map(UserSummary::from),
            },
            files: detail.files.iter().map(FileSummary::from_delivered).collect(),
            subfolders: detail.subfolders.iter().map(FolderSummary::from).collect(),
            created_at: wire_time(folder.created_at),
            updated_at: wire_time(folder.updated_at),
        }
    }
}

/// Public projection of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectResponse {
    /// Project id.
    pub id: String,
    /// Project name.
    pub name: String,
    /// Description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creating user.
    pub creator_id: String,
    /// Visibility label.
    pub visibility: String,
    /// Project type label.
    pub project_type: String,
    /// Planned start date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    /// Planned due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    /// Tags.
    pub tags: Vec<String>,
    /// Display color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// When the project was created.
    pub created_at: String,
    /// When the project last changed.
    pub updated_at: String,
}

impl From<&Project> for ProjectResponse {
    fn from(project: &Project) -> Self {
        Self {
            id: project.id.to_string(),
            name: project.name.clone(),
            description: project.description.clone(),
            creator_id: project.creator_id.to_string(),
            visibility: project.visibility.clone(),
            project_type: project.project_type.clone(),
            start_date: project.start_date,
            due_date: project.due_date,
            tags: project.tags.clone(),
            color: project.color.clone(),
            created_at: wire_time(project.created_at),
            updated_at: wire_time(project.updated_at),
        }
    }
}

/// Public projection of a project membership.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    /// Membership id.
    pub id: String,
    /// The project.
    pub project_id: String,
    /// The member.
    pub user_id: String,
    /// Membership role.
    pub role: String,
    /// Granted permissions.
    pub permissions: Vec<String>,
    /// When the user joined.
    pub joined_at: String,
}

impl From<&ProjectMember> for MemberResponse {
    fn from(member: &ProjectMember) -> Self {
        Self {
            id: member.id.to_string(),
            project_id: member.project_id.to_string(),
            user_id: member.user_id.to_string(),
            role: member.role.clone(),
            permissions: member.permissions.clone(),
            joined_at: wire_time(member.joined_at),
        }
    }
}

/// Public projection of a notification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    /// Notification id.
    pub id: String,
    /// What the notification is about.
    pub kind: NotificationKind,
    /// Human-readable message.
    pub message: String,
    /// Whether the recipient has read it.
    pub read: bool,
    /// Linked invite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invite_id: Option<String>,
    /// Linked project.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
    /// The user who triggered it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    /// When the notification was created.
    pub created_at: String,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            kind: notification.kind,
            message: notification.message.clone(),
            read: notification.read,
            invite_id: notification.invite_id.map(|id| id.to_string()),
            project_id: notification.project_id.map(|id| id.to_string()),
            sender_id: notification.sender_id.map(|id| id.to_string()),
            created_at: wire_time(notification.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use workroom_core::types::ObjectId;

    use super::*;

    fn sample_file() -> File {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        File {
            id: ObjectId::new(),
            file_name: "mock.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            file_size: 2048,
            storage_key: "projects/p/1-mock.pdf".to_string(),
            project_id: ObjectId::new(),
            folder_id: None,
            category: FileCategory::Design,
            description: None,
            tags: vec!["a".to_string(), "b".to_string()],
            uploader_id: ObjectId::new(),
            status: FileStatus::Active,
            visibility: FileVisibility::ProjectMembers,
            starred: false,
            download_count: 0,
            parent_file_id: None,
            version: 1,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_wire_time_has_millis_and_z() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        assert_eq!(wire_time(ts), "2024-01-15T10:30:00.000Z");
    }

    #[test]
    fn test_none_fields_are_absent_not_null() {
        let summary = FileSummary::from_file(&sample_file());
        let value = serde_json::to_value(&summary).unwrap();
        let object = value.as_object().unwrap();
        assert!(!object.contains_key("url"));
        assert!(!object.contains_key("description"));
        assert!(!object.contains_key("folderId"));
    }

    #[test]
    fn test_category_and_visibility_serialize_uppercase() {
        let summary = FileSummary::from_file(&sample_file());
        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["category"], "DESIGN");
        assert_eq!(value["visibility"], "PROJECT_MEMBERS");
        assert_eq!(value["tags"], serde_json::json!(["a", "b"]));
    }

    #[test]
    fn test_share_link_token_never_serialized() {
        let link = FileShareLink {
            id: ObjectId::new(),
            file_id: ObjectId::new(),
            token: "secret-token".to_string(),
            permission: "VIEW".to_string(),
            expires_at: None,
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(ShareLinkEntry::from(&link)).unwrap();
        let rendered = value.to_string();
        assert!(!rendered.contains("secret-token"));
        assert!(!value.as_object().unwrap().contains_key("token"));
    }
}
