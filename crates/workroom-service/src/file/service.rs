//! File detail aggregation, scope listing, and file mutations.

use std::sync::Arc;

use futures::future;
use tracing::info;

use workroom_auth::policy::AccessPolicy;
use workroom_core::error::AppError;
use workroom_core::result::AppResult;
use workroom_core::types::ObjectId;
use workroom_database::repositories::{
    FileGrantRepository, FileRepository, FolderRepository, ProjectRepository, ShareLinkRepository,
    UserRepository,
};
use workroom_entity::file::{File, FileAccessGrant, FileShareLink, FileStatus, FileVisibility};
use workroom_entity::folder::Folder;
use workroom_entity::user::User;

use super::delivery::DeliveryGateway;

/// A file together with everything the detail endpoint returns.
#[derive(Debug, Clone)]
pub struct FileDetail {
    /// The file record itself.
    pub file: File,
    /// Download URL (presigned or raw key, per visibility).
    pub url: String,
    /// The uploading user, when the row still exists.
    pub uploader: Option<User>,
    /// The containing folder, for non-root files.
    pub folder: Option<Folder>,
    /// The version-chain predecessor.
    pub parent_file: Option<File>,
    /// Later versions in the chain, ascending by version.
    pub versions: Vec<File>,
    /// Explicit per-user grants on the file.
    pub grants: Vec<FileAccessGrant>,
    /// Share links attached to the file.
    pub share_links: Vec<FileShareLink>,
}

/// A listed file with its best-effort download URL.
#[derive(Debug, Clone)]
pub struct DeliveredFile {
    /// The file record.
    pub file: File,
    /// Download URL; `None` when presigning failed for this item.
    pub url: Option<String>,
}

/// Files and folders within one project scope (root or a single folder).
#[derive(Debug, Clone)]
pub struct ScopeListing {
    /// Active files in the scope, newest first.
    pub files: Vec<DeliveredFile>,
    /// Direct subfolders of the scope, by name.
    pub folders: Vec<Folder>,
}

/// File read and mutation use cases.
#[derive(Debug, Clone)]
pub struct FileService {
    files: Arc<FileRepository>,
    folders: Arc<FolderRepository>,
    grants: Arc<FileGrantRepository>,
    links: Arc<ShareLinkRepository>,
    users: Arc<UserRepository>,
    projects: Arc<ProjectRepository>,
    policy: Arc<AccessPolicy>,
    delivery: Arc<DeliveryGateway>,
}

impl FileService {
    /// Creates a new file service.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        files: Arc<FileRepository>,
        folders: Arc<FolderRepository>,
        grants: Arc<FileGrantRepository>,
        links: Arc<ShareLinkRepository>,
        users: Arc<UserRepository>,
        projects: Arc<ProjectRepository>,
        policy: Arc<AccessPolicy>,
        delivery: Arc<DeliveryGateway>,
    ) -> Self {
        Self {
            files,
            folders,
            grants,
            links,
            users,
            projects,
            policy,
            delivery,
        }
    }

    /// Gets a file with its relations and download URL.
    pub async fn get_file_detail(&self, user: &User, file_id: ObjectId) -> AppResult<FileDetail> {
        let file = self.load_accessible(user, file_id).await?;

        let url = self.delivery.detail_url(&file).await?;
        let uploader = self.users.find_by_id(file.uploader_id).await?;
        let folder = match file.folder_id {
            Some(folder_id) => self.folders.find_by_id(folder_id).await?,
            None => None,
        };
        let parent_file = match file.parent_file_id {
            Some(parent_id) => self.files.find_by_id(parent_id).await?,
            None => None,
        };

        let chain_root = file.parent_file_id.unwrap_or(file.id);
        let versions = self.files.find_versions(chain_root).await?;
        let grants = self.grants.list_for_file(file.id).await?;
        let share_links = self.links.list_for_file(file.id).await?;

        Ok(FileDetail {
            file,
            url,
            uploader,
            folder,
            parent_file,
            versions,
            grants,
            share_links,
        })
    }

    /// Lists active files and direct subfolders in a project scope.
    ///
    /// `folder_id` of `None` means the project root. The requester must be
    /// the project creator or a member.
    pub async fn list_project_scope(
        &self,
        user: &User,
        project_id: ObjectId,
        folder_id: Option<ObjectId>,
    ) -> AppResult<ScopeListing> {
        let project = self
            .projects
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::not_found("Project not found"))?;

        if !self.policy.folder_access(user.id, &project).await? {
            return Err(AppError::authorization(
                "You are not a member of this project",
            ));
        }

        let mut files = self.files.list_in_scope(project_id, folder_id).await?;
        let folders = self.folders.list_children(project_id, folder_id).await?;

        // In strict mode a SPECIFIC_USERS file is listed only when the
        // requester clears the per-file rules.
        if self.policy.strict_specific_users() {
            let mut kept = Vec::with_capacity(files.len());
            for file in files {
                if file.visibility == FileVisibility::SpecificUsers
                    && self.policy.file_access(user.id, &file).await?.is_none()
                {
                    continue;
                }
                kept.push(file);
            }
            files = kept;
        }

        let urls =
            future::join_all(files.iter().map(|file| self.delivery.listing_url(file))).await;
        let files = files
            .into_iter()
            .zip(urls)
            .map(|(file, url)| DeliveredFile { file, url })
            .collect();

        Ok(ScopeListing { files, folders })
    }

    /// Toggles the star flag on a file.
    pub async fn toggle_star(&self, user: &User, file_id: ObjectId) -> AppResult<File> {
        let file = self.load_accessible(user, file_id).await?;
        let updated = self.files.set_starred(file.id, !file.starred).await?;

        info!(
            user_id = %user.id,
            file_id = %file.id,
            starred = updated.starred,
            "File star toggled"
        );
        Ok(updated)
    }

    /// Produces a download URL and bumps the download counter.
    pub async fn download(&self, user: &User, file_id: ObjectId) -> AppResult<(String, i32)> {
        let file = self.load_accessible(user, file_id).await?;
        let url = self.delivery.detail_url(&file).await?;
        let updated = self.files.increment_download_count(file.id).await?;

        info!(
            user_id = %user.id,
            file_id = %file.id,
            count = updated.download_count,
            "File download recorded"
        );
        Ok((url, updated.download_count))
    }

    /// Soft-deletes a file. Allowed for the uploader or the project creator.
    pub async fn soft_delete(&self, user: &User, file_id: ObjectId) -> AppResult<()> {
        let file = self
            .files
            .find_by_id(file_id)
            .await?
            .filter(File::is_active)
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if file.uploader_id != user.id {
            let project = self
                .projects
                .find_by_id(file.project_id)
                .await?
                .ok_or_else(|| AppError::not_found("Project not found"))?;
            if !project.is_creator(user.id) {
                return Err(AppError::authorization(
                    "Only the uploader or the project creator can delete this file",
                ));
            }
        }

        self.files.set_status(file.id, FileStatus::Deleted).await?;
        info!(user_id = %user.id, file_id = %file.id, "File soft-deleted");
        Ok(())
    }

    /// Fetches an active file and authorizes the requester. Absence is
    /// resolved before authorization, so a missing file is 404 even for
    /// strangers.
    async fn load_accessible(&self, user: &User, file_id: ObjectId) -> AppResult<File> {
        let file = self
            .files
            .find_by_id(file_id)
            .await?
            .filter(File::is_active)
            .ok_or_else(|| AppError::not_found("File not found"))?;

        if self.policy.file_access(user.id, &file).await?.is_none() {
            return Err(AppError::authorization(
                "You do not have access to this file",
            ));
        }
        Ok(file)
    }
}
