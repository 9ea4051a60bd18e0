//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use workroom_auth::identity::IdentityResolver;
use workroom_auth::policy::AccessPolicy;
use workroom_auth::token::verifier::TokenVerifier;
use workroom_core::config::AppConfig;
use workroom_core::traits::ObjectStore;

use workroom_database::repositories::{
    FileGrantRepository, FileRepository, FolderRepository, InviteRepository,
    NotificationRepository, ProjectMemberRepository, ProjectRepository, ShareLinkRepository,
    UserRepository,
};

use workroom_service::file::{DeliveryGateway, FileService, UploadService};
use workroom_service::folder::FolderService;
use workroom_service::notification::NotificationService;
use workroom_service::project::ProjectService;
use workroom_service::user::UserService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// PostgreSQL connection pool
    pub db_pool: PgPool,
    /// Object store backing uploads and downloads
    pub store: Arc<dyn ObjectStore>,

    // ── Auth ─────────────────────────────────────────────────
    /// Bearer token verifier
    pub token_verifier: Arc<TokenVerifier>,
    /// Token claims to local user resolution
    pub identity_resolver: Arc<IdentityResolver>,
    /// File and folder access policy
    pub access_policy: Arc<AccessPolicy>,

    // ── Repositories ─────────────────────────────────────────
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Project repository
    pub project_repo: Arc<ProjectRepository>,
    /// Project member repository
    pub member_repo: Arc<ProjectMemberRepository>,
    /// Invite repository
    pub invite_repo: Arc<InviteRepository>,
    /// Notification repository
    pub notification_repo: Arc<NotificationRepository>,
    /// Folder repository
    pub folder_repo: Arc<FolderRepository>,
    /// File repository
    pub file_repo: Arc<FileRepository>,
    /// File access grant repository
    pub grant_repo: Arc<FileGrantRepository>,
    /// Share link repository
    pub link_repo: Arc<ShareLinkRepository>,

    // ── Services ─────────────────────────────────────────────
    /// Download URL production
    pub delivery: Arc<DeliveryGateway>,
    /// File read and mutation service
    pub file_service: Arc<FileService>,
    /// Upload ingestion service
    pub upload_service: Arc<UploadService>,
    /// Folder service
    pub folder_service: Arc<FolderService>,
    /// Project service
    pub project_service: Arc<ProjectService>,
    /// Notification service
    pub notification_service: Arc<NotificationService>,
    /// User service
    pub user_service: Arc<UserService>,
}
