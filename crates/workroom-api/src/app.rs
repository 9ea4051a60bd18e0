//! Application builder: wires repositories, services, and middleware into
//! an Axum app and runs the HTTP server.

use std::sync::Arc;

use axum::Router;
use sqlx::PgPool;

use workroom_auth::identity::IdentityResolver;
use workroom_auth::policy::AccessPolicy;
use workroom_auth::token::verifier::TokenVerifier;
use workroom_core::config::AppConfig;
use workroom_core::error::AppError;
use workroom_core::traits::{ObjectStore, RateCounter};
use workroom_database::repositories::{
    FileGrantRepository, FileRepository, FolderRepository, InviteRepository,
    NotificationRepository, ProjectMemberRepository, ProjectRepository, ShareLinkRepository,
    UserRepository,
};
use workroom_service::file::{DeliveryGateway, FileService, UploadService};
use workroom_service::folder::FolderService;
use workroom_service::notification::NotificationService;
use workroom_service::project::ProjectService;
use workroom_service::rate_limit::FixedWindowCounter;
use workroom_service::user::UserService;
use workroom_storage::{MemoryObjectStore, S3ObjectStore};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application for the given state.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Wires every dependency into an [`AppState`].
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    // ── Step 1: Object store ─────────────────────────────────────
    let store: Arc<dyn ObjectStore> = match config.storage.provider.as_str() {
        "memory" => Arc::new(MemoryObjectStore::new()),
        _ => Arc::new(S3ObjectStore::from_config(&config.storage).await?),
    };
    tracing::info!(provider = store.provider_type(), "Object store ready");

    // ── Step 2: Repositories ─────────────────────────────────────
    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let project_repo = Arc::new(ProjectRepository::new(db_pool.clone()));
    let member_repo = Arc::new(ProjectMemberRepository::new(db_pool.clone()));
    let invite_repo = Arc::new(InviteRepository::new(db_pool.clone()));
    let notification_repo = Arc::new(NotificationRepository::new(db_pool.clone()));
    let folder_repo = Arc::new(FolderRepository::new(db_pool.clone()));
    let file_repo = Arc::new(FileRepository::new(db_pool.clone()));
    let grant_repo = Arc::new(FileGrantRepository::new(db_pool.clone()));
    let link_repo = Arc::new(ShareLinkRepository::new(db_pool.clone()));

    // ── Step 3: Auth ─────────────────────────────────────────────
    let token_verifier = Arc::new(TokenVerifier::new(&config.auth));
    let identity_resolver = Arc::new(IdentityResolver::new(Arc::clone(&user_repo)));
    let access_policy = Arc::new(AccessPolicy::new(
        Arc::clone(&member_repo),
        Arc::clone(&grant_repo),
        config.access.strict_specific_users,
    ));

    // ── Step 4: Delivery and rate limiting ───────────────────────
    let delivery = Arc::new(DeliveryGateway::new(Arc::clone(&store), &config.storage));
    let rate_counter: Arc<dyn RateCounter> = Arc::new(FixedWindowCounter::new());

    // ── Step 5: Services ─────────────────────────────────────────
    let file_service = Arc::new(FileService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_repo),
        Arc::clone(&grant_repo),
        Arc::clone(&link_repo),
        Arc::clone(&user_repo),
        Arc::clone(&project_repo),
        Arc::clone(&access_policy),
        Arc::clone(&delivery),
    ));
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&file_repo),
        Arc::clone(&folder_repo),
        Arc::clone(&project_repo),
        Arc::clone(&access_policy),
        Arc::clone(&store),
        config.storage.clone(),
    ));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&folder_repo),
        Arc::clone(&file_repo),
        Arc::clone(&project_repo),
        Arc::clone(&member_repo),
        Arc::clone(&user_repo),
        Arc::clone(&access_policy),
        Arc::clone(&delivery),
        Arc::clone(&rate_counter),
        config.rate_limit.clone(),
    ));
    let project_service = Arc::new(ProjectService::new(
        Arc::clone(&project_repo),
        Arc::clone(&user_repo),
        Arc::clone(&invite_repo),
        Arc::clone(&notification_repo),
    ));
    let notification_service = Arc::new(NotificationService::new(
        Arc::clone(&notification_repo),
        Arc::clone(&invite_repo),
        Arc::clone(&project_repo),
    ));
    let user_service = Arc::new(UserService::new(Arc::clone(&user_repo)));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        store,
        token_verifier,
        identity_resolver,
        access_policy,
        user_repo,
        project_repo,
        member_repo,
        invite_repo,
        notification_repo,
        folder_repo,
        file_repo,
        grant_repo,
        link_repo,
        delivery,
        file_service,
        upload_service,
        folder_service,
        project_service,
        notification_service,
        user_service,
    })
}

/// Runs the Workroom server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    tracing::info!("Starting Workroom server...");

    let host = config.server.host.clone();
    let port = config.server.port;

    let state = build_state(config, db_pool).await?;
    let app = build_app(state);

    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Workroom server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
