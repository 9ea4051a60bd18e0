//! Route definitions for the Workroom HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let max_upload = state.config.storage.max_upload_size_bytes as usize;

    let api_routes = Router::new()
        .merge(file_routes())
        .merge(folder_routes())
        .merge(project_routes())
        .merge(user_routes())
        .merge(notification_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_upload))
        .layer(middleware::compression::build_compression_layer())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// File detail, listing, upload, download, star, delete
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files/upload", post(handlers::file::upload_file))
        .route(
            "/files/project/{projectId}",
            get(handlers::file::list_project_files),
        )
        .route("/files/{fileId}", get(handlers::file::get_file))
        .route("/files/{fileId}", delete(handlers::file::delete_file))
        .route(
            "/files/{fileId}/download",
            post(handlers::file::download_file),
        )
        .route("/files/{fileId}/star", post(handlers::file::toggle_star))
}

/// Folder detail and creation
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", post(handlers::folder::create_folder))
        .route("/folders/{folderId}", get(handlers::folder::get_folder))
}

/// Project listing and creation
fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(handlers::project::list_projects))
        .route("/projects/new", post(handlers::project::create_project))
}

/// Identity sync and user search
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/sync-user", post(handlers::user::sync_user))
        .route("/users/search", get(handlers::user::search_users))
}

/// Notification listing and invite responses
fn notification_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/notifications",
            get(handlers::notification::list_notifications),
        )
        .route(
            "/users/notifications/{id}/read",
            post(handlers::notification::mark_notification_read),
        )
        .route(
            "/users/notifications/accept",
            post(handlers::notification::accept_invite),
        )
        .route(
            "/users/notifications/decline",
            post(handlers::notification::decline_invite),
        )
}

/// Liveness probe
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
