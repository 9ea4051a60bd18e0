//! Folder detail and creation handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::Utc;
use validator::Validate;

use workroom_core::error::AppError;
use workroom_core::types::ObjectId;
use workroom_service::folder::CreateFolderInput;

use crate::dto::request::CreateFolderRequest;
use crate::dto::response::{FolderResponse, FolderSummary, wire_time};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/folders/{folderId}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(folder_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let folder_id = ObjectId::parse_str(&folder_id)?;
    let detail = state
        .folder_service
        .get_folder_detail(&auth, folder_id)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": FolderResponse::from(&detail),
        "timestamp": wire_time(Utc::now()),
    })))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate().map_err(|e| {
        AppError::validation("Invalid request body").with_details(serde_json::json!(e))
    })?;

    let project_id = ObjectId::parse_str(&req.project_id)?;
    let parent_folder_id = req
        .parent_folder_id
        .as_deref()
        .map(ObjectId::parse_str)
        .transpose()?;

    let folder = state
        .folder_service
        .create(
            &auth,
            CreateFolderInput {
                name: req.name,
                project_id,
                parent_folder_id,
                description: req.description,
                color: req.color,
                metadata: req.metadata,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "message": "Folder created successfully",
            "data": FolderSummary::from(&folder),
            "timestamp": wire_time(Utc::now()),
        })),
    ))
}
