//! File detail, listing, upload, download, star, and delete handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use bytes::Bytes;
use chrono::Utc;

use workroom_core::error::AppError;
use workroom_core::types::ObjectId;
use workroom_service::file::UploadParams;

use crate::dto::request::ListScopeQuery;
use crate::dto::response::{FileResponse, FileSummary, FolderSummary, wire_time};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/files/{fileId}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(file_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let file_id = ObjectId::parse_str(&file_id)?;
    let detail = state.file_service.get_file_detail(&auth, file_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "file": FileResponse::from(&detail) },
        "timestamp": wire_time(Utc::now()),
    })))
}

/// GET /api/files/project/{projectId}?folderId=
pub async fn list_project_files(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(project_id): Path<String>,
    Query(query): Query<ListScopeQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let project_id = ObjectId::parse_str(&project_id)?;
    let folder_id = query
        .folder_id
        .as_deref()
        .map(ObjectId::parse_str)
        .transpose()?;

    let listing = state
        .file_service
        .list_project_scope(&auth, project_id, folder_id)
        .await?;

    let files: Vec<FileSummary> = listing.files.iter().map(FileSummary::from_delivered).collect();
    let folders: Vec<FolderSummary> = listing.folders.iter().map(FolderSummary::from).collect();

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "files": files, "folders": folders },
    })))
}

/// POST /api/files/upload (multipart)
pub async fn upload_file(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    let mut data: Option<Bytes> = None;
    let mut content_type: Option<String> = None;
    let mut file_name: Option<String> = None;
    let mut part_file_name: Option<String> = None;
    let mut project_id: Option<ObjectId> = None;
    let mut folder_id: Option<ObjectId> = None;
    let mut category: Option<String> = None;
    let mut description: Option<String> = None;
    let mut tags: Vec<String> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Multipart error: {e}")))?
    {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "file" => {
                content_type = field.content_type().map(String::from);
                part_file_name = field.file_name().map(String::from);
                data = Some(
                    field
                        .bytes()
                        .await
                        .map_err(|e| AppError::validation(format!("Read error: {e}")))?,
                );
            }
            "fileName" => {
                file_name = Some(read_text(field).await?);
            }
            "projectId" => {
                project_id = Some(ObjectId::parse_str(&read_text(field).await?)?);
            }
            "folderId" => {
                folder_id = Some(ObjectId::parse_str(&read_text(field).await?)?);
            }
            "category" => {
                category = Some(read_text(field).await?);
            }
            "description" => {
                description = Some(read_text(field).await?);
            }
            "tags" => {
                let raw = read_text(field).await?;
                tags = serde_json::from_str(&raw)
                    .map_err(|_| AppError::validation("tags must be a JSON array of strings"))?;
            }
            _ => {}
        }
    }

    let data = data.ok_or_else(|| AppError::validation("file is required"))?;
    // The explicit fileName field wins; the part's own filename is the fallback.
    let file_name = file_name
        .or(part_file_name)
        .ok_or_else(|| AppError::validation("fileName is required"))?;
    let project_id = project_id.ok_or_else(|| AppError::validation("projectId is required"))?;

    let file = state
        .upload_service
        .upload(
            &auth,
            UploadParams {
                file_name,
                content_type,
                data,
                project_id,
                folder_id,
                category,
                description,
                tags,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "data": FileSummary::from_file(&file),
        })),
    ))
}

/// POST /api/files/{fileId}/download
pub async fn download_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(file_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let file_id = ObjectId::parse_str(&file_id)?;
    let (url, download_count) = state.file_service.download(&auth, file_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": { "url": url, "downloadCount": download_count },
    })))
}

/// POST /api/files/{fileId}/star
pub async fn toggle_star(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(file_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let file_id = ObjectId::parse_str(&file_id)?;
    let file = state.file_service.toggle_star(&auth, file_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "data": FileSummary::from_file(&file),
    })))
}

/// DELETE /api/files/{fileId}
pub async fn delete_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(file_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let file_id = ObjectId::parse_str(&file_id)?;
    state.file_service.soft_delete(&auth, file_id).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "File deleted successfully",
    })))
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String, AppError> {
    field
        .text()
        .await
        .map_err(|e| AppError::validation(format!("Read error: {e}")))
}
