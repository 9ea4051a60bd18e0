//! Project listing and creation handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use validator::Validate;

use workroom_core::error::AppError;
use workroom_service::project::CreateProjectInput;

use crate::dto::request::CreateProjectRequest;
use crate::dto::response::ProjectResponse;
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/projects
///
/// Returns a bare array of the caller's projects, not the usual
/// `{success, data}` envelope.
pub async fn list_projects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<ProjectResponse>>> {
    let projects = state.project_service.list_for_user(&auth).await?;
    Ok(Json(projects.iter().map(ProjectResponse::from).collect()))
}

/// POST /api/projects/new
pub async fn create_project(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateProjectRequest>,
) -> ApiResult<(StatusCode, Json<serde_json::Value>)> {
    req.validate().map_err(|e| {
        AppError::validation("Invalid request body").with_details(serde_json::json!(e))
    })?;

    let project = state
        .project_service
        .create(
            &auth,
            CreateProjectInput {
                name: req.name,
                description: req.description,
                member_emails: req.members,
                visibility: req.visibility,
                project_type: req.project_type,
                start_date: req.start_date,
                due_date: req.due_date,
                tags: req.tags,
                color: req.color,
            },
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(serde_json::json!({
            "success": true,
            "project": ProjectResponse::from(&project),
        })),
    ))
}
