//! Notification listing, read marking, and invite response handlers.

use axum::Json;
use axum::extract::{Path, State};

use workroom_core::types::ObjectId;
use workroom_service::notification::InviteResponseInput;

use crate::dto::request::InviteActionRequest;
use crate::dto::response::{MemberResponse, NotificationResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/users/notifications
pub async fn list_notifications(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<serde_json::Value>> {
    let notifications = state.notification_service.list_unread(&auth).await?;
    let notifications: Vec<NotificationResponse> =
        notifications.iter().map(NotificationResponse::from).collect();

    Ok(Json(serde_json::json!({
        "success": true,
        "data": notifications,
    })))
}

/// POST /api/users/notifications/{id}/read
pub async fn mark_notification_read(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(notification_id): Path<String>,
) -> ApiResult<Json<serde_json::Value>> {
    let notification_id = ObjectId::parse_str(&notification_id)?;
    state
        .notification_service
        .mark_read(&auth, notification_id)
        .await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Notification marked as read",
    })))
}

/// POST /api/users/notifications/accept
pub async fn accept_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<InviteActionRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let input = parse_invite_action(&req)?;
    let member = state.notification_service.accept_invite(&auth, input).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Invite accepted",
        "data": MemberResponse::from(&member),
    })))
}

/// POST /api/users/notifications/decline
pub async fn decline_invite(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<InviteActionRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let input = parse_invite_action(&req)?;
    state.notification_service.decline_invite(&auth, input).await?;

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Invite declined",
    })))
}

fn parse_invite_action(
    req: &InviteActionRequest,
) -> Result<InviteResponseInput, workroom_core::error::AppError> {
    Ok(InviteResponseInput {
        notification_id: ObjectId::parse_str(&req.notification_id)?,
        invite_id: ObjectId::parse_str(&req.invite_id)?,
        project_id: ObjectId::parse_str(&req.project_id)?,
        inviter_id: ObjectId::parse_str(&req.inviter_id)?,
    })
}
