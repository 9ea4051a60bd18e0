//! Identity sync and user search handlers.

use axum::Json;
use axum::extract::{Query, State};

use crate::dto::request::SearchQuery;
use crate::dto::response::{UserResponse, UserSummary};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/sync-user
///
/// The upsert already happened inside the auth extractor; this endpoint
/// exists so clients can sync explicitly after sign-in and read back the
/// stored profile.
pub async fn sync_user(auth: AuthUser) -> Json<serde_json::Value> {
    Json(serde_json::json!({ "user": UserResponse::from(auth.user()) }))
}

/// GET /api/users/search?q=&limit=
pub async fn search_users(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<SearchQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let users = state
        .user_service
        .search(query.q.as_deref(), query.limit)
        .await?;

    let users: Vec<UserSummary> = users.iter().map(UserSummary::from).collect();
    Ok(Json(serde_json::json!({ "success": true, "data": users })))
}
