//! `AuthUser` extractor: pulls the bearer token from the Authorization
//! header, verifies it, and resolves the calling identity to a local user.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use workroom_core::error::AppError;
use workroom_entity::user::User;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user available in handlers.
///
/// Extraction upserts the user row, so any authenticated request doubles
/// as a profile sync.
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl AuthUser {
    /// Returns the resolved user.
    pub fn user(&self) -> &User {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = User;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| AppError::authentication("Missing Authorization header"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::authentication("Invalid Authorization header format"))?;

        let claims = state.token_verifier.verify(token)?;
        let user = state.identity_resolver.resolve(&claims).await?;

        Ok(AuthUser(user))
    }
}
