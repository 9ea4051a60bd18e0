//! Identity resolution from verified token claims.

use std::sync::Arc;

use tracing::debug;

use workroom_core::result::AppResult;
use workroom_database::repositories::UserRepository;
use workroom_entity::user::{UpsertUser, User};

use crate::token::Claims;

/// Resolves verified claims to a local user row.
///
/// Users are keyed by the IdP subject (`external_id`). The first request
/// from a new subject creates the row; later requests refresh profile
/// fields without overwriting known values with absent ones.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    /// User repository.
    users: Arc<UserRepository>,
}

impl IdentityResolver {
    /// Creates a new identity resolver.
    pub fn new(users: Arc<UserRepository>) -> Self {
        Self { users }
    }

    /// Upsert the user behind the given claims and return the row.
    pub async fn resolve(&self, claims: &Claims) -> AppResult<User> {
        let data = UpsertUser {
            external_id: claims.sub.clone(),
            email: claims.email.clone(),
            name: claims.name.clone(),
            avatar_url: claims.picture.clone(),
        };

        let user = self.users.upsert_by_external_id(&data).await?;
        debug!(user_id = %user.id, external_id = %user.external_id, "Resolved identity");
        Ok(user)
    }
}
