//! Token verification configuration.

use serde::{Deserialize, Serialize};

/// Identity-provider token verification configuration.
///
/// Workroom does not issue credentials of its own; it verifies bearer
/// tokens signed by the external identity provider with a shared secret.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret for token verification (HMAC-SHA256).
    #[serde(default = "default_token_secret")]
    pub token_secret: String,
    /// Expected token issuer. When unset, the issuer claim is not checked.
    #[serde(default)]
    pub issuer: Option<String>,
}

fn default_token_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}
