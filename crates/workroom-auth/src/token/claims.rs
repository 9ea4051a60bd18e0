//! Claims carried by identity-provider access tokens.

use serde::{Deserialize, Serialize};

/// Claims payload of an IdP-issued access token.
///
/// The subject is the provider's stable identifier for the user; profile
/// fields are optional because providers differ in what they share.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject, the IdP's stable user identifier.
    pub sub: String,
    /// Email address, when the provider shares it.
    pub email: Option<String>,
    /// Display name.
    pub name: Option<String>,
    /// Avatar URL.
    pub picture: Option<String>,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}
