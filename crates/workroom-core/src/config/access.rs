//! Access-rule configuration.

use serde::{Deserialize, Serialize};

/// Tunable behavior of the file access rules.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    /// When enabled, `SPECIFIC_USERS` files are reachable only through an
    /// explicit grant (or uploader ownership); plain project membership no
    /// longer suffices. Off by default, matching the historical behavior.
    #[serde(default)]
    pub strict_specific_users: bool,
}
