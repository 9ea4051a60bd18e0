//! Rate limiting configuration.

use serde::{Deserialize, Serialize};

/// Fixed-window rate limiting for folder creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Window length in milliseconds.
    #[serde(default = "default_window_ms")]
    pub window_ms: u64,
    /// Maximum folder creations per user/project pair within one window.
    #[serde(default = "default_max_folder_creations")]
    pub max_folder_creations: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_ms: default_window_ms(),
            max_folder_creations: default_max_folder_creations(),
        }
    }
}

fn default_window_ms() -> u64 {
    60_000
}

fn default_max_folder_creations() -> u32 {
    30
}
