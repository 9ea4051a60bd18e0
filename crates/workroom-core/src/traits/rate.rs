//! Rate counter trait for pluggable rate-limit state.

use async_trait::async_trait;

/// Outcome of a rate-limit check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateDecision {
    /// Whether the call is allowed.
    pub allowed: bool,
    /// The count recorded for the key within the current window.
    pub count: u32,
    /// Remaining window time in milliseconds when the call was denied.
    pub retry_after_ms: Option<u64>,
}

/// Trait for counting calls against a fixed window.
///
/// The default implementation is process-local and best-effort; a shared
/// store can be substituted without touching the call sites.
#[async_trait]
pub trait RateCounter: Send + Sync + std::fmt::Debug + 'static {
    /// Record one call for `key` and decide whether it fits the window.
    ///
    /// The first call after a window has elapsed starts a fresh window with
    /// a count of one. Denied calls report the remaining window time.
    async fn increment_and_check(
        &self,
        key: &str,
        window_ms: u64,
        max_in_window: u32,
    ) -> RateDecision;
}
