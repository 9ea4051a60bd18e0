//! Process-local fixed-window rate counting.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;

use workroom_core::traits::{RateCounter, RateDecision};

/// Map size beyond which an increment also sweeps out expired windows.
const REAP_THRESHOLD: usize = 1024;

/// A single counting window for one key.
#[derive(Debug, Clone, Copy)]
struct WindowSlot {
    window_start_ms: i64,
    window_ms: u64,
    count: u32,
}

impl WindowSlot {
    fn is_expired(&self, now_ms: i64) -> bool {
        now_ms >= self.window_start_ms + self.window_ms as i64
    }
}

/// Fixed-window counter backed by a concurrent map.
///
/// Counting is per key and best-effort; the map entry lock makes each
/// read-modify-write atomic. State is process-local, so limits apply per
/// instance. Expired entries are reaped opportunistically once the map
/// grows past a threshold rather than on a timer.
#[derive(Debug, Default)]
pub struct FixedWindowCounter {
    slots: DashMap<String, WindowSlot>,
}

impl FixedWindowCounter {
    /// Create an empty counter.
    pub fn new() -> Self {
        Self::default()
    }

    fn reap(&self, now_ms: i64) {
        self.slots.retain(|_, slot| !slot.is_expired(now_ms));
    }
}

#[async_trait]
impl RateCounter for FixedWindowCounter {
    async fn increment_and_check(
        &self,
        key: &str,
        window_ms: u64,
        max_in_window: u32,
    ) -> RateDecision {
        let now_ms = Utc::now().timestamp_millis();

        let decision = {
            let mut slot = self.slots.entry(key.to_string()).or_insert(WindowSlot {
                window_start_ms: now_ms,
                window_ms,
                count: 0,
            });

            if slot.is_expired(now_ms) {
                slot.window_start_ms = now_ms;
                slot.window_ms = window_ms;
                slot.count = 0;
            }

            if slot.count >= max_in_window {
                let remaining = slot.window_start_ms + slot.window_ms as i64 - now_ms;
                RateDecision {
                    allowed: false,
                    count: slot.count,
                    retry_after_ms: Some(remaining.max(1) as u64),
                }
            } else {
                slot.count += 1;
                RateDecision {
                    allowed: true,
                    count: slot.count,
                    retry_after_ms: None,
                }
            }
        };

        if self.slots.len() > REAP_THRESHOLD {
            self.reap(now_ms);
        }

        decision
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn test_allows_up_to_max_then_denies() {
        let counter = FixedWindowCounter::new();

        for i in 1..=30 {
            let decision = counter.increment_and_check("u1:p1", 60_000, 30).await;
            assert!(decision.allowed);
            assert_eq!(decision.count, i);
        }

        let denied = counter.increment_and_check("u1:p1", 60_000, 30).await;
        assert!(!denied.allowed);
        let retry = denied.retry_after_ms.unwrap();
        assert!(retry > 0);
        assert!(retry <= 60_000);
    }

    #[tokio::test]
    async fn test_window_elapse_resets_count() {
        let counter = FixedWindowCounter::new();

        for _ in 0..2 {
            counter.increment_and_check("k", 50, 2).await;
        }
        assert!(!counter.increment_and_check("k", 50, 2).await.allowed);

        tokio::time::sleep(Duration::from_millis(60)).await;

        let after = counter.increment_and_check("k", 50, 2).await;
        assert!(after.allowed);
        assert_eq!(after.count, 1);
    }

    #[tokio::test]
    async fn test_keys_count_independently() {
        let counter = FixedWindowCounter::new();

        counter.increment_and_check("a", 60_000, 1).await;
        assert!(!counter.increment_and_check("a", 60_000, 1).await.allowed);
        assert!(counter.increment_and_check("b", 60_000, 1).await.allowed);
    }

    #[tokio::test]
    async fn test_reap_drops_expired_windows() {
        let counter = FixedWindowCounter::new();

        for i in 0..1100 {
            counter.increment_and_check(&format!("k{i}"), 10, 5).await;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;

        counter.increment_and_check("fresh", 10_000, 5).await;
        assert!(counter.slots.len() < 1100);
        assert!(counter.slots.contains_key("fresh"));
    }
}
