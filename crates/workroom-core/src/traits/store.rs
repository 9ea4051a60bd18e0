//! Object store trait for pluggable blob backends.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Trait for the object store holding file bytes.
///
/// The database only ever records the storage key; bytes flow through an
/// implementation of this trait. The [`ObjectStore`] trait is defined here
/// in `workroom-core` and implemented in `workroom-storage`.
#[async_trait]
pub trait ObjectStore: Send + Sync + std::fmt::Debug + 'static {
    /// Return the provider type name (e.g., "s3", "memory").
    fn provider_type(&self) -> &str;

    /// Write an object at the given key.
    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()>;

    /// Delete the object at the given key.
    async fn delete(&self, key: &str) -> AppResult<()>;

    /// Produce a time-limited download URL for the object at the given key.
    async fn presign_get(&self, key: &str, ttl: Duration) -> AppResult<String>;
}
