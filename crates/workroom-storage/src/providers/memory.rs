//! In-memory object store for tests and local development.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use workroom_core::error::AppError;
use workroom_core::result::AppResult;
use workroom_core::traits::ObjectStore;

/// Object store backed by a concurrent in-process map.
///
/// `presign_get` fabricates a `memory://` URL carrying the requested TTL,
/// which is enough for callers that only pass the URL through. A write
/// kill-switch lets callers exercise the failure path without a real
/// backend misbehaving on cue.
#[derive(Debug, Default)]
pub struct MemoryObjectStore {
    objects: DashMap<String, Bytes>,
    fail_writes: AtomicBool,
}

impl MemoryObjectStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle whether subsequent writes fail.
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the store holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Whether an object exists at the given key.
    pub fn contains(&self, key: &str) -> bool {
        self.objects.contains_key(key)
    }

    /// Fetch a stored object's bytes.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.objects.get(key).map(|entry| entry.value().clone())
    }
}

#[async_trait]
impl ObjectStore for MemoryObjectStore {
    fn provider_type(&self) -> &str {
        "memory"
    }

    async fn put(&self, key: &str, data: Bytes, _content_type: Option<&str>) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::storage("Object store writes are disabled"));
        }
        self.objects.insert(key.to_string(), data);
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.objects.remove(key);
        Ok(())
    }

    async fn presign_get(&self, key: &str, ttl: Duration) -> AppResult<String> {
        if !self.objects.contains_key(key) {
            return Err(AppError::not_found(format!("Object not found: {key}")));
        }
        Ok(format!("memory://{key}?ttl={}", ttl.as_secs()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_get_delete() {
        let store = MemoryObjectStore::new();
        let data = Bytes::from("hello world");

        store
            .put("projects/abc/1-file.txt", data.clone(), Some("text/plain"))
            .await
            .unwrap();
        assert!(store.contains("projects/abc/1-file.txt"));
        assert_eq!(store.get("projects/abc/1-file.txt"), Some(data));

        store.delete("projects/abc/1-file.txt").await.unwrap();
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_fail_writes_switch() {
        let store = MemoryObjectStore::new();
        store.fail_writes(true);

        let err = store
            .put("key", Bytes::from("data"), None)
            .await
            .unwrap_err();
        assert_eq!(err.kind, workroom_core::error::ErrorKind::Storage);
        assert!(store.is_empty());

        store.fail_writes(false);
        store.put("key", Bytes::from("data"), None).await.unwrap();
        assert_eq!(store.len(), 1);
    }

    #[tokio::test]
    async fn test_presign_embeds_ttl() {
        let store = MemoryObjectStore::new();
        store.put("key", Bytes::from("data"), None).await.unwrap();

        let url = store
            .presign_get("key", Duration::from_secs(900))
            .await
            .unwrap();
        assert_eq!(url, "memory://key?ttl=900");
    }

    #[tokio::test]
    async fn test_presign_missing_object() {
        let store = MemoryObjectStore::new();
        let err = store
            .presign_get("missing", Duration::from_secs(60))
            .await
            .unwrap_err();
        assert_eq!(err.kind, workroom_core::error::ErrorKind::NotFound);
    }
}
