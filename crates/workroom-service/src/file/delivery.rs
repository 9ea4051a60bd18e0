//! Download URL production for file records.
//!
//! Only the two most restrictive visibility levels pay the presigning
//! cost: PRIVATE and SPECIFIC_USERS files get a time-limited signed URL,
//! while PUBLIC and PROJECT_MEMBERS files return the raw stored key
//! unchanged. Detail and listing paths use separately configured TTLs.

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use workroom_core::config::StorageConfig;
use workroom_core::result::AppResult;
use workroom_core::traits::ObjectStore;
use workroom_entity::file::File;

/// Turns stored object keys into client-facing download URLs.
#[derive(Debug, Clone)]
pub struct DeliveryGateway {
    store: Arc<dyn ObjectStore>,
    /// TTL for the file-detail path.
    file_ttl: Duration,
    /// TTL for folder and project listing paths.
    listing_ttl: Duration,
}

impl DeliveryGateway {
    /// Creates a new delivery gateway.
    pub fn new(store: Arc<dyn ObjectStore>, config: &StorageConfig) -> Self {
        Self {
            store,
            file_ttl: Duration::from_secs(config.file_url_ttl_secs),
            listing_ttl: Duration::from_secs(config.listing_url_ttl_secs),
        }
    }

    /// URL for the file-detail path. A presign failure propagates.
    pub async fn detail_url(&self, file: &File) -> AppResult<String> {
        if !file.visibility.requires_presigned_url() {
            return Ok(file.storage_key.clone());
        }
        self.store.presign_get(&file.storage_key, self.file_ttl).await
    }

    /// Best-effort URL for listing paths.
    ///
    /// A presign failure degrades the one item to `None` instead of
    /// failing the listing; the failure is logged.
    pub async fn listing_url(&self, file: &File) -> Option<String> {
        if !file.visibility.requires_presigned_url() {
            return Some(file.storage_key.clone());
        }
        match self
            .store
            .presign_get(&file.storage_key, self.listing_ttl)
            .await
        {
            Ok(url) => Some(url),
            Err(e) => {
                warn!(file_id = %file.id, error = %e, "Presign failed for listing item");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use chrono::Utc;

    use workroom_core::types::ObjectId;
    use workroom_entity::file::{FileCategory, FileStatus, FileVisibility};
    use workroom_storage::MemoryObjectStore;

    use super::*;

    fn gateway_with_store() -> (Arc<MemoryObjectStore>, DeliveryGateway) {
        let store = Arc::new(MemoryObjectStore::new());
        let config = StorageConfig {
            file_url_ttl_secs: 900,
            listing_url_ttl_secs: 300,
            ..StorageConfig::default()
        };
        let gateway = DeliveryGateway::new(store.clone(), &config);
        (store, gateway)
    }

    fn file_with_visibility(key: &str, visibility: FileVisibility) -> File {
        let now = Utc::now();
        File {
            id: ObjectId::new(),
            file_name: "plan.pdf".to_string(),
            file_type: "application/pdf".to_string(),
            file_size: 4,
            storage_key: key.to_string(),
            project_id: ObjectId::new(),
            folder_id: None,
            category: FileCategory::Document,
            description: None,
            tags: Vec::new(),
            uploader_id: ObjectId::new(),
            status: FileStatus::Active,
            visibility,
            starred: false,
            download_count: 0,
            parent_file_id: None,
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_public_and_member_files_return_raw_key() {
        let (_store, gateway) = gateway_with_store();

        let public = file_with_visibility("projects/p/1-a.pdf", FileVisibility::Public);
        let members = file_with_visibility("projects/p/2-b.pdf", FileVisibility::ProjectMembers);

        assert_eq!(gateway.detail_url(&public).await.unwrap(), "projects/p/1-a.pdf");
        assert_eq!(gateway.detail_url(&members).await.unwrap(), "projects/p/2-b.pdf");
        assert_eq!(
            gateway.listing_url(&members).await,
            Some("projects/p/2-b.pdf".to_string())
        );
    }

    #[tokio::test]
    async fn test_restricted_files_presign_with_path_ttls() {
        let (store, gateway) = gateway_with_store();
        store
            .put("projects/p/3-c.pdf", Bytes::from("data"), None)
            .await
            .unwrap();

        let private = file_with_visibility("projects/p/3-c.pdf", FileVisibility::Private);

        let detail = gateway.detail_url(&private).await.unwrap();
        assert_eq!(detail, "memory://projects/p/3-c.pdf?ttl=900");

        let listing = gateway.listing_url(&private).await.unwrap();
        assert_eq!(listing, "memory://projects/p/3-c.pdf?ttl=300");
    }

    #[tokio::test]
    async fn test_listing_presign_failure_degrades_item() {
        let (_store, gateway) = gateway_with_store();

        // Object missing from the store, so presigning fails.
        let private = file_with_visibility("projects/p/gone.pdf", FileVisibility::SpecificUsers);

        assert_eq!(gateway.listing_url(&private).await, None);
        assert!(gateway.detail_url(&private).await.is_err());
    }
}
