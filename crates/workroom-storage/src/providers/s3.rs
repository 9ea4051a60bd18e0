//! S3-compatible object store provider.

use std::time::Duration;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_s3::Client;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use workroom_core::config::StorageConfig;
use workroom_core::error::{AppError, ErrorKind};
use workroom_core::result::AppResult;
use workroom_core::traits::ObjectStore;

/// Object store backed by S3 or any S3-compatible service.
#[derive(Debug, Clone)]
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Build a store from configuration.
    ///
    /// An empty `access_key` defers to the ambient AWS credential chain
    /// (environment variables, instance profile). An empty `endpoint` means
    /// real AWS; a non-empty one points at an S3-compatible service.
    pub async fn from_config(config: &StorageConfig) -> AppResult<Self> {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()));

        if !config.access_key.is_empty() {
            loader = loader.credentials_provider(Credentials::new(
                config.access_key.clone(),
                config.secret_key.clone(),
                None,
                None,
                "workroom-config",
            ));
        }

        let shared = loader.load().await;
        let mut builder = aws_sdk_s3::config::Builder::from(&shared);
        if !config.endpoint.is_empty() {
            // Custom endpoints (MinIO, LocalStack) require path-style addressing.
            builder = builder
                .endpoint_url(&config.endpoint)
                .force_path_style(true);
        }

        info!(
            bucket = %config.bucket,
            region = %config.region,
            "Initializing S3 object store"
        );

        Ok(Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
        })
    }

    /// Construct directly from an existing client and bucket name.
    pub fn new(client: Client, bucket: String) -> Self {
        Self { client, bucket }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    fn provider_type(&self) -> &str {
        "s3"
    }

    async fn put(&self, key: &str, data: Bytes, content_type: Option<&str>) -> AppResult<()> {
        let size = data.len();
        let mut request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(data));
        if let Some(content_type) = content_type {
            request = request.content_type(content_type);
        }

        request.send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write object: s3://{}/{key}", self.bucket),
                e,
            )
        })?;

        debug!(key, bytes = size, "Stored object");
        Ok(())
    }

    async fn delete(&self, key: &str) -> AppResult<()> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to delete object: s3://{}/{key}", self.bucket),
                    e,
                )
            })?;

        debug!(key, "Deleted object");
        Ok(())
    }

    async fn presign_get(&self, key: &str, ttl: Duration) -> AppResult<String> {
        let presigning = PresigningConfig::expires_in(ttl)
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Invalid presign expiry", e))?;

        let presigned = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to presign object: s3://{}/{key}", self.bucket),
                    e,
                )
            })?;

        Ok(presigned.uri().to_string())
    }
}
