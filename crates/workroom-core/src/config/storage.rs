//! Object storage configuration.

use serde::{Deserialize, Serialize};

/// Object storage configuration.
///
/// File bytes live in an S3-compatible store; the database only holds the
/// storage key. The two URL TTLs are intentionally distinct: file-detail
/// fetches hand out longer-lived links than folder listings do.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage provider to use: `"s3"` or `"memory"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// S3 bucket name.
    #[serde(default = "default_bucket")]
    pub bucket: String,
    /// AWS region.
    #[serde(default = "default_region")]
    pub region: String,
    /// S3 endpoint URL (for non-AWS services like MinIO).
    #[serde(default)]
    pub endpoint: String,
    /// Access key ID. Empty means the ambient AWS credential chain.
    #[serde(default)]
    pub access_key: String,
    /// Secret access key.
    #[serde(default)]
    pub secret_key: String,
    /// Presigned URL TTL in seconds for single-file fetches.
    #[serde(default = "default_file_url_ttl")]
    pub file_url_ttl_secs: u64,
    /// Presigned URL TTL in seconds for links embedded in folder listings.
    #[serde(default = "default_listing_url_ttl")]
    pub listing_url_ttl_secs: u64,
    /// Maximum upload size in bytes (default 100 MB).
    #[serde(default = "default_max_upload")]
    pub max_upload_size_bytes: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            bucket: default_bucket(),
            region: default_region(),
            endpoint: String::new(),
            access_key: String::new(),
            secret_key: String::new(),
            file_url_ttl_secs: default_file_url_ttl(),
            listing_url_ttl_secs: default_listing_url_ttl(),
            max_upload_size_bytes: default_max_upload(),
        }
    }
}

fn default_provider() -> String {
    "s3".to_string()
}

fn default_bucket() -> String {
    "workroom-files".to_string()
}

fn default_region() -> String {
    "us-east-1".to_string()
}

fn default_file_url_ttl() -> u64 {
    900
}

fn default_listing_url_ttl() -> u64 {
    300
}

fn default_max_upload() -> u64 {
    104_857_600 // 100 MB
}
