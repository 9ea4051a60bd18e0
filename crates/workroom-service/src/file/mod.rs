//! File use cases: detail aggregation, scope listing, star, download,
//! soft delete, and upload ingestion.

pub mod delivery;
pub mod service;
pub mod upload;

pub use delivery::DeliveryGateway;
pub use service::{DeliveredFile, FileDetail, FileService, ScopeListing};
pub use upload::{UploadParams, UploadService};
