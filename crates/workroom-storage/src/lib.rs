//! # workroom-storage
//!
//! Object store implementations for Workroom. Ships an S3-compatible
//! provider for production and an in-memory provider for tests and local
//! development.

pub mod key;
pub mod providers;

pub use providers::memory::MemoryObjectStore;
pub use providers::s3::S3ObjectStore;
