//! # workroom-core
//!
//! Core crate for Workroom. Contains traits, configuration schemas, the
//! object-id type, metadata sanitization, and the unified error system.
//!
//! This crate has **no** internal dependencies on other Workroom crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
