//! Core type definitions used across the Workroom workspace.

pub mod id;
pub mod metadata;
pub mod text;

pub use id::ObjectId;
pub use metadata::sanitize_metadata;
pub use text::sanitize_folder_name;
