//! Folder creation and detail use cases.

mod service;

pub use service::{CreateFolderInput, FolderDetail, FolderService};
