//! # workroom-service
//!
//! Business logic service layer for Workroom. Each service orchestrates
//! repositories, the object store, and the access policy to implement
//! application-level use cases.
//!
//! Services follow constructor injection; all dependencies are provided
//! at construction time via `Arc` references.

pub mod file;
pub mod folder;
pub mod notification;
pub mod project;
pub mod rate_limit;
pub mod user;

pub use file::{DeliveryGateway, FileService, UploadService};
pub use folder::FolderService;
pub use notification::NotificationService;
pub use project::ProjectService;
pub use rate_limit::FixedWindowCounter;
pub use user::UserService;
