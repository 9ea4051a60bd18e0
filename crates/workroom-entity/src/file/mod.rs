//! File domain entities.

pub mod category;
pub mod grant;
pub mod link;
pub mod model;
pub mod status;
pub mod visibility;

pub use category::FileCategory;
pub use grant::FileAccessGrant;
pub use link::FileShareLink;
pub use model::{CreateFile, File};
pub use status::FileStatus;
pub use visibility::FileVisibility;
