//! Repository implementations for all Workroom entities.

pub mod file;
pub mod folder;
pub mod grant;
pub mod invite;
pub mod link;
pub mod member;
pub mod notification;
pub mod project;
pub mod user;

pub use file::FileRepository;
pub use folder::FolderRepository;
pub use grant::FileGrantRepository;
pub use invite::InviteRepository;
pub use link::ShareLinkRepository;
pub use member::ProjectMemberRepository;
pub use notification::NotificationRepository;
pub use project::ProjectRepository;
pub use user::UserRepository;
