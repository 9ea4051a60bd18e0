//! Project domain entities.

pub mod invite;
pub mod member;
pub mod model;

pub use invite::{CreateInvite, InviteStatus, ProjectInvite};
pub use member::ProjectMember;
pub use model::{CreateProject, Project};
