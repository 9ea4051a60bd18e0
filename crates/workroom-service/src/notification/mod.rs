//! Notification listing and invite response use cases.

mod service;

pub use service::{InviteResponseInput, NotificationService};
