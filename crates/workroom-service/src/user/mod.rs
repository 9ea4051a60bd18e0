//! User search use cases.

mod service;

pub use service::UserService;
