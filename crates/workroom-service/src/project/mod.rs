//! Project listing and creation use cases.

mod service;

pub use service::{CreateProjectInput, ProjectService};
