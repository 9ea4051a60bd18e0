//! # workroom-auth
//!
//! Authentication and authorization for the Workroom platform.
//!
//! ## Modules
//!
//! - `token`: validation of identity-provider bearer tokens
//! - `identity`: mapping verified claims to local user rows
//! - `policy`: file and folder access evaluation

pub mod identity;
pub mod policy;
pub mod token;

pub use identity::IdentityResolver;
pub use policy::{AccessPolicy, GrantReason};
pub use token::{Claims, TokenVerifier};
