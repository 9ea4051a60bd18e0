//! Core traits defined in `workroom-core` and implemented by other crates.

pub mod rate;
pub mod store;

pub use rate::{RateCounter, RateDecision};
pub use store::ObjectStore;
