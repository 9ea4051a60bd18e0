//! HTTP request handlers, grouped by domain.

pub mod file;
pub mod folder;
pub mod health;
pub mod notification;
pub mod project;
pub mod user;
