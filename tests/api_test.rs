//! End-to-end tests exercising the HTTP surface through the full router.

mod integration;
