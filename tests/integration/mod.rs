pub mod helpers;

mod auth_test;
mod health_test;
