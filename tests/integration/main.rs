//! Integration test entry point.

mod helpers;

mod auth_test;
mod cache_test;
mod gateway_test;
mod users_test;
