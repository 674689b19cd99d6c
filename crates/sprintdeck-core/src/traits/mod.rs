//! Core traits implemented by pluggable backends.

pub mod cache;

pub use cache::CacheProvider;
