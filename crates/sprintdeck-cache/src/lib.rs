//! # sprintdeck-cache
//!
//! Cache layer for Sprintdeck:
//!
//! - **memory**: in-process cache using [moka](https://crates.io/crates/moka)
//!   with lazy per-entry expiry
//! - **redis**: Redis-backed cache using the [redis](https://crates.io/crates/redis)
//!   crate (feature `redis-backend`)
//! - [`aside::CacheAside`]: the read-through / write-invalidate manager that
//!   keeps the cache consistent with the data store
//!
//! The provider is selected at runtime based on configuration.

pub mod aside;
pub mod keys;
#[cfg(feature = "memory")]
pub mod memory;
pub mod provider;
#[cfg(feature = "redis-backend")]
pub mod redis;

pub use aside::CacheAside;
pub use provider::CacheManager;
