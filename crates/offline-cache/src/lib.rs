//! Offline Cache Worker
//!
//! Service-worker side of the app. Pre-caches the static shell on install,
//! prunes stale caches on activate and answers intercepted GETs from the
//! cache first, falling back to the network.
//!
//! The logic is generic over [`CacheStorage`], [`CacheStore`] and
//! [`Network`] so it runs the same against the browser Cache API
//! (`worker`, wasm32 only) and the in-memory stores used by tests.

mod config;
mod error;
mod lifecycle;
mod policy;
mod store;
mod strategy;

#[cfg(target_arch = "wasm32")]
mod worker;

pub use config::{WorkerConfig, CACHE_NAME, STATIC_ASSETS};
pub use error::CacheError;
pub use lifecycle::{activate, install};
pub use policy::{should_intercept, RequestInfo};
pub use store::{
    CacheStorage, CacheStore, CachedResponse, MemoryCache, MemoryCacheStorage, MemoryResponse,
    Network,
};
pub use strategy::respond;
