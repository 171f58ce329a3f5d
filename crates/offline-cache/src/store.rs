//! Cache and network seams
//!
//! The browser implementations live in `worker`; the in-memory ones here
//! back the tests and any non-browser host.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use async_trait::async_trait;

use crate::error::CacheError;
use crate::policy::RequestInfo;

/// A response that can be stored. `duplicate` copies the body so one copy
/// can go to the cache while the other answers the page.
pub trait CachedResponse: Sized {
    fn status(&self) -> u16;
    fn duplicate(&self) -> Result<Self, CacheError>;
}

/// One named cache: request -> response
#[async_trait(?Send)]
pub trait CacheStore {
    type Response: CachedResponse;

    async fn lookup(&self, request: &RequestInfo) -> Result<Option<Self::Response>, CacheError>;
    async fn put(&self, request: &RequestInfo, response: Self::Response) -> Result<(), CacheError>;
}

/// The set of named caches owned by the worker
#[async_trait(?Send)]
pub trait CacheStorage {
    type Store: CacheStore;

    async fn open(&self, name: &str) -> Result<Self::Store, CacheError>;
    async fn keys(&self) -> Result<Vec<String>, CacheError>;
    async fn delete(&self, name: &str) -> Result<bool, CacheError>;
}

#[async_trait(?Send)]
pub trait Network {
    type Response;

    async fn fetch(&self, request: &RequestInfo) -> Result<Self::Response, CacheError>;
}

// ========================
// In-memory implementation
// ========================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryResponse {
    pub status: u16,
    pub body: String,
}

impl MemoryResponse {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }
}

impl CachedResponse for MemoryResponse {
    fn status(&self) -> u16 {
        self.status
    }

    fn duplicate(&self) -> Result<Self, CacheError> {
        Ok(self.clone())
    }
}

/// Shared handle to one in-memory cache, keyed by URL
#[derive(Debug, Clone, Default)]
pub struct MemoryCache {
    entries: Rc<RefCell<BTreeMap<String, MemoryResponse>>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.borrow().contains_key(url)
    }
}

#[async_trait(?Send)]
impl CacheStore for MemoryCache {
    type Response = MemoryResponse;

    async fn lookup(&self, request: &RequestInfo) -> Result<Option<MemoryResponse>, CacheError> {
        if !request.method.eq_ignore_ascii_case("GET") {
            return Ok(None);
        }
        Ok(self.entries.borrow().get(&request.url).cloned())
    }

    async fn put(&self, request: &RequestInfo, response: MemoryResponse) -> Result<(), CacheError> {
        // Same contract as Cache.put in the browser
        if !request.method.eq_ignore_ascii_case("GET") {
            return Err(CacheError::Storage(format!(
                "refusing to cache {} {}",
                request.method, request.url
            )));
        }
        self.entries.borrow_mut().insert(request.url.clone(), response);
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryCacheStorage {
    caches: RefCell<BTreeMap<String, MemoryCache>>,
}

impl MemoryCacheStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to an existing cache without creating it
    pub fn get(&self, name: &str) -> Option<MemoryCache> {
        self.caches.borrow().get(name).cloned()
    }
}

#[async_trait(?Send)]
impl CacheStorage for MemoryCacheStorage {
    type Store = MemoryCache;

    async fn open(&self, name: &str) -> Result<MemoryCache, CacheError> {
        Ok(self
            .caches
            .borrow_mut()
            .entry(name.to_string())
            .or_default()
            .clone())
    }

    async fn keys(&self) -> Result<Vec<String>, CacheError> {
        Ok(self.caches.borrow().keys().cloned().collect())
    }

    async fn delete(&self, name: &str) -> Result<bool, CacheError> {
        Ok(self.caches.borrow_mut().remove(name).is_some())
    }
}
