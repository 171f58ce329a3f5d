//! Cache-or-network response strategy

use log::{debug, warn};

use crate::error::CacheError;
use crate::policy::RequestInfo;
use crate::store::{CacheStore, CachedResponse, Network};

/// Serve `request` from `cache` when present; otherwise fetch it, store a
/// copy of any `200` response and return the network response. When the
/// network fails the cache is consulted once more before giving up.
pub async fn respond<C, N>(
    cache: &C,
    network: &N,
    request: &RequestInfo,
) -> Result<C::Response, CacheError>
where
    C: CacheStore,
    N: Network<Response = C::Response>,
{
    if let Some(hit) = cache.lookup(request).await? {
        debug!("[SW] cache hit {}", request.url);
        return Ok(hit);
    }

    match network.fetch(request).await {
        Ok(response) => {
            if response.status() == 200 {
                let copy = response.duplicate()?;
                if let Err(err) = cache.put(request, copy).await {
                    warn!("[SW] could not cache {}: {}", request.url, err);
                }
            }
            Ok(response)
        }
        Err(err) => {
            warn!("[SW] network failed for {}: {}", request.url, err);
            cache.lookup(request).await?.ok_or_else(|| CacheError::Offline {
                url: request.url.clone(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::config::WorkerConfig;
    use crate::policy::should_intercept;
    use crate::store::{MemoryCache, MemoryResponse};

    /// Network double that counts calls and can be switched offline
    #[derive(Default)]
    struct FakeNetwork {
        responses: RefCell<HashMap<String, MemoryResponse>>,
        calls: Cell<usize>,
        offline: Cell<bool>,
    }

    impl FakeNetwork {
        fn serving(url: &str, response: MemoryResponse) -> Self {
            let network = Self::default();
            network.responses.borrow_mut().insert(url.to_string(), response);
            network
        }
    }

    #[async_trait(?Send)]
    impl Network for FakeNetwork {
        type Response = MemoryResponse;

        async fn fetch(&self, request: &RequestInfo) -> Result<MemoryResponse, CacheError> {
            self.calls.set(self.calls.get() + 1);
            if self.offline.get() {
                return Err(CacheError::Network {
                    url: request.url.clone(),
                    reason: "offline".to_string(),
                });
            }
            Ok(self
                .responses
                .borrow()
                .get(&request.url)
                .cloned()
                .unwrap_or(MemoryResponse { status: 404, body: String::new() }))
        }
    }

    const CSS: &str = "/static/css/style.css";

    #[tokio::test]
    async fn test_second_get_served_from_cache() {
        let cache = MemoryCache::default();
        let network = FakeNetwork::serving(CSS, MemoryResponse::ok("body{}"));
        let request = RequestInfo::get(CSS);

        let first = respond(&cache, &network, &request).await.unwrap();
        let second = respond(&cache, &network, &request).await.unwrap();

        assert_eq!(first.body, "body{}");
        assert_eq!(second, first);
        assert_eq!(network.calls.get(), 1);
    }

    #[tokio::test]
    async fn test_non_200_is_not_cached() {
        let cache = MemoryCache::default();
        let network = FakeNetwork::default();
        let request = RequestInfo::get("/missing");

        let response = respond(&cache, &network, &request).await.unwrap();
        assert_eq!(response.status, 404);
        assert!(cache.is_empty());
    }

    #[tokio::test]
    async fn test_task_post_never_written() {
        let config = WorkerConfig::default();
        let cache = MemoryCache::default();
        let network = FakeNetwork::serving("/task/complete/4", MemoryResponse::ok("{\"ok\":true}"));
        let request = RequestInfo::post("/task/complete/4");

        // The worker does not intercept it at all
        assert!(!should_intercept(&config, &request));

        // And even if it reached the strategy the store refuses it
        let response = respond(&cache, &network, &request).await.unwrap();
        assert_eq!(response.status, 200);
        assert!(cache.is_empty());
        assert!(!cache.contains("/task/complete/4"));
    }

    #[tokio::test]
    async fn test_offline_miss_fails() {
        let cache = MemoryCache::default();
        let network = FakeNetwork::default();
        network.offline.set(true);

        let err = respond(&cache, &network, &RequestInfo::get("/login")).await.unwrap_err();
        assert_eq!(err, CacheError::Offline { url: "/login".to_string() });
    }

    #[tokio::test]
    async fn test_offline_hit_served() {
        let cache = MemoryCache::default();
        let network = FakeNetwork::serving("/login", MemoryResponse::ok("<form>"));
        let request = RequestInfo::get("/login");
        respond(&cache, &network, &request).await.unwrap();

        network.offline.set(true);
        let response = respond(&cache, &network, &request).await.unwrap();
        assert_eq!(response.body, "<form>");
        assert_eq!(network.calls.get(), 1);
    }
}
