//! Install and activate steps

use log::info;

use crate::config::WorkerConfig;
use crate::error::CacheError;
use crate::policy::RequestInfo;
use crate::store::{CacheStorage, CacheStore, CachedResponse, Network};

/// Pre-cache the app shell. All-or-nothing: every asset is fetched before
/// anything is written, and a single non-200 aborts the install.
pub async fn install<S, N>(
    storage: &S,
    network: &N,
    config: &WorkerConfig,
) -> Result<usize, CacheError>
where
    S: CacheStorage,
    N: Network<Response = <S::Store as CacheStore>::Response>,
{
    let mut fetched = Vec::with_capacity(config.static_assets.len());
    for url in &config.static_assets {
        let request = RequestInfo::get(url.as_str());
        let response = network.fetch(&request).await?;
        if response.status() != 200 {
            return Err(CacheError::Precache {
                url: url.clone(),
                status: response.status(),
            });
        }
        fetched.push((request, response));
    }

    let cache = storage.open(&config.cache_name).await?;
    let count = fetched.len();
    for (request, response) in fetched {
        cache.put(&request, response).await?;
    }
    info!("[SW] installed {} ({} assets)", config.cache_name, count);
    Ok(count)
}

/// Delete every cache except the current one. Returns the deleted names.
pub async fn activate<S: CacheStorage>(
    storage: &S,
    config: &WorkerConfig,
) -> Result<Vec<String>, CacheError> {
    let mut deleted = Vec::new();
    for name in storage.keys().await? {
        if name != config.cache_name && storage.delete(&name).await? {
            deleted.push(name);
        }
    }
    if !deleted.is_empty() {
        info!("[SW] removed stale caches: {}", deleted.join(", "));
    }
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use async_trait::async_trait;

    use super::*;
    use crate::store::{MemoryCacheStorage, MemoryResponse};

    /// Serves every URL except the ones listed as broken
    struct ShellNetwork {
        broken: HashSet<String>,
    }

    #[async_trait(?Send)]
    impl Network for ShellNetwork {
        type Response = MemoryResponse;

        async fn fetch(&self, request: &RequestInfo) -> Result<MemoryResponse, CacheError> {
            if self.broken.contains(&request.url) {
                Ok(MemoryResponse { status: 500, body: String::new() })
            } else {
                Ok(MemoryResponse::ok(format!("content of {}", request.url)))
            }
        }
    }

    #[tokio::test]
    async fn test_install_precaches_shell() {
        let storage = MemoryCacheStorage::new();
        let network = ShellNetwork { broken: HashSet::new() };
        let config = WorkerConfig::default();

        let count = install(&storage, &network, &config).await.unwrap();

        let cache = storage.get(&config.cache_name).unwrap();
        assert_eq!(count, config.static_assets.len());
        assert_eq!(cache.len(), config.static_assets.len());
        assert!(cache.contains("/static/css/style.css"));
    }

    #[tokio::test]
    async fn test_install_is_all_or_nothing() {
        let storage = MemoryCacheStorage::new();
        let network = ShellNetwork {
            broken: ["/static/manifest.json".to_string()].into_iter().collect(),
        };
        let config = WorkerConfig::default();

        let err = install(&storage, &network, &config).await.unwrap_err();

        assert_eq!(
            err,
            CacheError::Precache { url: "/static/manifest.json".to_string(), status: 500 }
        );
        assert!(storage.get(&config.cache_name).is_none());
    }

    #[tokio::test]
    async fn test_activate_prunes_old_versions() {
        let storage = MemoryCacheStorage::new();
        let config = WorkerConfig::default();
        storage.open("daily-goals-v0").await.unwrap();
        storage.open(&config.cache_name).await.unwrap();
        storage.open("unrelated").await.unwrap();

        let mut deleted = activate(&storage, &config).await.unwrap();
        deleted.sort();

        assert_eq!(deleted, vec!["daily-goals-v0".to_string(), "unrelated".to_string()]);
        assert_eq!(storage.keys().await.unwrap(), vec![config.cache_name.clone()]);
    }
}
