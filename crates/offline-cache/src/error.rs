use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CacheError {
    #[error("network request for {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("offline and {url} is not cached")]
    Offline { url: String },
    #[error("pre-cache of {url} failed with status {status}")]
    Precache { url: String, status: u16 },
    #[error("cache storage error: {0}")]
    Storage(String),
}
