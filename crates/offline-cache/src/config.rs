//! Worker configuration

/// Current cache name. Bump the version to invalidate every cached entry.
pub const CACHE_NAME: &str = "daily-goals-v1";

/// App shell fetched on install
pub const STATIC_ASSETS: &[&str] = &[
    "/",
    "/login",
    "/static/css/style.css",
    "/static/js/app.js",
    "/static/manifest.json",
];

/// URL fragments that are never served from or written to the cache
const BYPASS_PATTERNS: &[&str] = &[
    "/task",
    "/friend",
    "/follower",
    "/api/",
    "/privacy",
    "/add-friend",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    pub cache_name: String,
    pub static_assets: Vec<String>,
    pub bypass_patterns: Vec<String>,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            cache_name: CACHE_NAME.to_string(),
            static_assets: STATIC_ASSETS.iter().map(|s| s.to_string()).collect(),
            bypass_patterns: BYPASS_PATTERNS.iter().map(|s| s.to_string()).collect(),
        }
    }
}
