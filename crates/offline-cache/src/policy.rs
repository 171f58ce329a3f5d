//! Which requests the worker handles

use crate::config::WorkerConfig;

/// Method and URL of an intercepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    pub method: String,
    pub url: String,
}

impl RequestInfo {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: "GET".to_string(),
            url: url.into(),
        }
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self {
            method: "POST".to_string(),
            url: url.into(),
        }
    }
}

/// Only non-bypassed GETs are answered by the worker; everything else goes
/// straight to the network untouched.
pub fn should_intercept(config: &WorkerConfig, request: &RequestInfo) -> bool {
    request.method.eq_ignore_ascii_case("GET")
        && !config
            .bypass_patterns
            .iter()
            .any(|pattern| request.url.contains(pattern.as_str()))
}
