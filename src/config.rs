//! Client Configuration
//!
//! Read once at startup from `<meta>` tags the server renders into the page.
//! Every field has a default, so a page without the tag still works.

use serde::Deserialize;
use thiserror::Error;

const CONFIG_META: &str = "meta[name=\"app-config\"]";
const CSRF_META: &str = "meta[name=\"csrf-token\"]";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid app-config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("browser facility unavailable: {0}")]
    Browser(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Prefix for every backend path; empty means same origin
    pub api_base: String,
    /// Quiet period for the add-friend field
    pub debounce_ms: u32,
    pub xp_animation_ms: u32,
    pub toast_ms: u32,
    pub log_level: String,
    pub log_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            debounce_ms: 700,
            xp_animation_ms: 700,
            toast_ms: 2500,
            log_level: "info".to_string(),
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Parse the meta tag's content. Blank content yields defaults.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }

    /// Config from the current document; no tag means defaults
    pub fn from_document() -> Result<Self, ConfigError> {
        match meta_content(CONFIG_META)? {
            Some(raw) => Self::from_json(&raw),
            None => Ok(Self::default()),
        }
    }
}

/// Token echoed back in the `X-CSRFToken` header
pub fn csrf_token() -> Result<Option<String>, ConfigError> {
    Ok(meta_content(CSRF_META)?.filter(|token| !token.is_empty()))
}

fn document() -> Result<web_sys::Document, ConfigError> {
    web_sys::window()
        .ok_or(ConfigError::Browser("window"))?
        .document()
        .ok_or(ConfigError::Browser("document"))
}

fn meta_content(selector: &str) -> Result<Option<String>, ConfigError> {
    let element = document()?.query_selector(selector).ok().flatten();
    Ok(element.and_then(|meta| meta.get_attribute("content")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.debounce_ms, 700);
        assert_eq!(config.toast_ms, 2500);
        assert_eq!(config.log_capacity, 200);
        assert_eq!(AppConfig::from_json("  ").unwrap(), config);
    }

    #[test]
    fn test_partial_override() {
        let config = AppConfig::from_json(r#"{"debounce_ms":300,"log_level":"debug"}"#).unwrap();
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.xp_animation_ms, 700);
        assert_eq!(config.api_base, "");
    }

    #[test]
    fn test_malformed_is_error() {
        assert!(matches!(AppConfig::from_json("{debounce"), Err(ConfigError::Parse(_))));
        assert!(AppConfig::from_json(r#"{"toast_ms":"soon"}"#).is_err());
    }

    #[test]
    fn test_browser_error_names_facility() {
        assert_eq!(
            ConfigError::Browser("document").to_string(),
            "browser facility unavailable: document"
        );
    }
}
