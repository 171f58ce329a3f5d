//! Daily Goals Frontend Entry Point

mod animation;
mod app;
mod commands;
mod components;
mod config;
mod context;
mod debounce;
mod lifecycle;
mod models;
mod render;
mod social;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = AppConfig::from_document();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    // Only fails if a logger is already installed
    let level = rolling_logger::parse_level(&config.log_level);
    let _ = rolling_logger::init(level, config.log_capacity);
    if let Err(e) = loaded {
        log::warn!("[APP] {}; using defaults", e);
    }

    let csrf_token = config::csrf_token().unwrap_or_else(|e| {
        log::warn!("[APP] {}; sending without CSRF token", e);
        None
    });
    let token_state = if csrf_token.is_some() { "present" } else { "missing" };
    log::info!("[APP] Starting (csrf token {})", token_state);
    mount_to_body(move || view! { <App config=config csrf_token=csrf_token /> });
}
