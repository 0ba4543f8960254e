//! Window configuration
//!
//! The only window is a transparent, click-through overlay that hosts the
//! history popup menu.

use std::env;

/// Environment variable naming a development content URL for the overlay window
pub const DEV_URL_ENV: &str = "TRANSFORM_PASTE_DEV_URL";

pub const OVERLAY_LABEL: &str = "overlay";

/// Window configuration for the overlay
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub label: &'static str,
    pub title: String,
    pub transparent: bool,
    pub always_on_top: bool,
    /// Let mouse events fall through to the windows underneath
    pub click_through: bool,
}

impl WindowConfig {
    pub fn overlay() -> Self {
        Self {
            label: OVERLAY_LABEL,
            title: "Transform Paste".to_string(),
            transparent: true,
            always_on_top: true,
            click_through: true,
        }
    }
}

/// Where the overlay window loads its content from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Bundled `index.html`
    Bundled,
    DevServer(String),
}

/// Resolve the content source; the dev URL is honoured in debug builds only
pub fn content_source() -> ContentSource {
    resolve_content_source(cfg!(debug_assertions), env::var(DEV_URL_ENV).ok())
}

fn resolve_content_source(is_dev: bool, dev_url: Option<String>) -> ContentSource {
    match dev_url {
        Some(url) if is_dev && !url.trim().is_empty() => ContentSource::DevServer(url),
        _ => ContentSource::Bundled,
    }
}
