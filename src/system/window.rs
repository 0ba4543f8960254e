use tauri::{AppHandle, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

use crate::config::{content_source, ContentSource, WindowConfig};
use crate::shared::error::{AppError, AppResult};

/// Create the full-screen, click-through overlay that anchors popup menus
pub fn create_overlay_window(app: &AppHandle) -> AppResult<WebviewWindow> {
    let config = WindowConfig::overlay();

    let url = match content_source() {
        ContentSource::Bundled => WebviewUrl::App("index.html".into()),
        ContentSource::DevServer(url) => {
            let parsed = Url::parse(&url)
                .map_err(|e| AppError::Config(format!("Invalid dev URL '{}': {}", url, e)))?;
            tracing::info!(%url, "loading overlay from dev server");
            WebviewUrl::External(parsed)
        }
    };

    let window = WebviewWindowBuilder::new(app, config.label, url)
        .title(&config.title)
        .transparent(config.transparent)
        .decorations(false)
        .always_on_top(config.always_on_top)
        .visible_on_all_workspaces(true)
        .skip_taskbar(true)
        .shadow(false)
        .focused(false)
        .maximized(true)
        .build()?;

    window.set_ignore_cursor_events(config.click_through)?;

    Ok(window)
}
