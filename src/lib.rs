pub mod config;
pub mod core;
pub mod logging;
pub mod shared;
pub mod system;

use std::sync::Arc;

use tauri::{AppHandle, Manager, RunEvent};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

use crate::core::actions::MenuActions;
use crate::core::clipboard::{ClipboardAccess, ClipboardHistory, ClipboardMonitor};
use crate::core::menu::LastMenu;
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;
use crate::system::automation::{check_accessibility_permissions, SystemPaster};
use crate::system::clipboard::TauriClipboard;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    logging::init();

    let app = tauri::Builder::default()
        .plugin(tauri_plugin_global_shortcut::Builder::new().build())
        .plugin(tauri_plugin_clipboard_manager::init())
        .on_menu_event(|app, event| system::menu::handle_menu_event(app, event.id().as_ref()))
        .setup(|app| {
            let settings = tauri::async_runtime::block_on(AppSettings::load())
                .unwrap_or_else(|e| {
                    tracing::warn!(error = %e, "failed to load settings, using defaults");
                    AppSettings::default()
                });

            let handle = app.handle().clone();
            let clipboard: Arc<dyn ClipboardAccess> = Arc::new(TauriClipboard::new(handle.clone()));
            let history = ClipboardHistory::new(settings.history_capacity);
            let monitor = ClipboardMonitor::new(clipboard.clone(), history);
            let actions = MenuActions::new(monitor.clone(), clipboard, Arc::new(SystemPaster));

            app.manage(settings.clone());
            app.manage(monitor.clone());
            app.manage(actions);
            app.manage(LastMenu::default());

            monitor.start(settings.poll_interval());

            system::window::create_overlay_window(&handle)?;
            system::tray::build_tray(&handle)?;

            if let Err(e) = register_shortcut(&handle, &settings.shortcut) {
                tracing::error!(error = %e, "global shortcut unavailable, use the tray menu to quit");
            }

            if !check_accessibility_permissions() {
                tracing::warn!("accessibility permission missing, pasting will fail until it is granted");
            }

            tracing::info!(shortcut = %settings.shortcut, "transform-paste initialized");
            Ok(())
        })
        .build(tauri::generate_context!());

    let app = match app {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to start application");
            std::process::exit(1);
        }
    };

    app.run(|_app, event| {
        if let RunEvent::ExitRequested { code, api, .. } = event {
            // No exit code means the last window closed; macOS apps stay resident in the tray
            if code.is_none() && cfg!(target_os = "macos") {
                api.prevent_exit();
            }
        }
    });
}

fn register_shortcut(app: &AppHandle, shortcut_str: &str) -> AppResult<()> {
    let shortcut: Shortcut = shortcut_str
        .parse()
        .map_err(|e| AppError::Shortcut(format!("Failed to parse '{}': {}", shortcut_str, e)))?;

    app.global_shortcut()
        .on_shortcut(shortcut, |app, _shortcut, event| {
            if event.state() != ShortcutState::Pressed {
                return;
            }
            if let Err(e) = system::menu::show_history_menu(app) {
                tracing::error!(error = %e, "failed to show history menu");
            }
        })
        .map_err(|e| AppError::Shortcut(e.to_string()))?;

    tracing::info!(shortcut = shortcut_str, "registered global shortcut");
    Ok(())
}
