use tauri::menu::{Menu, MenuItem};
use tauri::tray::TrayIconBuilder;
use tauri::AppHandle;

use crate::shared::error::{AppError, AppResult};

pub const QUIT_ID: &str = "quit";

/// Create the tray icon with its single "Quit" action
pub fn build_tray(app: &AppHandle) -> AppResult<()> {
    let quit_item = MenuItem::with_id(app, QUIT_ID, "Quit", true, None::<&str>)?;
    let menu = Menu::with_items(app, &[&quit_item])?;

    let icon = app
        .default_window_icon()
        .ok_or_else(|| AppError::Window("Failed to get default window icon".to_string()))?
        .clone();

    let _tray = TrayIconBuilder::new()
        .icon(icon)
        .tooltip("Transform Paste")
        .menu(&menu)
        .on_menu_event(|app, event| {
            if event.id().as_ref() == QUIT_ID {
                tracing::info!("quit requested from tray");
                app.exit(0);
            }
        })
        .build(app)?;

    Ok(())
}
