//! Native rendering of the history popup menu

use tauri::menu::{Menu, MenuItem, PredefinedMenuItem, Submenu};
use tauri::{AppHandle, Manager, Wry};

use crate::config::OVERLAY_LABEL;
use crate::core::actions::MenuActions;
use crate::core::clipboard::ClipboardMonitor;
use crate::core::menu::{LastMenu, MenuEntry, MenuSpec};
use crate::shared::error::{AppError, AppResult};
use crate::shared::settings::AppSettings;

/// Turn a menu description into native menu items
pub fn render(app: &AppHandle, spec: &MenuSpec) -> AppResult<Menu<Wry>> {
    let menu = Menu::new(app)?;

    for entry in &spec.entries {
        match entry {
            MenuEntry::Info { label } => {
                let item = MenuItem::new(app, label, false, None::<&str>)?;
                menu.append(&item)?;
            }
            MenuEntry::Submenu { label, actions } => {
                let submenu = Submenu::new(app, label, true)?;
                for action in actions {
                    let item =
                        MenuItem::with_id(app, action.id.as_str(), &action.label, true, None::<&str>)?;
                    submenu.append(&item)?;
                }
                menu.append(&submenu)?;
            }
            MenuEntry::Separator => {
                menu.append(&PredefinedMenuItem::separator(app)?)?;
            }
            MenuEntry::Clear { id, label } => {
                let item = MenuItem::with_id(app, id.as_str(), label, true, None::<&str>)?;
                menu.append(&item)?;
            }
        }
    }

    Ok(menu)
}

/// Build the menu from the current history and pop it up over the overlay window
pub fn show_history_menu(app: &AppHandle) -> AppResult<()> {
    let history = app.state::<ClipboardMonitor>().history().items();
    let label_max_chars = app.state::<AppSettings>().label_max_chars;

    let spec = MenuSpec::build(&history, label_max_chars);
    let menu = render(app, &spec)?;
    app.state::<LastMenu>().replace(spec);

    let window = app
        .get_webview_window(OVERLAY_LABEL)
        .ok_or_else(|| AppError::Window("Overlay window not found".to_string()))?;
    window.popup_menu(&menu)?;

    tracing::debug!(entries = history.len(), "history menu opened");
    Ok(())
}

/// Dispatch a clicked menu item; ids that belong to other menus are ignored
pub fn handle_menu_event(app: &AppHandle, id: &str) {
    let Some(command) = app.state::<LastMenu>().resolve(id) else {
        return;
    };

    let actions = app.state::<MenuActions>().inner().clone();
    // The paste keystroke can block, keep it off the event loop
    tauri::async_runtime::spawn_blocking(move || actions.execute(command));
}
