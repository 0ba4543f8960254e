//! Platform glue: clipboard, paste automation, menus, tray and the overlay window

pub mod automation;
pub mod clipboard;
pub mod menu;
pub mod tray;
pub mod window;
