use tauri::AppHandle;
use tauri_plugin_clipboard_manager::ClipboardExt;

use crate::core::clipboard::ClipboardAccess;
use crate::shared::error::AppResult;

/// System clipboard through Tauri's clipboard manager plugin
pub struct TauriClipboard {
    app: AppHandle,
}

impl TauriClipboard {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl ClipboardAccess for TauriClipboard {
    fn read_text(&self) -> AppResult<String> {
        Ok(self.app.clipboard().read_text()?)
    }

    fn write_text(&self, text: &str) -> AppResult<()> {
        self.app.clipboard().write_text(text)?;
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        self.app.clipboard().clear()?;
        Ok(())
    }
}
