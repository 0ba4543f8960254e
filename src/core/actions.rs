use std::sync::Arc;

use crate::core::clipboard::{ClipboardAccess, ClipboardMonitor};
use crate::core::menu::MenuCommand;
use crate::shared::error::AppResult;

/// Sends the platform paste keystroke to the focused application
pub trait Paster: Send + Sync {
    fn paste(&self) -> AppResult<()>;
}

/// Executes commands picked from the history menu
#[derive(Clone)]
pub struct MenuActions {
    monitor: ClipboardMonitor,
    clipboard: Arc<dyn ClipboardAccess>,
    paster: Arc<dyn Paster>,
}

impl MenuActions {
    pub fn new(
        monitor: ClipboardMonitor,
        clipboard: Arc<dyn ClipboardAccess>,
        paster: Arc<dyn Paster>,
    ) -> Self {
        Self {
            monitor,
            clipboard,
            paster,
        }
    }

    /// Run `command`; failures are logged and never reach the menu
    pub fn execute(&self, command: MenuCommand) {
        match command {
            MenuCommand::Paste(text) => {
                if let Err(e) = self.paste_text(&text) {
                    tracing::error!(error = %e, "paste failed");
                }
            }
            MenuCommand::Clear => self.monitor.clear(),
        }
    }

    /// Put `text` on the clipboard, then paste it into the focused application
    pub fn paste_text(&self, text: &str) -> AppResult<()> {
        self.clipboard.write_text(text)?;
        tracing::debug!(chars = text.chars().count(), "wrote variant to clipboard");
        self.paster.paste()?;
        tracing::info!("pasted variant into focused application");
        Ok(())
    }
}
