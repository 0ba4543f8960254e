use super::{ClipboardAccess, ClipboardHistory};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

/// Clipboard monitor that polls for changes
#[derive(Clone)]
pub struct ClipboardMonitor {
    clipboard: Arc<dyn ClipboardAccess>,
    history: ClipboardHistory,
}

impl ClipboardMonitor {
    pub fn new(clipboard: Arc<dyn ClipboardAccess>, history: ClipboardHistory) -> Self {
        Self { clipboard, history }
    }

    pub fn history(&self) -> &ClipboardHistory {
        &self.history
    }

    /// Read the clipboard once and record its text. Returns true if the history changed.
    pub fn sample(&self) -> bool {
        match self.clipboard.read_text() {
            Ok(text) => self.history.record(&text),
            Err(e) => {
                // Non-text or empty clipboards surface as read errors
                tracing::trace!(error = %e, "no clipboard text to sample");
                false
            }
        }
    }

    /// Empty the history and the system clipboard
    pub fn clear(&self) {
        self.history.clear();
        if let Err(e) = self.clipboard.clear() {
            tracing::warn!(error = %e, "failed to clear system clipboard");
        }
    }

    /// Start sampling on Tauri's async runtime every `interval`
    pub fn start(&self, interval: Duration) {
        let monitor = self.clone();

        tauri::async_runtime::spawn(async move {
            tracing::info!(?interval, "clipboard monitoring started");

            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                ticker.tick().await;
                if monitor.sample() {
                    tracing::debug!(count = monitor.history.count(), "detected clipboard change");
                }
            }
        });
    }
}
