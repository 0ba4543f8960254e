//! Clipboard module
//!
//! Provides clipboard history tracking and monitoring functionality.
//!
//! This module contains two main components:
//! - `history`: Manages clipboard history with deduplication and capacity limits
//! - `monitor`: Periodic sampler that feeds clipboard text into the history

pub mod history;
pub mod monitor;

pub use history::ClipboardHistory;
pub use monitor::ClipboardMonitor;

use crate::shared::error::AppResult;

/// Access to the system clipboard's text content
pub trait ClipboardAccess: Send + Sync {
    fn read_text(&self) -> AppResult<String>;
    fn write_text(&self, text: &str) -> AppResult<()>;
    fn clear(&self) -> AppResult<()>;
}
