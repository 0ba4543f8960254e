use std::sync::{Arc, Mutex, MutexGuard};

use crate::shared::settings::DEFAULT_HISTORY_CAPACITY;

/// Blank means empty after trimming whitespace and byte order marks
fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

/// Compute the history that results from sampling `text`.
///
/// Returns `None` when the sample leaves the history unchanged: blank text,
/// or text equal to the current head. Only the head is compared, so a text
/// copied again after something else was copied is recorded a second time.
pub fn next_history(current: &[String], text: &str, capacity: usize) -> Option<Vec<String>> {
    if is_blank(text) {
        return None;
    }
    if current.first().map(String::as_str) == Some(text) {
        return None;
    }

    let mut next = Vec::with_capacity(capacity.min(current.len() + 1));
    next.push(text.to_string());
    next.extend(current.iter().take(capacity.saturating_sub(1)).cloned());
    Some(next)
}

/// Shared, most-recent-first list of copied texts
#[derive(Clone)]
pub struct ClipboardHistory {
    items: Arc<Mutex<Vec<String>>>,
    capacity: usize,
}

impl ClipboardHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Arc::new(Mutex::new(Vec::new())),
            capacity: capacity.max(1),
        }
    }

    fn lock_items(&self) -> MutexGuard<'_, Vec<String>> {
        match self.items.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                tracing::warn!("clipboard history mutex poisoned, recovering");
                poisoned.into_inner()
            }
        }
    }

    /// Record a sampled clipboard text. Returns true if the history changed.
    pub fn record(&self, text: &str) -> bool {
        let mut items = self.lock_items();
        match next_history(&items, text, self.capacity) {
            Some(next) => {
                *items = next;
                tracing::debug!(count = items.len(), "added clipboard history entry");
                true
            }
            None => false,
        }
    }

    /// Snapshot of all entries, most recent first
    pub fn items(&self) -> Vec<String> {
        self.lock_items().clone()
    }

    pub fn clear(&self) {
        self.lock_items().clear();
        tracing::info!("clipboard history cleared");
    }

    pub fn count(&self) -> usize {
        self.lock_items().len()
    }
}

impl Default for ClipboardHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
