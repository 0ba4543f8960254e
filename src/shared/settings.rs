use serde::{Deserialize, Serialize};
use tokio::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use directories::ProjectDirs;

use crate::shared::error::{AppError, AppResult};

pub const DEFAULT_SHORTCUT: &str = "CommandOrControl+Alt+V";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 300;
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;
pub const DEFAULT_LABEL_MAX_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Global shortcut that pops up the history menu
    pub shortcut: String,
    pub poll_interval_ms: u64,
    pub history_capacity: usize,
    /// Labels longer than this are cut and suffixed with "..."
    pub label_max_chars: usize,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            shortcut: DEFAULT_SHORTCUT.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            label_max_chars: DEFAULT_LABEL_MAX_CHARS,
        }
    }
}

impl AppSettings {
    pub fn get_settings_path() -> AppResult<PathBuf> {
        ProjectDirs::from("com", "transformpaste", "transform-paste")
            .map(|dirs| dirs.config_dir().join("settings.json"))
            .ok_or_else(|| AppError::Config("Failed to determine config directory".to_string()))
    }

    pub async fn load() -> AppResult<Self> {
        let path = Self::get_settings_path()?;
        Self::load_from(&path).await
    }

    /// Load settings from `path`, writing defaults there if the file does not exist yet
    pub async fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            let settings = Self::default();
            settings.save_to(path).await?;
            return Ok(settings);
        }

        let content = fs::read_to_string(path).await?;
        let settings: Self = serde_json::from_str(&content)?;
        Ok(settings.sanitized())
    }

    pub async fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).await?;
        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    // tokio::time::interval panics on a zero period
    fn sanitized(mut self) -> Self {
        self.poll_interval_ms = self.poll_interval_ms.max(1);
        self.history_capacity = self.history_capacity.max(1);
        self.label_max_chars = self.label_max_chars.max(1);
        if self.shortcut.trim().is_empty() {
            self.shortcut = DEFAULT_SHORTCUT.to_string();
        }
        self
    }
}
