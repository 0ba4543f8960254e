use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Clipboard Error: {0}")]
    Clipboard(String),

    #[error("Automation Error: {0}")]
    Automation(String),

    /// Accessibility permission is required to post synthetic key events
    #[error("Accessibility permissions denied. Please enable in System Settings > Privacy & Security > Accessibility.")]
    AccessibilityDenied,

    #[error("Shortcut Error: {0}")]
    Shortcut(String),

    #[error("Window Error: {0}")]
    Window(String),

    #[error("Config Error: {0}")]
    Config(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("Serialization error: {}", err))
    }
}

impl From<tauri::Error> for AppError {
    fn from(err: tauri::Error) -> Self {
        AppError::Window(err.to_string())
    }
}

impl From<tauri_plugin_clipboard_manager::Error> for AppError {
    fn from(err: tauri_plugin_clipboard_manager::Error) -> Self {
        AppError::Clipboard(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let err: AppError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert!(matches!(err, AppError::Io(ref msg) if msg == "missing"));
    }

    #[test]
    fn test_json_error_is_config_error() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: AppError = parse.into();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().starts_with("Config Error: Serialization error"));
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AppError::Unsupported("paste".to_string()).to_string(),
            "Not supported on this platform: paste"
        );
        assert!(AppError::AccessibilityDenied.to_string().contains("Accessibility"));
    }
}
