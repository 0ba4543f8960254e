//! Automation module for synthesizing the paste keystroke
//!
//! macOS posts Cmd+V through Core Graphics. Other platforms have no
//! implementation yet and report `Unsupported`.

#[cfg(target_os = "macos")]
pub mod macos;

use crate::core::actions::Paster;
use crate::shared::error::AppResult;

/// Paster backed by the host OS
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemPaster;

impl Paster for SystemPaster {
    #[cfg(target_os = "macos")]
    fn paste(&self) -> AppResult<()> {
        macos::simulate_cmd_v()
    }

    #[cfg(not(target_os = "macos"))]
    fn paste(&self) -> AppResult<()> {
        Err(crate::shared::error::AppError::Unsupported(
            "paste keystroke synthesis".to_string(),
        ))
    }
}

#[cfg(target_os = "macos")]
pub use macos::check_accessibility_permissions;

#[cfg(not(target_os = "macos"))]
pub fn check_accessibility_permissions() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn test_paste_unsupported_off_macos() {
        let result = SystemPaster.paste();
        assert!(matches!(
            result,
            Err(crate::shared::error::AppError::Unsupported(_))
        ));
        assert!(check_accessibility_permissions());
    }
}
