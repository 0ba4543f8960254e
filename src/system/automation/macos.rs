use std::thread;
use std::time::Duration;
use core_graphics::event::{CGEvent, CGEventTapLocation, CGEventFlags, CGKeyCode};
use core_graphics::event_source::{CGEventSource, CGEventSourceStateID};

use crate::shared::error::{AppError, AppResult};

// Key code for macOS (ANSI standard)
const K_VK_ANSI_V: CGKeyCode = 0x09;

/// Time for the popup menu to close and focus to return to the target app
const MENU_DISMISS_DELAY: Duration = Duration::from_millis(50);

/// Check if the app has accessibility permissions
/// Uses native Accessibility API (AXIsProcessTrusted)
pub fn check_accessibility_permissions() -> bool {
    #[link(name = "ApplicationServices", kind = "framework")]
    extern "C" {
        fn AXIsProcessTrusted() -> bool;
    }
    unsafe { AXIsProcessTrusted() }
}

/// Helper to simulate a keystroke with modifiers
fn simulate_keypress(key_code: CGKeyCode, flags: CGEventFlags) -> AppResult<()> {
    let source = CGEventSource::new(CGEventSourceStateID::HIDSystemState)
        .map_err(|_| AppError::Automation("Failed to create CGEventSource".to_string()))?;

    let key_down = CGEvent::new_keyboard_event(source.clone(), key_code, true)
        .map_err(|_| AppError::Automation("Failed to create key down event".to_string()))?;
    key_down.set_flags(flags);
    key_down.post(CGEventTapLocation::HID);

    let key_up = CGEvent::new_keyboard_event(source, key_code, false)
        .map_err(|_| AppError::Automation("Failed to create key up event".to_string()))?;
    key_up.set_flags(flags);
    key_up.post(CGEventTapLocation::HID);

    Ok(())
}

/// Simulate Cmd+V (paste) using Core Graphics
pub fn simulate_cmd_v() -> AppResult<()> {
    if !check_accessibility_permissions() {
        return Err(AppError::AccessibilityDenied);
    }

    thread::sleep(MENU_DISMISS_DELAY);
    simulate_keypress(K_VK_ANSI_V, CGEventFlags::CGEventFlagCommand)?;
    tracing::debug!("posted Cmd+V");
    Ok(())
}
