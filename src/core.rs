//! Platform-independent logic: clipboard history, case transforms and the popup menu model

pub mod actions;
pub mod clipboard;
pub mod menu;
pub mod transform;
