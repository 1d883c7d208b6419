//! Settings module - window appearance and sizing preferences
//!
//! This module provides functionality for:
//! - Loading settings.json from next to the executable (or an explicit path)
//! - Type definitions for the window sections of the settings document
//! - Derived resize constraints for the main window
//!
//! # Module Structure
//!
//! - `types` - Settings struct definitions (Settings, MainWindowSettings, etc.)
//! - `loader` - File system loading and parsing

mod loader;
mod types;

// Re-export loader
pub use loader::load_settings;

// Re-export types that are used externally
pub use types::{MainWindowSettings, PopupWindowSettings, Settings, SizeConstraints};

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
