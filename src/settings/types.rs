//! Settings type definitions
//!
//! Struct definitions for the window sections of settings.json. Field names
//! match the JSON keys exactly, so the document deserializes without renames.

use serde::{Deserialize, Serialize};

use crate::geometry::Size;

// ============================================
// MAIN WINDOW
// ============================================

/// Settings for the main application window.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MainWindowSettings {
    /// Window title. Empty means untitled; popups fall back to this before
    /// the executable name.
    #[serde(default)]
    pub title: String,
    /// Path to the window icon (.ico or .png). Empty means no icon is set.
    #[serde(default)]
    pub icon: String,
    /// Minimum [width, height] while resizing. A zero axis is unconstrained.
    #[serde(default)]
    pub minimum_size: [i32; 2],
    /// Maximum [width, height] while resizing. A zero axis is unconstrained.
    #[serde(default)]
    pub maximum_size: [i32; 2],
}

// ============================================
// POPUP WINDOW
// ============================================

/// Settings for popup windows opened by page content.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PopupWindowSettings {
    /// Title applied to every popup. Empty means popups follow the page
    /// title instead.
    #[serde(default)]
    pub fixed_title: String,
    /// Path to the popup icon. Empty means no icon is set.
    #[serde(default)]
    pub icon: String,
}

// ============================================
// SETTINGS ROOT
// ============================================

/// Root settings document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub main_window: MainWindowSettings,
    #[serde(default)]
    pub popup_window: PopupWindowSettings,
}

impl Settings {
    /// Main window title, if one is configured.
    pub fn main_title(&self) -> Option<&str> {
        non_empty(&self.main_window.title)
    }

    /// Fixed popup title, if one is configured.
    pub fn popup_title(&self) -> Option<&str> {
        non_empty(&self.popup_window.fixed_title)
    }

    /// Icon path for the given window kind, if one is configured.
    pub fn icon_path(&self, popup: bool) -> Option<&str> {
        if popup {
            non_empty(&self.popup_window.icon)
        } else {
            non_empty(&self.main_window.icon)
        }
    }

    /// Resize constraints for the main window.
    pub fn window_constraints(&self) -> SizeConstraints {
        SizeConstraints {
            minimum: Size::new(
                self.main_window.minimum_size[0],
                self.main_window.minimum_size[1],
            ),
            maximum: Size::new(
                self.main_window.maximum_size[0],
                self.main_window.maximum_size[1],
            ),
        }
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

// ============================================
// SIZE CONSTRAINTS
// ============================================

/// Resize bounds for the main window, captured once at window construction.
/// A zero axis leaves that side unconstrained.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SizeConstraints {
    pub minimum: Size,
    pub maximum: Size,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_titles_read_as_none() {
        let settings = Settings::default();
        assert_eq!(settings.main_title(), None);
        assert_eq!(settings.popup_title(), None);
    }

    #[test]
    fn configured_titles_read_back() {
        let settings = Settings {
            main_window: MainWindowSettings {
                title: "My App".to_string(),
                ..Default::default()
            },
            popup_window: PopupWindowSettings {
                fixed_title: "My App Popup".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(settings.main_title(), Some("My App"));
        assert_eq!(settings.popup_title(), Some("My App Popup"));
    }

    #[test]
    fn icon_path_selects_section_by_window_kind() {
        let settings = Settings {
            main_window: MainWindowSettings {
                icon: "main.ico".to_string(),
                ..Default::default()
            },
            popup_window: PopupWindowSettings {
                icon: "popup.ico".to_string(),
                ..Default::default()
            },
        };
        assert_eq!(settings.icon_path(false), Some("main.ico"));
        assert_eq!(settings.icon_path(true), Some("popup.ico"));
    }

    #[test]
    fn blank_icon_paths_read_as_none() {
        let settings = Settings::default();
        assert_eq!(settings.icon_path(false), None);
        assert_eq!(settings.icon_path(true), None);
    }

    #[test]
    fn window_constraints_copy_both_sizes() {
        let settings = Settings {
            main_window: MainWindowSettings {
                minimum_size: [200, 150],
                maximum_size: [1024, 768],
                ..Default::default()
            },
            ..Default::default()
        };
        let constraints = settings.window_constraints();
        assert_eq!(constraints.minimum, Size::new(200, 150));
        assert_eq!(constraints.maximum, Size::new(1024, 768));
    }

    #[test]
    fn default_constraints_are_unconstrained() {
        let constraints = Settings::default().window_constraints();
        assert_eq!(constraints.minimum, Size::new(0, 0));
        assert_eq!(constraints.maximum, Size::new(0, 0));
    }
}
