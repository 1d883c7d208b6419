//! Shared utility functions for browser-shell

/// Name of the host executable without directory or extension.
///
/// Used as the last resort in the popup title fallback chain when neither a
/// fixed popup title nor a main window title is configured. Falls back to the
/// crate name if the executable path cannot be resolved (some embedders exec
/// with an empty argv[0]).
pub fn executable_name() -> String {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(|path| path.file_stem())
        .and_then(|stem| stem.to_str())
        .map(|stem| stem.to_string())
        .unwrap_or_else(|| "browser-shell".to_string())
}
