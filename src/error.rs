use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, warn};

/// Domain-specific errors for browser-shell.
///
/// These stay inside the crate: callers on the message-dispatch path only ever
/// see `Option` plus a log line, never a typed error. The fatal path (engine
/// creation failure on a main window) does not go through this enum at all; it
/// is routed straight to `Platform::fatal_error`.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Failed to read settings file '{path}': {source}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{path}': {source}")]
    SettingsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to load icon from '{path}': {source}")]
    IconLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

pub type Result<T> = std::result::Result<T, ShellError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the window should keep working.
///
/// Includes file/line information via `#[track_caller]` so the log line points
/// at the call site, not at this module.
///
/// # Examples
///
/// ```ignore
/// use browser_shell::error::ResultExt;
///
/// // Log the failed size and keep the previous icon
/// let icon = icon::load_sized(path, size).warn_on_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
