//! Native windowing seam.
//!
//! The shell reaches the OS windowing system only through the [`Platform`]
//! trait: handle relationship queries (owner/parent), geometry queries, title
//! and icon application, and the fatal error surface. The embedding
//! application provides the real implementation; tests script a fake.
//!
//! All calls happen on the UI message thread. Implementations are not
//! required to be `Send` or `Sync`; the shell holds them behind `Rc`.

use std::fmt;

use crate::geometry::{Rect, Size};
use crate::icon::WindowIcon;

/// Opaque native window handle.
///
/// Wraps the raw OS handle value without interpreting it. The value is only
/// ever compared, hashed, and passed back to the platform seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    /// Create a handle from the raw OS value.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw OS value.
    pub fn raw(self) -> u64 {
        self.0
    }
}

// Hex formatting matches how OS tooling prints handles, keeping log
// lines greppable against spy/inspector output.
impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.0)
    }
}

/// Which of the two per-window OS icon slots to apply an icon to.
///
/// The OS keeps a big icon (task switcher) and a small icon (title bar) per
/// window, each with its own standard dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSlot {
    Big,
    Small,
}

/// Native windowing operations the shell depends on.
///
/// Queries return `None` when the OS rejects the handle (destroyed or foreign
/// windows) or when the relationship does not exist.
pub trait Platform {
    /// Owner window of `handle`, if any. Popups opened by a browser instance
    /// are owned by the window that opened them.
    fn owner(&self, handle: WindowHandle) -> Option<WindowHandle>;

    /// Parent window of `handle`, if any. The browser instance's host control
    /// is a child of the window that embeds it.
    fn parent(&self, handle: WindowHandle) -> Option<WindowHandle>;

    /// Client area of `handle` in window-local coordinates.
    fn client_rect(&self, handle: WindowHandle) -> Option<Rect>;

    /// Full window rectangle of `handle` in screen coordinates.
    fn window_rect(&self, handle: WindowHandle) -> Option<Rect>;

    /// Set the window title.
    fn set_title(&self, handle: WindowHandle, title: &str);

    /// Apply `icon` to the given slot of `handle`.
    ///
    /// Any native icon handle the implementation creates from the pixel data
    /// stays on its side of the seam; releasing it on window destruction is
    /// the implementation's responsibility.
    fn set_icon(&self, handle: WindowHandle, slot: IconSlot, icon: &WindowIcon);

    /// Standard pixel dimensions the OS expects for `slot`.
    fn icon_size(&self, slot: IconSlot) -> Size;

    /// Report an unrecoverable failure tied to `handle`.
    ///
    /// Production implementations display `message` to the user and terminate
    /// the process; they are not expected to return. The signature returns so
    /// test doubles can record the call instead.
    fn fatal_error(&self, handle: WindowHandle, message: &str);
}
