//! Window geometry primitives shared by the platform and engine seams.
//!
//! Coordinates follow the native convention: top-left origin, y increasing
//! downward, all values in physical pixels.

/// Width/height pair in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Edge-based rectangle, mirroring the shape the OS reports for window and
/// client areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Origin-based placement used when positioning a browser instance inside its
/// host window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    /// Placement that exactly fills `rect`.
    pub fn fill(rect: Rect) -> Self {
        Self {
            x: rect.left,
            y: rect.top,
            width: rect.width(),
            height: rect.height(),
        }
    }
}

/// Tracking-size query payload for the OS "get min/max info" message.
///
/// The OS pre-fills both fields with its own limits; handlers overwrite the
/// axes they want to constrain and leave the rest untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MinMaxInfo {
    pub min_track_size: Size,
    pub max_track_size: Size,
}
