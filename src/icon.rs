//! Window icon decoding.
//!
//! Icons are configured as image file paths (.ico/.png) in the settings tree.
//! The shell decodes and scales them to the platform's standard big/small
//! icon dimensions and hands raw RGBA buffers across the platform seam; any
//! native icon handles stay on the platform side.

use std::fmt;
use std::path::Path;

use image::imageops::FilterType;

use crate::error::ShellError;
use crate::geometry::Size;

/// Decoded RGBA icon pixels at a fixed size.
pub struct WindowIcon {
    rgba: Vec<u8>,
    width: u32,
    height: u32,
}

impl WindowIcon {
    /// Raw RGBA bytes, row-major, 4 bytes per pixel.
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }
}

// Pixel dumps are useless in logs; show dimensions and byte length only.
impl fmt::Debug for WindowIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowIcon")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("bytes", &self.rgba.len())
            .finish()
    }
}

/// Decode the icon file at `path` and scale it to exactly `size`.
///
/// Multi-entry ICO files decode to the best-quality entry before scaling.
/// `size` axes are clamped to at least one pixel.
pub fn load_sized(path: &Path, size: Size) -> Result<WindowIcon, ShellError> {
    let img = image::open(path).map_err(|source| ShellError::IconLoad {
        path: path.to_path_buf(),
        source,
    })?;
    let width = size.width.max(1) as u32;
    let height = size.height.max(1) as u32;
    let rgba = img
        .resize_exact(width, height, FilterType::Lanczos3)
        .into_rgba8();
    Ok(WindowIcon {
        rgba: rgba.into_raw(),
        width,
        height,
    })
}
