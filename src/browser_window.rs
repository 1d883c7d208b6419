//! A native window paired with its embedded browser instance.
//!
//! [`BrowserWindow`] carries the per-window state the shell tracks: whether
//! the window is a popup, the settings-driven title and icon applied at
//! construction, the cached resize constraints, and the asynchronously
//! attached browser instance.

use std::path::Path;
use std::rc::Rc;

use tracing::{debug, error, warn};

use crate::engine::{BrowserCreateRequest, BrowserRef, Engine};
use crate::geometry::{Bounds, MinMaxInfo, Rect};
use crate::icon;
use crate::platform::{IconSlot, Platform, WindowHandle};
use crate::settings::{Settings, SizeConstraints};
use crate::utils;

/// Message shown when the engine rejects a browser creation request. The
/// main window is useless without its browser, so this path terminates the
/// application.
const BROWSER_CREATE_FAILED: &str = "Could not create browser control.\nExiting application.";

/// Attachment state of the embedded browser instance.
///
/// Creation is asynchronous: a window starts out pending and flips to
/// attached exactly once, when the engine reports the instance ready.
enum BrowserSlot {
    Pending,
    Attached(BrowserRef),
}

/// A native window hosting one embedded browser instance.
///
/// Construction applies the settings-driven title and icon and, for main
/// windows, requests a browser instance from the engine. The instance
/// arrives later through [`BrowserWindow::attach_browser`]; size events
/// before that are dropped with a warning and replayed on attach.
pub struct BrowserWindow {
    handle: WindowHandle,
    popup: bool,
    platform: Rc<dyn Platform>,
    settings: Rc<Settings>,
    /// Captured once at construction; settings edits do not retroactively
    /// change a live window.
    constraints: SizeConstraints,
    browser: BrowserSlot,
}

impl BrowserWindow {
    /// Wrap the native window `handle` and prepare it for hosting a browser.
    ///
    /// Main windows issue a creation request against `engine` pointing at
    /// `start_url`; a rejected request is fatal. Popup instances are created
    /// inside the engine, so popups skip the request entirely.
    pub fn new(
        handle: WindowHandle,
        popup: bool,
        settings: Rc<Settings>,
        platform: Rc<dyn Platform>,
        engine: &dyn Engine,
        start_url: &str,
    ) -> Self {
        let window = Self {
            handle,
            popup,
            constraints: settings.window_constraints(),
            settings,
            platform,
            browser: BrowserSlot::Pending,
        };

        if window.popup {
            window.apply_popup_title();
        }
        window.apply_settings_icon();

        if window.popup {
            debug!(handle = %window.handle, "Browser window created for popup");
        } else {
            window.request_browser(engine, start_url);
        }

        window
    }

    /// Attach the browser instance created for this window.
    ///
    /// Ignores every instance after the first; the engine reports each
    /// instance exactly once, so a second call means misrouted wiring.
    pub fn attach_browser(&mut self, browser: BrowserRef) {
        if matches!(self.browser, BrowserSlot::Attached(_)) {
            warn!(handle = %self.handle, "Browser instance already attached, keeping the first");
            return;
        }
        self.browser = BrowserSlot::Attached(browser);
        // The window may have been resized while creation was in flight.
        self.on_size();
    }

    /// Fit the browser instance to the window's current client area.
    pub fn on_size(&self) {
        match &self.browser {
            BrowserSlot::Attached(browser) => match self.platform.client_rect(self.handle) {
                Some(rect) => browser.set_bounds(Bounds::fill(rect)),
                None => {
                    warn!(handle = %self.handle, "Failed to query client area, browser not moved");
                }
            },
            BrowserSlot::Pending => {
                warn!(handle = %self.handle, "Cannot resize browser, instance not created yet");
            }
        }
    }

    /// Clamp the OS resize tracking limits to the configured constraints.
    ///
    /// Only the main window is constrained. Each axis applies independently;
    /// a zero axis leaves the OS limit untouched.
    pub fn on_get_min_max_info(&self, info: &mut MinMaxInfo) {
        if self.popup {
            return;
        }
        let SizeConstraints { minimum, maximum } = self.constraints;
        if minimum.width > 0 {
            info.min_track_size.width = minimum.width;
        }
        if minimum.height > 0 {
            info.min_track_size.height = minimum.height;
        }
        if maximum.width > 0 {
            info.max_track_size.width = maximum.width;
        }
        if maximum.height > 0 {
            info.max_track_size.height = maximum.height;
        }
    }

    /// Forward keyboard focus to the browser instance.
    ///
    /// Always reports the focus event as handled, even before the instance
    /// exists; the OS default would move focus to the bare host window.
    pub fn set_focus(&self) -> bool {
        if let BrowserSlot::Attached(browser) = &self.browser {
            browser.focus();
        }
        true
    }

    /// Set the native window title.
    ///
    /// Called by the embedding application's title-change handler for
    /// windows where [`BrowserWindow::uses_page_title`] returns true.
    pub fn set_title(&self, title: &str) {
        self.platform.set_title(self.handle, title);
    }

    /// Whether this window's title should follow the page title.
    ///
    /// Only popups without a fixed title track the page.
    pub fn uses_page_title(&self) -> bool {
        self.popup && self.settings.popup_title().is_none()
    }

    /// The attached browser instance, if creation has completed.
    pub fn browser(&self) -> Option<BrowserRef> {
        match &self.browser {
            BrowserSlot::Attached(browser) => Some(Rc::clone(browser)),
            BrowserSlot::Pending => None,
        }
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn is_popup(&self) -> bool {
        self.popup
    }

    /// Popup titles come from settings: the fixed popup title, then the main
    /// window title, then the executable name. Main window titles are set by
    /// the embedding application when it creates the window.
    fn apply_popup_title(&self) {
        let title = self
            .settings
            .popup_title()
            .or_else(|| self.settings.main_title())
            .map(str::to_string)
            .unwrap_or_else(utils::executable_name);
        self.platform.set_title(self.handle, &title);
    }

    /// Load the configured icon once per OS slot, scaled to that slot's
    /// dimensions. A failed load warns and leaves the slot as it was.
    fn apply_settings_icon(&self) {
        let path = match self.settings.icon_path(self.popup) {
            Some(path) => Path::new(path),
            None => return,
        };
        for slot in [IconSlot::Big, IconSlot::Small] {
            let size = self.platform.icon_size(slot);
            match icon::load_sized(path, size) {
                Ok(loaded) => self.platform.set_icon(self.handle, slot, &loaded),
                Err(e) => {
                    warn!(
                        error = %e,
                        slot = ?slot,
                        path = %path.display(),
                        "Failed to set window icon from settings"
                    );
                }
            }
        }
    }

    fn request_browser(&self, engine: &dyn Engine, url: &str) {
        let bounds = match self.platform.window_rect(self.handle) {
            Some(rect) => rect,
            None => {
                error!(handle = %self.handle, "Failed to query window rectangle for browser creation");
                Rect::default()
            }
        };
        let request = BrowserCreateRequest {
            url: url.to_string(),
            parent: self.handle,
            bounds,
        };
        if let Err(e) = engine.create_browser(request) {
            error!(error = %e, handle = %self.handle, "Browser creation request failed");
            self.platform.fatal_error(self.handle, BROWSER_CREATE_FAILED);
        }
    }
}

impl Drop for BrowserWindow {
    fn drop(&mut self) {
        debug!(handle = %self.handle, popup = self.popup, "Browser window destroyed");
    }
}

#[cfg(test)]
#[path = "browser_window_tests.rs"]
mod tests;
