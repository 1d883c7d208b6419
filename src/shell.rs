//! Application context tying the pieces together.
//!
//! The embedding application creates one [`Shell`] at startup and routes OS
//! window messages and engine callbacks into it for the life of the message
//! loop. The shell owns the window registry; platform, engine, and settings
//! are shared seams.

use std::rc::Rc;

use tracing::{debug, info, warn};

use crate::browser_window::BrowserWindow;
use crate::engine::{BrowserRef, Engine};
use crate::geometry::MinMaxInfo;
use crate::platform::{Platform, WindowHandle};
use crate::registry::WindowRegistry;
use crate::settings::Settings;

pub struct Shell {
    settings: Rc<Settings>,
    platform: Rc<dyn Platform>,
    engine: Rc<dyn Engine>,
    start_url: String,
    registry: WindowRegistry,
}

impl Shell {
    /// Build the context the message-dispatch layer holds for the process
    /// lifetime. `start_url` is the address main windows navigate to.
    pub fn new(
        settings: Settings,
        platform: Rc<dyn Platform>,
        engine: Rc<dyn Engine>,
        start_url: &str,
    ) -> Self {
        info!(start_url = %start_url, "Shell created");
        Self {
            settings: Rc::new(settings),
            registry: WindowRegistry::new(Rc::clone(&platform)),
            platform,
            engine,
            start_url: start_url.to_string(),
        }
    }

    /// Wrap a native window the application just created and register it.
    ///
    /// Main windows request their browser instance here; a rejected request
    /// is fatal through the platform seam.
    pub fn create_window(&mut self, handle: WindowHandle, popup: bool) {
        let window = BrowserWindow::new(
            handle,
            popup,
            Rc::clone(&self.settings),
            Rc::clone(&self.platform),
            self.engine.as_ref(),
            &self.start_url,
        );
        self.registry.store(window);
    }

    /// Drop the window registered for `handle`. Routed from the OS
    /// window-destroyed message; matches the exact handle only.
    pub fn remove_window(&mut self, handle: WindowHandle) {
        self.registry.remove(handle);
    }

    /// Attach an instance the engine finished creating.
    ///
    /// Popup instances are created inside the engine, so the logical window
    /// for a popup is registered here on first sight. Main window instances
    /// resolve through the registry's owner/parent fallback because the
    /// engine reports the handle of its own host control.
    pub fn on_browser_created(&mut self, handle: WindowHandle, popup: bool, browser: BrowserRef) {
        if popup {
            let window = BrowserWindow::new(
                handle,
                true,
                Rc::clone(&self.settings),
                Rc::clone(&self.platform),
                self.engine.as_ref(),
                &self.start_url,
            );
            self.registry.store(window);
        }
        match self.registry.find_mut(handle) {
            Some(window) => window.attach_browser(browser),
            None => {
                warn!(handle = %handle, "Browser instance created for an unknown window");
            }
        }
    }

    /// Fit the browser to its window after a client-area size change.
    pub fn on_size(&self, handle: WindowHandle) {
        if let Some(window) = self.registry.find(handle) {
            window.on_size();
        }
    }

    /// Apply the configured resize limits during an OS tracking-size query.
    pub fn on_get_min_max_info(&self, handle: WindowHandle, info: &mut MinMaxInfo) {
        if let Some(window) = self.registry.find(handle) {
            window.on_get_min_max_info(info);
        }
    }

    /// Hand keyboard focus to the window's browser. Returns whether the
    /// focus event was handled.
    pub fn on_focus(&self, handle: WindowHandle) -> bool {
        match self.registry.find(handle) {
            Some(window) => window.set_focus(),
            None => false,
        }
    }

    /// Drop every window. Called once the message loop has ended and the
    /// engine is shutting down.
    pub fn shutdown(&mut self) {
        debug!("Shell shutting down");
        self.registry.clear();
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }
}
