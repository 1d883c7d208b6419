//! Handle-to-window registry.
//!
//! OS messages arrive addressed to raw native handles; the registry maps them
//! back to the [`BrowserWindow`] hosting the content. Lookups fall back from
//! the exact handle to its owner and then its parent, which routes messages
//! reported against popup handles and the browser's host control. The
//! registry owns its windows; removing an entry drops the window.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::rc::Rc;

use tracing::{debug, warn};

use crate::browser_window::BrowserWindow;
use crate::platform::{Platform, WindowHandle};

pub struct WindowRegistry {
    platform: Rc<dyn Platform>,
    windows: HashMap<WindowHandle, BrowserWindow>,
}

impl WindowRegistry {
    pub fn new(platform: Rc<dyn Platform>) -> Self {
        Self {
            platform,
            windows: HashMap::new(),
        }
    }

    /// Register `window` under its handle.
    ///
    /// A handle registers at most once; a second store keeps the existing
    /// window and drops the incoming one.
    pub fn store(&mut self, window: BrowserWindow) {
        let handle = window.handle();
        debug!(handle = %handle, popup = window.is_popup(), "Storing browser window");
        match self.windows.entry(handle) {
            Entry::Vacant(entry) => {
                entry.insert(window);
            }
            Entry::Occupied(_) => {
                warn!(handle = %handle, "Browser window already stored for handle, keeping existing");
            }
        }
    }

    /// Drop the window registered under `handle`.
    ///
    /// Removal is exact: the owner and parent fallbacks do not apply, so a
    /// child handle never evicts the window that hosts it.
    pub fn remove(&mut self, handle: WindowHandle) {
        debug!(handle = %handle, "Removing browser window");
        if self.windows.remove(&handle).is_none() {
            warn!(handle = %handle, "No browser window stored for handle, nothing removed");
        }
    }

    /// Window responsible for `handle`.
    ///
    /// Tries the exact handle first, then the handle's owner window, then its
    /// parent. Popups and the browser's host control report events against
    /// their own handles while the logical window is registered under the
    /// handle that hosts them.
    pub fn find(&self, handle: WindowHandle) -> Option<&BrowserWindow> {
        let key = self.resolve(handle)?;
        self.windows.get(&key)
    }

    /// Mutable variant of [`WindowRegistry::find`], same fallback order.
    pub fn find_mut(&mut self, handle: WindowHandle) -> Option<&mut BrowserWindow> {
        let key = self.resolve(handle)?;
        self.windows.get_mut(&key)
    }

    /// Drop every window. Called once at shutdown, after the engine has
    /// released its instances.
    pub fn clear(&mut self) {
        debug!(count = self.windows.len(), "Clearing browser window registry");
        self.windows.clear();
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn resolve(&self, handle: WindowHandle) -> Option<WindowHandle> {
        if self.windows.contains_key(&handle) {
            return Some(handle);
        }
        if let Some(owner) = self.platform.owner(handle) {
            if self.windows.contains_key(&owner) {
                return Some(owner);
            }
        }
        if let Some(parent) = self.platform.parent(handle) {
            if self.windows.contains_key(&parent) {
                return Some(parent);
            }
        }
        // Expected while a window is still being created
        debug!(handle = %handle, "No browser window found for handle");
        None
    }
}
