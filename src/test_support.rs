//! Scripted doubles for the platform and engine seams, shared across the
//! unit tests. Answers are seeded per handle; every mutating call is
//! recorded for assertions.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use anyhow::anyhow;

use crate::engine::{Browser, BrowserCreateRequest, Engine};
use crate::geometry::{Bounds, Rect, Size};
use crate::icon::WindowIcon;
use crate::platform::{IconSlot, Platform, WindowHandle};

#[derive(Default)]
pub struct FakePlatform {
    owners: RefCell<HashMap<WindowHandle, WindowHandle>>,
    parents: RefCell<HashMap<WindowHandle, WindowHandle>>,
    client_rects: RefCell<HashMap<WindowHandle, Rect>>,
    window_rects: RefCell<HashMap<WindowHandle, Rect>>,
    /// Recorded `set_title` calls, oldest first.
    pub titles: RefCell<Vec<(WindowHandle, String)>>,
    /// Recorded `set_icon` calls with the applied icon's dimensions.
    pub icons: RefCell<Vec<(WindowHandle, IconSlot, Size)>>,
    /// Recorded `fatal_error` calls.
    pub fatal_errors: RefCell<Vec<(WindowHandle, String)>>,
}

impl FakePlatform {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn set_owner(&self, handle: WindowHandle, owner: WindowHandle) {
        self.owners.borrow_mut().insert(handle, owner);
    }

    pub fn set_parent(&self, handle: WindowHandle, parent: WindowHandle) {
        self.parents.borrow_mut().insert(handle, parent);
    }

    pub fn set_client_rect(&self, handle: WindowHandle, rect: Rect) {
        self.client_rects.borrow_mut().insert(handle, rect);
    }

    pub fn set_window_rect(&self, handle: WindowHandle, rect: Rect) {
        self.window_rects.borrow_mut().insert(handle, rect);
    }
}

impl Platform for FakePlatform {
    fn owner(&self, handle: WindowHandle) -> Option<WindowHandle> {
        self.owners.borrow().get(&handle).copied()
    }

    fn parent(&self, handle: WindowHandle) -> Option<WindowHandle> {
        self.parents.borrow().get(&handle).copied()
    }

    fn client_rect(&self, handle: WindowHandle) -> Option<Rect> {
        self.client_rects.borrow().get(&handle).copied()
    }

    fn window_rect(&self, handle: WindowHandle) -> Option<Rect> {
        self.window_rects.borrow().get(&handle).copied()
    }

    fn set_title(&self, handle: WindowHandle, title: &str) {
        self.titles.borrow_mut().push((handle, title.to_string()));
    }

    fn set_icon(&self, handle: WindowHandle, slot: IconSlot, icon: &WindowIcon) {
        let size = Size::new(icon.width() as i32, icon.height() as i32);
        self.icons.borrow_mut().push((handle, slot, size));
    }

    fn icon_size(&self, slot: IconSlot) -> Size {
        match slot {
            IconSlot::Big => Size::new(32, 32),
            IconSlot::Small => Size::new(16, 16),
        }
    }

    fn fatal_error(&self, handle: WindowHandle, message: &str) {
        self.fatal_errors
            .borrow_mut()
            .push((handle, message.to_string()));
    }
}

#[derive(Default)]
pub struct FakeEngine {
    /// Recorded creation requests, including rejected ones.
    pub requests: RefCell<Vec<BrowserCreateRequest>>,
    /// When set, every creation request is rejected.
    pub fail: Cell<bool>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Engine for FakeEngine {
    fn create_browser(&self, request: BrowserCreateRequest) -> anyhow::Result<()> {
        self.requests.borrow_mut().push(request);
        if self.fail.get() {
            return Err(anyhow!("engine not initialized"));
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct FakeBrowser {
    /// Recorded `set_bounds` calls, oldest first.
    pub bounds: RefCell<Vec<Bounds>>,
    pub focus_count: Cell<usize>,
}

impl FakeBrowser {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }
}

impl Browser for FakeBrowser {
    fn set_bounds(&self, bounds: Bounds) {
        self.bounds.borrow_mut().push(bounds);
    }

    fn focus(&self) {
        self.focus_count.set(self.focus_count.get() + 1);
    }
}
