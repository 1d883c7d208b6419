//! Embedded rendering engine seam.
//!
//! The engine library (message loop integration, render process, network
//! stack) lives outside this crate. The shell only issues creation requests
//! through [`Engine`] and drives attached instances through [`Browser`].
//!
//! Instance creation is asynchronous: a successful [`Engine::create_browser`]
//! means the request was accepted, not that an instance exists. The engine
//! reports readiness later through the embedder's callback layer, which hands
//! the instance to `Shell::on_browser_created`.

use std::rc::Rc;

use crate::geometry::{Bounds, Rect};
use crate::platform::WindowHandle;

/// Parameters for creating a browser instance inside a host window.
#[derive(Debug, Clone)]
pub struct BrowserCreateRequest {
    /// Address the new instance navigates to.
    pub url: String,
    /// Native window that will host the instance as a child control.
    pub parent: WindowHandle,
    /// Host window rectangle at request time. The instance is repositioned to
    /// the client area once it attaches, so this is only the initial guess.
    pub bounds: Rect,
}

/// Creation entry point into the embedded rendering engine.
pub trait Engine {
    /// Request a new browser instance hosted in `request.parent`.
    ///
    /// Errors cover the request itself (engine not initialized, resources
    /// exhausted), not later instance failures. Only main windows issue this
    /// call; popup instances are created inside the engine.
    fn create_browser(&self, request: BrowserCreateRequest) -> anyhow::Result<()>;
}

/// A live browser instance attached to a host window.
pub trait Browser {
    /// Move the instance's host control to `bounds` within the host window's
    /// client area, in one batched placement call.
    fn set_bounds(&self, bounds: Bounds);

    /// Give the instance keyboard focus.
    fn focus(&self);
}

/// Shared handle to an attached instance.
///
/// `Rc`, not `Arc`: instances are only touched on the UI message thread.
pub type BrowserRef = Rc<dyn Browser>;
