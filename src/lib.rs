//! browser-shell - glue between native windows and an embedded browser engine
//!
//! This library maintains the registry mapping native window handles to
//! logical browser windows and forwards window lifecycle events (creation,
//! resize, focus, destruction) to the embedded engine's browser instances.
//! The OS windowing system and the engine itself are reached through the
//! [`platform::Platform`] and [`engine::Engine`] seams; the embedding
//! application provides both and routes its message loop into
//! [`shell::Shell`].

pub mod browser_window;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod icon;
pub mod logging;
pub mod platform;
pub mod registry;
pub mod settings;
pub mod shell;
pub mod utils;

#[cfg(test)]
mod test_support;
