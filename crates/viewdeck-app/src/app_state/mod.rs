//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the window, the view-deck manager, the split geometry
//! and the devtools shortcuts.

mod core;
mod event_handler;
mod geometry;
mod init;
mod ipc_dispatch;
mod polling;
mod resize_drag;
mod shutdown;
mod types;

pub use core::ViewDeckApp;
