//! Embedded web content for ViewDeck.
//!
//! - [`ViewDeckManager`]: decks, views, switching and layout fan-out
//! - [`HostWindow`] / [`ContentSurface`]: the seam to the native window
//! - [`WryHost`]: wry child webviews behind that seam
//! - preload scripts, the IPC protocol, the theme bridge and the
//!   `viewdeck://` content provider

pub mod content;
pub mod events;
pub mod host;
pub mod ipc;
pub mod manager;
pub mod preload;
pub mod theme_bridge;
pub mod wry_host;

pub use content::ContentProvider;
pub use events::{EventSink, PageLoadState, ViewOrigin, WebViewEvent};
pub use host::{ContentLocator, ContentSurface, HostWindow, SurfaceSpec};
pub use ipc::{Channel, IpcMessage};
pub use manager::{Deck, ManagerOptions, OpenRequest, View, ViewDeckManager};
pub use preload::PreloadSet;
pub use theme_bridge::theme_script;
pub use wry_host::{WryHost, WrySurface};
