//! Events emitted by content surfaces.
//!
//! wry invokes its handlers on the event-loop thread but through `'static`
//! closures, so surfaces push into a shared sink that the app drains once
//! per loop iteration.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use viewdeck_common::TrustLevel;

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Which view an event came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewOrigin {
    pub deck: String,
    pub key: String,
    pub trust: TrustLevel,
}

/// Events emitted by a surface.
#[derive(Debug, Clone)]
pub enum WebViewEvent {
    PageLoad {
        origin: ViewOrigin,
        state: PageLoadState,
        url: String,
    },
    TitleChanged {
        origin: ViewOrigin,
        title: String,
    },
    /// An IPC message was received from the page. The body is valid JSON.
    IpcMessage { origin: ViewOrigin, body: String },
    /// A navigation was blocked by the trust-level policy.
    NavigationBlocked { origin: ViewOrigin, url: String },
}

/// Shared, drainable queue of [`WebViewEvent`]s.
#[derive(Debug, Clone, Default)]
pub struct EventSink {
    events: Arc<Mutex<Vec<WebViewEvent>>>,
}

impl EventSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, event: WebViewEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }

    /// Take every pending event.
    pub fn drain(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }
}
