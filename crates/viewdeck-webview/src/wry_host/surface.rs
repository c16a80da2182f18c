use viewdeck_common::{HostError, PixelRect};
use wry::WebView;

use crate::events::ViewOrigin;
use crate::host::ContentSurface;

use super::bounds::pixel_rect_to_wry;

/// A `wry::WebView` embedded as a child of the host window.
pub struct WrySurface {
    pub(super) webview: WebView,
    pub(super) origin: ViewOrigin,
}

impl WrySurface {
    /// Which deck and key this surface was built for.
    pub fn origin(&self) -> &ViewOrigin {
        &self.origin
    }

    /// Deliver a message to the page's `window.viewdeck.on(kind, ...)`
    /// handler.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), HostError> {
        self.evaluate_script(&crate::ipc::js_dispatch_message(kind, payload))
    }
}

impl ContentSurface for WrySurface {
    fn set_bounds(&mut self, bounds: PixelRect) -> Result<(), HostError> {
        self.webview
            .set_bounds(pixel_rect_to_wry(bounds))
            .map_err(|e| HostError::BoundsRejected(e.to_string()))
    }

    fn evaluate_script(&self, js: &str) -> Result<(), HostError> {
        self.webview
            .evaluate_script(js)
            .map_err(|e| HostError::Script(e.to_string()))
    }

    fn toggle_devtools(&mut self) -> Result<(), HostError> {
        if self.webview.is_devtools_open() {
            self.webview.close_devtools();
        } else {
            self.webview.open_devtools();
        }
        Ok(())
    }

    fn focus(&self) -> Result<(), HostError> {
        self.webview
            .focus()
            .map_err(|e| HostError::Other(e.to_string()))
    }
}
