//! IPC protocol between Rust and the pages hosted in decks.
//!
//! Messages flow in both directions:
//! - **JS -> Rust**: the preload's bridge calls
//!   `window.ipc.postMessage(JSON.stringify({kind, payload}))`, which
//!   triggers the `ipc_handler` registered on the surface.
//! - **Rust -> JS**: Rust evaluates a `_dispatch(kind, payload)` call in the
//!   page, reaching handlers registered with `viewdeck.on(kind, fn)`.

use serde::{Deserialize, Serialize};
use viewdeck_common::TrustLevel;

/// A typed IPC message from JavaScript to Rust.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpcMessage {
    /// Channel name, see [`Channel`].
    pub kind: String,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl IpcMessage {
    /// Parse an IPC message from a raw JSON string (from JS postMessage).
    pub fn from_json(raw: &str) -> Option<Self> {
        serde_json::from_str(raw).ok()
    }

    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    pub fn channel(&self) -> Option<Channel> {
        Channel::from_kind(&self.kind)
    }

    /// The payload as a plain string (`"name"` or `{"name": ...}` forms).
    pub fn payload_str(&self, field: &str) -> Option<&str> {
        match &self.payload {
            serde_json::Value::String(s) => Some(s),
            serde_json::Value::Object(map) => map.get(field).and_then(|v| v.as_str()),
            _ => None,
        }
    }
}

/// Channels a page may send on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Payload: layout object `{ "<layoutKey>": {x, y, width, height} }`.
    WindowResize,
    /// Payload: optional deck name kept visible during the drag.
    WindowResizeStart,
    /// Payload: optional deck name that stayed visible during the drag.
    WindowResizeEnd,
    WindowResizeCancel,
    /// Payload: deck name, or nothing for every deck.
    WindowHide,
    /// Payload: deck name, or nothing for every deck.
    WindowShow,
    /// Payload: `{deck, url?, file?, focus?, trusted?, background?, key?}`.
    OpenInDeck,
    SetWindowTitle,
    Minimize,
    Maximize,
    Close,
    /// Payload: `{deck, key}`. Switches a deck to an existing view.
    SwitchPage,
    /// Payload: `{code, ctrl, alt, shift, meta}`. A key press forwarded from
    /// a focused view so that deck shortcuts work wherever focus is.
    KeyShortcut,
}

impl Channel {
    pub fn from_kind(kind: &str) -> Option<Self> {
        Some(match kind {
            "windowResize" => Self::WindowResize,
            "windowResizeStart" => Self::WindowResizeStart,
            "windowResizeEnd" => Self::WindowResizeEnd,
            "windowResizeCancel" => Self::WindowResizeCancel,
            "windowHide" => Self::WindowHide,
            "windowShow" => Self::WindowShow,
            "openInDeck" => Self::OpenInDeck,
            "setWindowTitle" => Self::SetWindowTitle,
            "minimize" => Self::Minimize,
            "maximize" => Self::Maximize,
            "close" => Self::Close,
            "switchPage" => Self::SwitchPage,
            "keyShortcut" => Self::KeyShortcut,
            _ => return None,
        })
    }

    /// Sandboxed pages may only switch pages and forward key presses;
    /// every other channel requires the privileged preload.
    pub fn allowed_for(self, trust: TrustLevel) -> bool {
        trust.is_privileged() || matches!(self, Self::SwitchPage | Self::KeyShortcut)
    }
}

/// Generate a JS snippet that dispatches a message to the page's handlers.
pub fn js_dispatch_message(kind: &str, payload: &serde_json::Value) -> String {
    let payload_json = serde_json::to_string(payload).unwrap_or_else(|_| "null".to_string());
    format!(
        "window.viewdeck && window.viewdeck._dispatch({}, {});",
        serde_json::to_string(kind).unwrap_or_else(|_| "\"unknown\"".to_string()),
        payload_json,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_with_object_payload() {
        let msg = IpcMessage::from_json(
            r#"{"kind":"openInDeck","payload":{"deck":"rightContent","url":"https://a"}}"#,
        )
        .unwrap();
        assert_eq!(msg.channel(), Some(Channel::OpenInDeck));
        assert_eq!(msg.payload_str("deck"), Some("rightContent"));
    }

    #[test]
    fn parses_message_without_payload() {
        let msg = IpcMessage::from_json(r#"{"kind":"windowResizeCancel"}"#).unwrap();
        assert_eq!(msg.channel(), Some(Channel::WindowResizeCancel));
        assert!(msg.payload.is_null());
    }

    #[test]
    fn string_payload_reads_as_any_field() {
        let msg = IpcMessage::new("windowHide", serde_json::json!("gutter"));
        assert_eq!(msg.payload_str("deck"), Some("gutter"));
    }

    #[test]
    fn rejects_garbage() {
        assert!(IpcMessage::from_json("not json").is_none());
        assert!(IpcMessage::from_json(r#"{"payload":1}"#).is_none());
    }

    #[test]
    fn unknown_channel() {
        assert_eq!(Channel::from_kind("eval"), None);
    }

    #[test]
    fn sandboxed_pages_only_switch() {
        assert!(Channel::SwitchPage.allowed_for(TrustLevel::Sandboxed));
        assert!(!Channel::OpenInDeck.allowed_for(TrustLevel::Sandboxed));
        assert!(!Channel::WindowResize.allowed_for(TrustLevel::Sandboxed));
        assert!(Channel::Close.allowed_for(TrustLevel::Privileged));
    }

    #[test]
    fn key_shortcuts_allowed_for_every_trust_level() {
        assert_eq!(Channel::from_kind("keyShortcut"), Some(Channel::KeyShortcut));
        assert!(Channel::KeyShortcut.allowed_for(TrustLevel::Sandboxed));
        assert!(Channel::KeyShortcut.allowed_for(TrustLevel::Privileged));
    }

    #[test]
    fn dispatch_escapes_kind() {
        let js = js_dispatch_message("theme-changed", &serde_json::json!({"a": 1}));
        assert!(js.contains("_dispatch(\"theme-changed\", {\"a\":1})"));
    }
}
