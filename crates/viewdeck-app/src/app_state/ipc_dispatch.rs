//! Routing of surface events and IPC messages.
//!
//! Messages are parsed into an [`IpcCommand`] first, with the sender's trust
//! level checked against the channel, then applied to the app.

use viewdeck_common::{Layout, TrustLevel};
use viewdeck_platform::{normalize_physical_key, KeyCombo};
use viewdeck_webview::{Channel, IpcMessage, OpenRequest, WebViewEvent};

use super::core::ViewDeckApp;
use super::resize_drag::{drag_ratio, DragState};

// =============================================================================
// COMMANDS
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub(super) enum IpcCommand {
    /// A full layout object computed by chrome.
    Layout(Layout),
    /// Gutter moved `dx` pixels since the drag started.
    DragTo(f64),
    ResizeStart(Option<String>),
    ResizeEnd(Option<String>),
    ResizeCancel,
    HideAll,
    /// `None` restores every deck.
    Show(Option<String>),
    Open {
        deck: String,
        request: OpenRequest,
    },
    SwitchPage {
        deck: String,
        key: String,
    },
    SetTitle(String),
    Minimize,
    Maximize,
    Close,
    /// Key press forwarded from a focused view.
    Shortcut(KeyCombo),
}

/// Parse a raw IPC body from a view built with `trust`.
pub(super) fn parse_command(trust: TrustLevel, body: &str) -> Result<IpcCommand, String> {
    let msg = IpcMessage::from_json(body).ok_or_else(|| "malformed IPC message".to_string())?;
    let channel = msg
        .channel()
        .ok_or_else(|| format!("unknown IPC channel '{}'", msg.kind))?;
    if !channel.allowed_for(trust) {
        return Err(format!("channel '{}' not allowed for {trust} views", msg.kind));
    }

    let name = |field: &str| {
        msg.payload_str(field)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
    };

    Ok(match channel {
        Channel::WindowResize => match msg.payload.get("dx").and_then(|v| v.as_f64()) {
            Some(dx) => IpcCommand::DragTo(dx),
            None => IpcCommand::Layout(
                serde_json::from_value(msg.payload.clone())
                    .map_err(|e| format!("invalid layout: {e}"))?,
            ),
        },
        Channel::WindowResizeStart => IpcCommand::ResizeStart(name("deck")),
        Channel::WindowResizeEnd => IpcCommand::ResizeEnd(name("deck")),
        Channel::WindowResizeCancel => IpcCommand::ResizeCancel,
        Channel::WindowHide => IpcCommand::HideAll,
        Channel::WindowShow => IpcCommand::Show(name("deck")),
        Channel::OpenInDeck => {
            let deck = name("deck").ok_or_else(|| "openInDeck without deck".to_string())?;
            let request: OpenRequest = serde_json::from_value(msg.payload.clone())
                .map_err(|e| format!("invalid open request: {e}"))?;
            IpcCommand::Open { deck, request }
        }
        Channel::SwitchPage => {
            let deck = name("deck").ok_or_else(|| "switchPage without deck".to_string())?;
            let key = msg
                .payload
                .get("key")
                .and_then(|v| v.as_str())
                .ok_or_else(|| "switchPage without key".to_string())?;
            IpcCommand::SwitchPage {
                deck,
                key: key.to_string(),
            }
        }
        Channel::SetWindowTitle => IpcCommand::SetTitle(
            msg.payload_str("title").unwrap_or_default().to_string(),
        ),
        Channel::Minimize => IpcCommand::Minimize,
        Channel::Maximize => IpcCommand::Maximize,
        Channel::Close => IpcCommand::Close,
        Channel::KeyShortcut => {
            let code = msg
                .payload
                .get("code")
                .and_then(|v| v.as_str())
                .ok_or_else(|| "keyShortcut without code".to_string())?;
            let held = |field: &str| {
                msg.payload
                    .get(field)
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false)
            };
            IpcCommand::Shortcut(KeyCombo::from_winit(
                held("ctrl"),
                held("alt"),
                held("shift"),
                held("meta"),
                normalize_physical_key(code),
            ))
        }
    })
}

// =============================================================================
// DISPATCH
// =============================================================================

impl ViewDeckApp {
    pub(super) fn handle_webview_event(&mut self, event: WebViewEvent) {
        match event {
            WebViewEvent::IpcMessage { origin, body } => {
                match parse_command(origin.trust, &body) {
                    Ok(command) => {
                        tracing::debug!(deck = %origin.deck, key = %origin.key, ?command, "IPC command");
                        self.apply_command(command);
                    }
                    Err(e) => {
                        tracing::warn!(deck = %origin.deck, key = %origin.key, error = %e, "IPC message dropped");
                    }
                }
            }
            WebViewEvent::PageLoad { origin, state, url } => {
                tracing::debug!(deck = %origin.deck, key = %origin.key, ?state, url = %url, "page load");
            }
            WebViewEvent::TitleChanged { origin, title } => {
                tracing::debug!(deck = %origin.deck, key = %origin.key, title = %title, "page title");
            }
            WebViewEvent::NavigationBlocked { origin, url } => {
                tracing::info!(deck = %origin.deck, key = %origin.key, url = %url, "navigation blocked");
            }
        }
    }

    pub(super) fn apply_command(&mut self, command: IpcCommand) {
        match command {
            IpcCommand::Layout(layout) => self.decks.resize(layout),
            IpcCommand::DragTo(dx) => {
                let Some(drag) = &self.drag else {
                    tracing::debug!(dx, "drag update without active drag ignored");
                    return;
                };
                let (width, _) = self.logical_size();
                let ratio = drag_ratio(drag, dx, self.geometry.columns_width(width));
                self.geometry.set_split_ratio(ratio, width);
                self.push_layout();
            }
            IpcCommand::ResizeStart(keep) => {
                self.drag = Some(DragState::new(self.geometry.split_ratio(), keep.as_deref()));
                self.decks.hide_all(keep.as_deref());
            }
            IpcCommand::ResizeEnd(keep) => {
                self.drag = None;
                self.decks.show_all(keep.as_deref());
            }
            IpcCommand::ResizeCancel => self.cancel_drag(),
            IpcCommand::HideAll => self.decks.hide_all(None),
            IpcCommand::Show(None) => self.decks.show_all(None),
            IpcCommand::Show(Some(deck)) => self.decks.show(&deck),
            IpcCommand::Open { deck, request } => self.decks.open_in_deck(&deck, request),
            IpcCommand::SwitchPage { deck, key } => self.decks.show_view_in_deck(&deck, &key),
            IpcCommand::SetTitle(title) => {
                if let Some(w) = &self.window {
                    w.set_title(&title);
                }
                self.notify_chrome("setWindowTitle", &serde_json::json!(title));
            }
            IpcCommand::Minimize => {
                if let Some(w) = &self.window {
                    w.set_minimized(true);
                }
            }
            IpcCommand::Maximize => {
                if let Some(w) = &self.window {
                    w.set_maximized(!w.is_maximized());
                }
            }
            IpcCommand::Close => self.should_exit = true,
            IpcCommand::Shortcut(combo) => {
                self.trigger_shortcut(&combo);
            }
        }
    }

    /// Send a message to every privileged view.
    fn notify_chrome(&self, kind: &str, payload: &serde_json::Value) {
        let views = self
            .decks
            .decks()
            .flat_map(|deck| deck.views())
            .filter(|view| view.trust().is_privileged());
        for view in views {
            if let Err(e) = view.surface().send_ipc(kind, payload) {
                tracing::debug!(key = %view.key(), error = %e, "IPC reply not delivered");
            }
        }
    }

    /// Abort any drag in progress: the split returns to where the drag
    /// started and every view resnaps to that layout.
    pub(super) fn cancel_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            let (width, _) = self.logical_size();
            self.geometry.set_split_ratio(drag.start_ratio, width);
            self.push_layout();
        }
        self.decks.cancel_resize();
    }
}

// =============================================================================
// TESTS
// =============================================================================
