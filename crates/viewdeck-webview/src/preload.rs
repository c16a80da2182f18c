//! Preload scripts injected before any page script runs.
//!
//! Two variants exist, selected per view by trust level:
//! - **trusted**: first-party chrome (tabs, address bars). Exposes the full
//!   `window.viewdeck.ipc` channel set and `window.appEnvironment`.
//! - **sandboxed**: arbitrary web content. Exposes only
//!   `window.viewdeck.switchPage`.
//!
//! The bridge objects are frozen so page scripts cannot swap them out. The
//! Rust side re-checks every channel against the sender's trust level, so a
//! sandboxed page calling `window.ipc.postMessage` directly gains nothing.

use std::path::Path;

use tracing::{info, warn};
use viewdeck_common::TrustLevel;

const TRUSTED_PRELOAD: &str = r#"
(function() {
    if (window.viewdeck) { return; }
    var handlers = {};
    function send(kind, payload) {
        window.ipc.postMessage(JSON.stringify({ kind: kind, payload: payload === undefined ? null : payload }));
    }
    var channels = [
        'windowResize', 'windowResizeStart', 'windowResizeEnd', 'windowResizeCancel',
        'windowHide', 'windowShow', 'openInDeck', 'setWindowTitle',
        'minimize', 'maximize', 'close', 'switchPage'
    ];
    var ipc = {};
    channels.forEach(function(channel) {
        ipc[channel] = function(payload) { send(channel, payload); };
    });
    Object.defineProperty(window, 'viewdeck', {
        value: Object.freeze({
            ipc: Object.freeze(ipc),
            on: function(kind, callback) { handlers[kind] = callback; },
            _dispatch: function(kind, payload) {
                var handler = handlers[kind];
                if (handler) { handler(payload); }
            }
        }),
        writable: false,
        configurable: false
    });
    Object.defineProperty(window, 'appEnvironment', {
        value: Object.freeze({ platform: '__PLATFORM__', frameless: true }),
        writable: false,
        configurable: false
    });
})();
"#;

const SANDBOXED_PRELOAD: &str = r#"
(function() {
    if (window.viewdeck) { return; }
    var handlers = {};
    Object.defineProperty(window, 'viewdeck', {
        value: Object.freeze({
            switchPage: function(deck, key) {
                window.ipc.postMessage(JSON.stringify({
                    kind: 'switchPage',
                    payload: { deck: String(deck), key: String(key) }
                }));
            },
            on: function(kind, callback) { handlers[kind] = callback; },
            _dispatch: function(kind, payload) {
                var handler = handlers[kind];
                if (handler) { handler(payload); }
            }
        }),
        writable: false,
        configurable: false
    });
})();
"#;

/// Hides page scrollbars for decks created with `scrollbars = false`.
pub const SCROLLBARS_HIDDEN_SCRIPT: &str = r#"
(function() {
    var css = 'html::-webkit-scrollbar, body::-webkit-scrollbar { display: none; }'
        + ' html, body { scrollbar-width: none; }';
    function inject() {
        var style = document.createElement('style');
        style.setAttribute('data-viewdeck', 'scrollbars');
        style.textContent = css;
        (document.head || document.documentElement).appendChild(style);
    }
    if (document.readyState === 'loading') {
        document.addEventListener('DOMContentLoaded', inject);
    } else {
        inject();
    }
})();
"#;

/// Forwards possible shortcut presses to the app. Installed on every
/// surface, whatever its trust level or preload override, because a
/// focused view swallows key events before the native window sees them.
///
/// Only presses holding Ctrl, Alt or Meta, or function keys, are sent.
/// `code` is the physical key (`Digit1`, `KeyI`, `F12`).
pub const SHORTCUT_FORWARD_SCRIPT: &str = r#"
(function() {
    if (window.__viewdeckShortcuts) { return; }
    Object.defineProperty(window, '__viewdeckShortcuts', { value: true });
    window.addEventListener('keydown', function(e) {
        var fkey = /^F[0-9]{1,2}$/.test(e.code);
        if (e.repeat || !(e.ctrlKey || e.altKey || e.metaKey || fkey)) { return; }
        window.ipc.postMessage(JSON.stringify({
            kind: 'keyShortcut',
            payload: {
                code: e.code,
                ctrl: e.ctrlKey,
                alt: e.altKey,
                shift: e.shiftKey,
                meta: e.metaKey
            }
        }));
    }, true);
})();
"#;

/// The pair of preload scripts handed to new surfaces.
#[derive(Debug, Clone)]
pub struct PreloadSet {
    trusted: String,
    sandboxed: String,
}

impl PreloadSet {
    /// The built-in scripts.
    pub fn builtin() -> Self {
        Self {
            trusted: TRUSTED_PRELOAD.replace("__PLATFORM__", std::env::consts::OS),
            sandboxed: SANDBOXED_PRELOAD.to_string(),
        }
    }

    /// Built-in scripts with optional file overrides. An override that
    /// cannot be read is logged and the built-in script is kept.
    pub fn load(trusted: Option<&Path>, sandboxed: Option<&Path>) -> Self {
        let mut set = Self::builtin();
        if let Some(script) = trusted.and_then(|p| read_override(p, "trusted")) {
            set.trusted = script;
        }
        if let Some(script) = sandboxed.and_then(|p| read_override(p, "sandboxed")) {
            set.sandboxed = script;
        }
        set
    }

    pub fn for_trust(&self, trust: TrustLevel) -> &str {
        match trust {
            TrustLevel::Privileged => &self.trusted,
            TrustLevel::Sandboxed => &self.sandboxed,
        }
    }
}

impl Default for PreloadSet {
    fn default() -> Self {
        Self::builtin()
    }
}

fn read_override(path: &Path, which: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(script) => {
            info!(path = %path.display(), "using {which} preload override");
            Some(script)
        }
        Err(e) => {
            warn!(path = %path.display(), "failed to read {which} preload: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trusted_preload_exposes_all_channels() {
        let set = PreloadSet::builtin();
        let script = set.for_trust(TrustLevel::Privileged);
        for channel in ["windowResize", "openInDeck", "setWindowTitle", "close"] {
            assert!(script.contains(channel), "missing {channel}");
        }
        assert!(!script.contains("__PLATFORM__"));
        assert!(script.contains(std::env::consts::OS));
    }

    #[test]
    fn sandboxed_preload_exposes_switch_page_only() {
        let set = PreloadSet::builtin();
        let script = set.for_trust(TrustLevel::Sandboxed);
        assert!(script.contains("switchPage"));
        assert!(!script.contains("openInDeck"));
        assert!(!script.contains("appEnvironment"));
    }

    #[test]
    fn override_replaces_one_side() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("public.js");
        std::fs::write(&path, "window.custom = true;").unwrap();

        let set = PreloadSet::load(None, Some(&path));
        assert_eq!(set.for_trust(TrustLevel::Sandboxed), "window.custom = true;");
        assert!(set.for_trust(TrustLevel::Privileged).contains("openInDeck"));
    }

    #[test]
    fn unreadable_override_keeps_builtin() {
        let set = PreloadSet::load(Some(Path::new("/nonexistent/trusted.js")), None);
        assert!(set.for_trust(TrustLevel::Privileged).contains("openInDeck"));
    }

    #[test]
    fn shortcut_script_posts_physical_key() {
        assert!(SHORTCUT_FORWARD_SCRIPT.contains("kind: 'keyShortcut'"));
        assert!(SHORTCUT_FORWARD_SCRIPT.contains("code: e.code"));
        assert!(SHORTCUT_FORWARD_SCRIPT.contains("true);"));
    }

    #[test]
    fn scrollbar_script_targets_document() {
        assert!(SCROLLBARS_HIDDEN_SCRIPT.contains("scrollbar-width: none"));
    }
}
