//! Browsing contexts per trust level.
//!
//! Privileged and sandboxed views never share cookies, storage or cache:
//! each trust level gets its own `wry::WebContext`, rooted in its own
//! subdirectory of the webview data directory.

use std::path::{Path, PathBuf};

use viewdeck_common::TrustLevel;
use wry::WebContext;

/// Data directory for `trust` below `base`.
pub fn context_data_dir(base: &Path, trust: TrustLevel) -> PathBuf {
    base.join(trust.to_string())
}

/// One `WebContext` per trust level, created on first use.
pub(super) struct WebContexts {
    base: Option<PathBuf>,
    privileged: Option<WebContext>,
    sandboxed: Option<WebContext>,
}

impl WebContexts {
    pub(super) fn new(base: Option<PathBuf>) -> Self {
        Self {
            base,
            privileged: None,
            sandboxed: None,
        }
    }

    /// Where the context for `trust` keeps its data. `None` without a base
    /// directory, in which case the platform default is used.
    pub(super) fn data_dir(&self, trust: TrustLevel) -> Option<PathBuf> {
        self.base.as_deref().map(|base| context_data_dir(base, trust))
    }

    pub(super) fn for_trust(&mut self, trust: TrustLevel) -> &mut WebContext {
        let data_dir = self.data_dir(trust);
        let slot = match trust {
            TrustLevel::Privileged => &mut self.privileged,
            TrustLevel::Sandboxed => &mut self.sandboxed,
        };
        slot.get_or_insert_with(|| {
            tracing::debug!(%trust, dir = ?data_dir, "web context created");
            WebContext::new(data_dir)
        })
    }
}
