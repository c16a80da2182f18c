//! View lifecycle, preload and local content settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Per-deck view cache settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Upper bound on live views per deck. Least recently shown views are
    /// destroyed past this count; the current view is never evicted.
    /// Unset keeps every view for the lifetime of the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_views_per_deck: Option<usize>,
    /// Allow the devtools inspector to be opened on views.
    pub devtools: bool,
}

/// Optional replacements for the built-in preload scripts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PreloadConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trusted: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sandboxed: Option<PathBuf>,
}

/// Where `file` locators are resolved from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Asset root served under `viewdeck://localhost/`. Relative paths are
    /// resolved against the working directory.
    pub root: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
        }
    }
}
