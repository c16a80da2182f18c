//! Configuration schema types for ViewDeck.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the standard two-column shell defaults.

mod decks;
mod layout;
mod system;
mod theme;
mod views;
mod window;

pub use decks::*;
pub use layout::*;
pub use system::*;
pub use theme::*;
pub use views::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for ViewDeck.
///
/// All options have defaults; only override what you want to change.
/// A `[[decks]]` array, when present, replaces the default deck list
/// entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewDeckConfig {
    pub window: WindowConfig,
    pub layout: LayoutConfig,
    pub views: ViewsConfig,
    pub preload: PreloadConfig,
    pub content: ContentConfig,
    pub theme: ThemeConfig,
    pub logging: LoggingConfig,
    pub decks: Vec<DeckDefinition>,
}

impl Default for ViewDeckConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            layout: LayoutConfig::default(),
            views: ViewsConfig::default(),
            preload: PreloadConfig::default(),
            content: ContentConfig::default(),
            theme: ThemeConfig::default(),
            logging: LoggingConfig::default(),
            decks: default_decks(),
        }
    }
}

impl ViewDeckConfig {
    pub fn deck(&self, name: &str) -> Option<&DeckDefinition> {
        self.decks.iter().find(|d| d.name == name)
    }
}

// =============================================================================
// Tests
// =============================================================================
