//! ViewDeck configuration system.
//!
//! Provides TOML-based configuration for the window, split layout, deck
//! definitions, view cache and theme palette. All config sections use
//! defaults so partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use viewdeck_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod keybinds;
pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    default_decks, DeckDefinition, LayoutConfig, LogLevel, ViewDeckConfig, ViewsConfig,
    WindowConfig, CONFIG_SCHEMA_VERSION,
};

use std::path::Path;
use viewdeck_common::ConfigError;

/// Load config from `path` when given, otherwise from the platform default
/// path (creating the commented template if none exists).
///
/// An explicit path that does not exist is an error; the default path is
/// created on demand.
pub fn load_config(path: Option<&Path>) -> Result<ViewDeckConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &ViewDeckConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = ViewDeckConfig::default();
        let json = config_to_json(&config);
        assert!(json.contains("\"window\""));
        assert!(json.contains("\"layout\""));
        assert!(json.contains("\"views\""));
        assert!(json.contains("\"preload\""));
        assert!(json.contains("\"content\""));
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"decks\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let config = ViewDeckConfig::default();
        let json = config_to_json(&config);
        let parsed: ViewDeckConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.decks, config.decks);
        assert_eq!(parsed.window.titlebar_height, 35);
    }

    #[test]
    fn load_config_with_explicit_missing_path_fails() {
        let result = load_config(Some(Path::new("/tmp/viewdeck-missing/config.toml")));
        assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[logging]\nlevel = \"debug\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.logging.level, LogLevel::Debug);
    }
}
