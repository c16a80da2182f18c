//! Window configuration types.

use serde::{Deserialize, Serialize};

/// Window startup mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum StartupMode {
    #[default]
    Windowed,
    Maximized,
}

/// Main window appearance and initial size.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Static window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    pub startup_mode: StartupMode,
    /// Height reserved at the top for the title-bar overlay. Decks are laid
    /// out below it.
    pub titlebar_height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "ViewDeck".into(),
            width: 1280,
            height: 800,
            startup_mode: StartupMode::Windowed,
            titlebar_height: 35,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_config_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "ViewDeck");
        assert_eq!(config.width, 1280);
        assert_eq!(config.height, 800);
        assert_eq!(config.startup_mode, StartupMode::Windowed);
        assert_eq!(config.titlebar_height, 35);
    }

    #[test]
    fn startup_mode_serialization() {
        let json = serde_json::to_string(&StartupMode::Maximized).unwrap();
        assert_eq!(json, "\"maximized\"");
        let deserialized: StartupMode = serde_json::from_str("\"windowed\"").unwrap();
        assert_eq!(deserialized, StartupMode::Windowed);
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Workbench"
height = 900
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Workbench");
        assert_eq!(config.height, 900);
        // Defaults preserved
        assert_eq!(config.width, 1280);
        assert_eq!(config.titlebar_height, 35);
    }
}
