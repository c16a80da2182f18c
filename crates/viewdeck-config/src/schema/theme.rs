//! Window palette used to build the theme descriptor pushed to views.

use serde::{Deserialize, Serialize};
use viewdeck_common::ThemeDescriptor;

/// Colors for one appearance (light or dark).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    pub title_bar: String,
    pub title_bar_text: String,
    pub window: String,
    pub background: String,
}

impl PaletteConfig {
    fn light() -> Self {
        Self {
            title_bar: "#e8e8e8".into(),
            title_bar_text: "#1f1f1f".into(),
            window: "#ffffff".into(),
            background: "#f3f3f3".into(),
        }
    }

    fn dark() -> Self {
        Self {
            title_bar: "#202020".into(),
            title_bar_text: "#f0f0f0".into(),
            window: "#2b2b2b".into(),
            background: "#3b3b3b".into(),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self::light()
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub accent: String,
    pub light: PaletteConfig,
    pub dark: PaletteConfig,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent: "#0078d4".into(),
            light: PaletteConfig::light(),
            dark: PaletteConfig::dark(),
        }
    }
}

impl ThemeConfig {
    /// Build the descriptor for the given appearance.
    pub fn descriptor(&self, dark: bool, titlebar_height: u32) -> ThemeDescriptor {
        let palette = if dark { &self.dark } else { &self.light };
        ThemeDescriptor {
            should_use_dark_colors: dark,
            window_accent_color: self.accent.clone(),
            window_title_bar_color: palette.title_bar.clone(),
            window_title_bar_color_light: self.light.title_bar.clone(),
            window_title_bar_color_dark: self.dark.title_bar.clone(),
            window_title_bar_text_color: palette.title_bar_text.clone(),
            window_color: palette.window.clone(),
            window_background_color: palette.background.clone(),
            window_title_bar_height: format!("{titlebar_height}px"),
        }
    }

    /// Every color string with a dotted field name, for validation.
    pub fn colors(&self) -> Vec<(String, &str)> {
        let mut out = vec![("theme.accent".to_string(), self.accent.as_str())];
        for (name, p) in [("light", &self.light), ("dark", &self.dark)] {
            out.push((format!("theme.{name}.title_bar"), &p.title_bar));
            out.push((format!("theme.{name}.title_bar_text"), &p.title_bar_text));
            out.push((format!("theme.{name}.window"), &p.window));
            out.push((format!("theme.{name}.background"), &p.background));
        }
        out
    }
}
