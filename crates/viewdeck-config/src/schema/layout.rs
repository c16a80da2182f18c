//! Geometry settings for the built-in split layout.

use serde::{Deserialize, Serialize};

/// Sizes used to carve the window into the standard layout keys
/// (`leftTabs`, `leftAddressBar`, `leftContent`, `gutter`, ...).
///
/// Heights and widths are logical pixels; `split_ratio` is the fraction of
/// the usable width given to the left column.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Left column share of the width between the asides (valid range: 0.1-0.9).
    pub split_ratio: f64,
    /// Height of the tab strip above each column.
    pub tabs_height: u32,
    /// Height of the address bar below each tab strip.
    pub address_bar_height: u32,
    /// Width of the draggable gutter between the columns.
    pub gutter_width: u32,
    /// Width of each aside rail. Zero hides the asides.
    pub aside_width: u32,
    /// Height of the footer strip.
    pub footer_height: u32,
    /// Minimum width either column may be dragged down to.
    pub min_column_width: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            split_ratio: 0.5,
            tabs_height: 36,
            address_bar_height: 36,
            gutter_width: 8,
            aside_width: 48,
            footer_height: 24,
            min_column_width: 160,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_config_defaults() {
        let config = LayoutConfig::default();
        assert!((config.split_ratio - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.tabs_height, 36);
        assert_eq!(config.gutter_width, 8);
        assert_eq!(config.footer_height, 24);
    }

    #[test]
    fn layout_config_partial_toml() {
        let config: LayoutConfig = toml::from_str("split_ratio = 0.3\naside_width = 0").unwrap();
        assert!((config.split_ratio - 0.3).abs() < f64::EPSILON);
        assert_eq!(config.aside_width, 0);
        assert_eq!(config.tabs_height, 36);
    }
}
