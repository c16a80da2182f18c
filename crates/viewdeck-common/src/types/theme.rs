use serde::{Deserialize, Serialize};

/// Window theme snapshot broadcast to every window's content whenever the
/// system appearance changes. The deck manager treats it as opaque.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeDescriptor {
    pub should_use_dark_colors: bool,
    pub window_accent_color: String,
    pub window_title_bar_color: String,
    pub window_title_bar_color_light: String,
    pub window_title_bar_color_dark: String,
    pub window_title_bar_text_color: String,
    pub window_color: String,
    pub window_background_color: String,
    /// CSS length, e.g. `"35px"`.
    pub window_title_bar_height: String,
}
