//! Theme bridge: pushes a [`ThemeDescriptor`] into page content as CSS
//! custom properties.
//!
//! Every value is validated before it is spliced into script so a
//! malicious config or OS palette cannot inject CSS or JS.

mod sanitize;

pub use sanitize::{validate_css_color, validate_css_length, CssValueKind};

use viewdeck_common::ThemeDescriptor;

/// `(property, value, kind)` for every themed custom property.
pub fn theme_variables(theme: &ThemeDescriptor) -> Vec<(&'static str, &str, CssValueKind)> {
    vec![
        (
            "--window-title-bar-color-light",
            theme.window_title_bar_color_light.as_str(),
            CssValueKind::Color,
        ),
        (
            "--window-title-bar-color-dark",
            theme.window_title_bar_color_dark.as_str(),
            CssValueKind::Color,
        ),
        (
            "--window-title-bar-color",
            theme.window_title_bar_color.as_str(),
            CssValueKind::Color,
        ),
        (
            "--window-title-bar-text-color",
            theme.window_title_bar_text_color.as_str(),
            CssValueKind::Color,
        ),
        (
            "--window-accent-color",
            theme.window_accent_color.as_str(),
            CssValueKind::Color,
        ),
        (
            "--window-background-color",
            theme.window_background_color.as_str(),
            CssValueKind::Color,
        ),
        ("--window-color", theme.window_color.as_str(), CssValueKind::Color),
        (
            "--window-title-bar-height",
            theme.window_title_bar_height.as_str(),
            CssValueKind::Length,
        ),
    ]
}

/// Build the script that applies `theme` to a page.
///
/// Sets each valid custom property on `:root`, flags the color scheme on
/// `<html data-theme>`, then fires a `theme-changed` `CustomEvent` whose
/// `detail` is the descriptor. Rejected values are logged and skipped.
pub fn theme_script(theme: &ThemeDescriptor) -> String {
    let mut js = String::from("(function() {\n  var s = document.documentElement.style;\n");

    for (name, value, kind) in theme_variables(theme) {
        match kind.validate(value) {
            Ok(()) => {
                js.push_str(&format!("  s.setProperty('{name}', '{}');\n", value.trim()));
            }
            Err(e) => {
                tracing::warn!(name, value, error = %e, "Theme variable rejected by sanitizer");
            }
        }
    }

    let scheme = if theme.should_use_dark_colors {
        "dark"
    } else {
        "light"
    };
    js.push_str(&format!(
        "  document.documentElement.setAttribute('data-theme', '{scheme}');\n"
    ));

    // serde_json output is a valid JS object literal.
    let detail = serde_json::to_string(theme).unwrap_or_else(|_| "null".to_string());
    js.push_str(&format!(
        "  window.dispatchEvent(new CustomEvent('theme-changed', {{ detail: {detail} }}));\n"
    ));
    js.push_str("})();");
    js
}
