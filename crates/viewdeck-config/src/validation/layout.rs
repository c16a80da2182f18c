//! Window and split-layout range validation.

use crate::schema::ViewDeckConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ViewDeckConfig) {
    validate_range(errors, "window.width", config.window.width, 320, 16384);
    validate_range(errors, "window.height", config.window.height, 240, 16384);
    validate_range(
        errors,
        "window.titlebar_height",
        config.window.titlebar_height,
        0,
        200,
    );
}

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ViewDeckConfig) {
    let layout = &config.layout;
    validate_range_f64(errors, "layout.split_ratio", layout.split_ratio, 0.1, 0.9);
    validate_range(errors, "layout.tabs_height", layout.tabs_height, 0, 200);
    validate_range(
        errors,
        "layout.address_bar_height",
        layout.address_bar_height,
        0,
        200,
    );
    validate_range(errors, "layout.gutter_width", layout.gutter_width, 1, 64);
    validate_range(errors, "layout.aside_width", layout.aside_width, 0, 400);
    validate_range(errors, "layout.footer_height", layout.footer_height, 0, 200);

    let chrome = 2 * layout.aside_width + layout.gutter_width + 2 * layout.min_column_width;
    if chrome > config.window.width {
        errors.push(format!(
            "layout: asides, gutter and two minimum columns need {chrome}px but window.width is {}",
            config.window.width
        ));
    }
}
