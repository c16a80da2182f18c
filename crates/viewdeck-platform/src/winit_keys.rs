//! Winit key name normalization.
//!
//! Converts winit key names to the normalized names used by
//! [`KeyCombo`](crate::input::KeyCombo) and
//! [`parse_keybind`](crate::keymap::parse_keybind).

/// Convert a winit logical key name to the normalized string used by
/// `KeyCombo`.
///
/// Winit uses `"ArrowUp"`, `" "` for space and lowercase characters; the
/// keybind system uses `"Up"`, `"Space"` and uppercase.
pub fn normalize_winit_key(key: &str) -> String {
    match key {
        "ArrowUp" => "Up".into(),
        "ArrowDown" => "Down".into(),
        "ArrowLeft" => "Left".into(),
        "ArrowRight" => "Right".into(),
        " " => "Space".into(),
        _ if key.chars().count() == 1 => key.to_uppercase(),
        // F1..F24, Home, Enter, Escape and other named keys
        _ => key.to_string(),
    }
}

/// Convert a winit physical `KeyCode` name (its `Debug` form) to a
/// normalized key name.
///
/// Shortcuts with Shift held report shifted characters as the logical key
/// (`Shift+1` arrives as `"!"`), so matching uses the physical key:
/// `"Digit1"` becomes `"1"`, `"KeyI"` becomes `"I"`.
pub fn normalize_physical_key(code: &str) -> String {
    if let Some(digit) = code.strip_prefix("Digit") {
        return digit.to_string();
    }
    if let Some(letter) = code.strip_prefix("Key") {
        if letter.len() == 1 {
            return letter.to_string();
        }
    }
    match code {
        "Period" => ".".into(),
        "Comma" => ",".into(),
        "Slash" => "/".into(),
        "Backslash" => "\\".into(),
        "Minus" => "-".into(),
        "Equal" => "=".into(),
        "Semicolon" => ";".into(),
        "Quote" => "'".into(),
        "BracketLeft" => "[".into(),
        "BracketRight" => "]".into(),
        "Backquote" => "`".into(),
        other => normalize_winit_key(other),
    }
}
