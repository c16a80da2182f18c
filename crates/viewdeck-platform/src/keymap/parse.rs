use viewdeck_common::PlatformError;

use super::types::{KeyBind, Modifier};

/// Parses an accelerator string like `"CmdOrCtrl+Alt+Shift+1"` or `"F12"`
/// into a [`KeyBind`].
///
/// Modifier aliases:
/// - `"CmdOrCtrl"` / `"CommandOrControl"` / `"Cmd"` -> `Super` on macOS,
///   `Ctrl` elsewhere
/// - `"Option"` / `"Alt"` -> `Alt`
/// - `"Control"` / `"Ctrl"` -> `Ctrl`
/// - `"Win"` / `"Super"` / `"Meta"` -> `Super`
///
/// Every token but the last must be a modifier; the last is the key.
pub fn parse_keybind(s: &str) -> Result<KeyBind, PlatformError> {
    let tokens: Vec<&str> = s.split('+').map(str::trim).collect();

    if tokens.iter().all(|t| t.is_empty()) {
        return Err(PlatformError::KeybindError("empty keybind string".into()));
    }

    let (key_token, modifier_tokens) = tokens
        .split_last()
        .ok_or_else(|| PlatformError::KeybindError("empty keybind string".into()))?;

    let mut modifiers = Vec::new();
    for token in modifier_tokens {
        let modifier = normalize_modifier(token).ok_or_else(|| {
            PlatformError::KeybindError(format!("unrecognized modifier '{token}' in '{s}'"))
        })?;
        if !modifiers.contains(&modifier) {
            modifiers.push(modifier);
        }
    }

    if key_token.is_empty() {
        return Err(PlatformError::KeybindError(format!(
            "keybind '{s}' has no key component"
        )));
    }

    Ok(KeyBind {
        modifiers,
        key: normalize_key_name(key_token),
    })
}

fn primary_modifier() -> Modifier {
    if cfg!(target_os = "macos") {
        Modifier::Super
    } else {
        Modifier::Ctrl
    }
}

pub(super) fn normalize_modifier(token: &str) -> Option<Modifier> {
    match token.to_lowercase().as_str() {
        "ctrl" | "control" => Some(Modifier::Ctrl),
        "alt" | "option" | "opt" => Some(Modifier::Alt),
        "shift" => Some(Modifier::Shift),
        "cmdorctrl" | "commandorcontrol" | "cmd" | "command" => Some(primary_modifier()),
        "super" | "win" | "meta" => Some(Modifier::Super),
        _ => None,
    }
}

pub(super) fn normalize_key_name(token: &str) -> String {
    let lower = token.to_lowercase();
    match lower.as_str() {
        "period" => ".".into(),
        "comma" => ",".into(),
        "slash" => "/".into(),
        "backslash" => "\\".into(),
        "space" => "Space".into(),
        "enter" | "return" => "Enter".into(),
        "escape" | "esc" => "Escape".into(),
        "tab" => "Tab".into(),
        "backspace" => "Backspace".into(),
        "delete" | "del" => "Delete".into(),
        "up" => "Up".into(),
        "down" => "Down".into(),
        "left" => "Left".into(),
        "right" => "Right".into(),
        "pageup" => "PageUp".into(),
        "pagedown" => "PageDown".into(),
        _ if token.chars().count() == 1 => token.to_uppercase(),
        _ => {
            // F12, Home, Insert
            let mut chars = lower.chars();
            match chars.next() {
                Some(c) => format!("{}{}", c.to_uppercase(), chars.as_str()),
                None => lower,
            }
        }
    }
}
