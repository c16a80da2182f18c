use super::types::{KeyBind, Modifier};

/// Human-readable label for a [`KeyBind`], used in log lines.
///
/// macOS uses the modifier glyphs with no separator; other platforms join
/// text names with `+`.
pub fn keybind_to_display(kb: &KeyBind) -> String {
    let mac = cfg!(target_os = "macos");
    let mut parts: Vec<&str> = kb
        .modifiers
        .iter()
        .map(|m| match (m, mac) {
            (Modifier::Ctrl, true) => "\u{2303}",
            (Modifier::Alt, true) => "\u{2325}",
            (Modifier::Shift, true) => "\u{21E7}",
            (Modifier::Super, true) => "\u{2318}",
            (Modifier::Ctrl, false) => "Ctrl",
            (Modifier::Alt, false) => "Alt",
            (Modifier::Shift, false) => "Shift",
            (Modifier::Super, false) if cfg!(target_os = "windows") => "Win",
            (Modifier::Super, false) => "Super",
        })
        .collect();
    parts.push(&kb.key);
    parts.join(if mac { "" } else { "+" })
}
