use crate::keymap::{KeyBind, Modifier};

pub(super) const MOD_CTRL: u8 = 0b0001;
pub(super) const MOD_ALT: u8 = 0b0010;
pub(super) const MOD_SHIFT: u8 = 0b0100;
pub(super) const MOD_SUPER: u8 = 0b1000;

/// A canonical key representation for HashMap lookup.
///
/// Modifiers are a bitmask so a keyboard event and a parsed binding
/// compare equal regardless of modifier order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    /// Bitmask: Ctrl=1, Alt=2, Shift=4, Super=8.
    pub mods: u8,
    /// Normalized key name (e.g. "G", "1", "F12").
    pub key: String,
}

impl KeyCombo {
    /// Build from a parsed [`KeyBind`].
    pub fn from_keybind(kb: &KeyBind) -> Self {
        let mods = kb.modifiers.iter().fold(0u8, |acc, m| {
            acc | match m {
                Modifier::Ctrl => MOD_CTRL,
                Modifier::Alt => MOD_ALT,
                Modifier::Shift => MOD_SHIFT,
                Modifier::Super => MOD_SUPER,
            }
        });
        Self {
            mods,
            key: kb.key.clone(),
        }
    }

    /// Build from raw modifier state and a normalized key name, as read from
    /// a winit keyboard event.
    pub fn from_winit(ctrl: bool, alt: bool, shift: bool, super_key: bool, key: String) -> Self {
        let mods = [
            (ctrl, MOD_CTRL),
            (alt, MOD_ALT),
            (shift, MOD_SHIFT),
            (super_key, MOD_SUPER),
        ]
        .iter()
        .filter(|(held, _)| *held)
        .fold(0u8, |acc, (_, bit)| acc | bit);
        Self { mods, key }
    }

    /// Reconstruct a [`KeyBind`] for display purposes.
    pub fn to_keybind(&self) -> KeyBind {
        let modifiers = [
            (MOD_CTRL, Modifier::Ctrl),
            (MOD_ALT, Modifier::Alt),
            (MOD_SHIFT, Modifier::Shift),
            (MOD_SUPER, Modifier::Super),
        ]
        .into_iter()
        .filter(|(bit, _)| self.mods & bit != 0)
        .map(|(_, m)| m)
        .collect();
        KeyBind {
            modifiers,
            key: self.key.clone(),
        }
    }
}
