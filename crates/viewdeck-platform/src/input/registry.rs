use std::collections::HashMap;

use viewdeck_config::DeckDefinition;

use crate::keymap::{keybind_to_display, parse_keybind};

use super::key_combo::KeyCombo;

/// Maps devtools key combinations to the deck whose current view they
/// inspect.
///
/// Built once from the deck definitions at startup.
#[derive(Debug, Default)]
pub struct ShortcutRegistry {
    bindings: HashMap<KeyCombo, String>,
}

impl ShortcutRegistry {
    /// Build the registry from every deck's `shortcut_dev_console`.
    ///
    /// Invalid accelerator strings are logged as warnings and skipped. When
    /// two decks share a combination the first definition keeps it.
    pub fn from_decks(decks: &[DeckDefinition]) -> Self {
        let mut bindings = HashMap::new();

        for deck in decks {
            let Some(binding) = deck.shortcut_dev_console.as_deref() else {
                continue;
            };
            match parse_keybind(binding) {
                Ok(kb) => {
                    let combo = KeyCombo::from_keybind(&kb);
                    if let Some(owner) = bindings.get(&combo) {
                        tracing::warn!(
                            deck = %deck.name,
                            "devtools shortcut '{binding}' already bound to '{owner}'"
                        );
                        continue;
                    }
                    tracing::debug!(
                        deck = %deck.name,
                        "devtools shortcut {}",
                        keybind_to_display(&kb)
                    );
                    bindings.insert(combo, deck.name.clone());
                }
                Err(e) => {
                    tracing::warn!(deck = %deck.name, "invalid devtools shortcut '{binding}': {e}");
                }
            }
        }

        Self { bindings }
    }

    /// The deck bound to a key combination.
    pub fn lookup(&self, combo: &KeyCombo) -> Option<&str> {
        self.bindings.get(combo).map(String::as_str)
    }

    /// Display label of the shortcut bound to `deck`, if any.
    pub fn shortcut_for_deck(&self, deck: &str) -> Option<String> {
        self.bindings
            .iter()
            .find(|(_, name)| name.as_str() == deck)
            .map(|(combo, _)| keybind_to_display(&combo.to_keybind()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
