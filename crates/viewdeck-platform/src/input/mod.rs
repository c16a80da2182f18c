//! Shortcut registry: maps parsed key combinations to deck names.

mod key_combo;
mod registry;

pub use key_combo::KeyCombo;
pub use registry::ShortcutRegistry;

#[cfg(test)]
mod tests {
    use super::key_combo::*;
    use super::*;
    use crate::keymap::parse_keybind;
    use viewdeck_config::{default_decks, DeckDefinition};

    #[test]
    fn keycombo_from_keybind() {
        let combo = KeyCombo::from_keybind(&parse_keybind("Ctrl+Alt+Shift+1").unwrap());
        assert_eq!(combo.mods, MOD_CTRL | MOD_ALT | MOD_SHIFT);
        assert_eq!(combo.key, "1");
    }

    #[test]
    fn keycombo_from_winit_matches_parsed() {
        let pressed = KeyCombo::from_winit(true, false, true, false, "I".into());
        let bound = KeyCombo::from_keybind(&parse_keybind("Shift+Ctrl+I").unwrap());
        assert_eq!(pressed, bound);
    }

    #[test]
    fn keycombo_to_keybind_keeps_modifiers() {
        let original = parse_keybind("Ctrl+Shift+T").unwrap();
        let back = KeyCombo::from_keybind(&original).to_keybind();
        assert_eq!(back, original);
    }

    #[test]
    fn registry_from_default_decks() {
        let registry = ShortcutRegistry::from_decks(&default_decks());
        assert_eq!(registry.len(), 1);

        let combo = KeyCombo::from_keybind(&parse_keybind("CmdOrCtrl+Alt+Shift+1").unwrap());
        assert_eq!(registry.lookup(&combo), Some("leftTabs"));
    }

    #[test]
    fn registry_lookup_miss() {
        let registry = ShortcutRegistry::from_decks(&default_decks());
        let combo = KeyCombo::from_winit(false, false, false, false, "Z".into());
        assert_eq!(registry.lookup(&combo), None);
    }

    #[test]
    fn registry_skips_invalid_bindings() {
        let decks = vec![
            DeckDefinition::new("a").with_dev_console("Hyper+1"),
            DeckDefinition::new("b").with_dev_console("F12"),
        ];
        let registry = ShortcutRegistry::from_decks(&decks);
        assert_eq!(registry.len(), 1);
        assert!(registry.shortcut_for_deck("a").is_none());
        assert_eq!(registry.shortcut_for_deck("b").as_deref(), Some("F12"));
    }

    #[test]
    fn registry_first_deck_keeps_shared_binding() {
        let decks = vec![
            DeckDefinition::new("a").with_dev_console("F12"),
            DeckDefinition::new("b").with_dev_console("f12"),
        ];
        let registry = ShortcutRegistry::from_decks(&decks);
        let combo = KeyCombo::from_winit(false, false, false, false, "F12".into());
        assert_eq!(registry.lookup(&combo), Some("a"));
    }

    #[test]
    fn empty_registry() {
        let registry = ShortcutRegistry::from_decks(&[DeckDefinition::new("a")]);
        assert!(registry.is_empty());
    }
}
