//! Deck definition and theme palette validation.

use crate::keybinds;
use crate::schema::ViewDeckConfig;
use std::collections::HashSet;

use super::helpers::validate_color;

pub(crate) fn validate_decks(errors: &mut Vec<String>, config: &ViewDeckConfig) {
    let mut names = HashSet::new();

    for (i, deck) in config.decks.iter().enumerate() {
        if deck.name.trim().is_empty() {
            errors.push(format!("decks[{i}].name must not be empty"));
        } else if !names.insert(deck.name.as_str()) {
            errors.push(format!("duplicate deck name '{}'", deck.name));
        }

        if deck.layout.trim().is_empty() {
            errors.push(format!("decks[{i}].layout must not be empty"));
        }

        if let Some(color) = &deck.background_color {
            validate_color(errors, &format!("decks[{i}].background_color"), color);
        }

        if let Some(binding) = &deck.shortcut_dev_console {
            if !keybinds::is_well_formed(binding) {
                errors.push(format!(
                    "decks[{i}].shortcut_dev_console = '{binding}' is malformed"
                ));
            }
        }

        if deck.init_url.is_some() && deck.init_file.is_some() {
            errors.push(format!(
                "decks[{i}] sets both init_url and init_file; init_url wins"
            ));
        }
    }
}

pub(crate) fn validate_theme(errors: &mut Vec<String>, config: &ViewDeckConfig) {
    for (name, value) in config.theme.colors() {
        validate_color(errors, &name, value);
    }
}
