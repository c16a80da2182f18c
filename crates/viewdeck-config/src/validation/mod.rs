//! Full configuration validation.
//!
//! Validates numeric ranges, deck definitions, shortcut uniqueness and
//! color formats. Each domain has its own submodule; this orchestrator
//! calls them all and collects errors into a single `ConfigError`.

mod decks;
mod helpers;
mod layout;

#[cfg(test)]
mod tests;

use crate::keybinds;
use crate::schema::ViewDeckConfig;
use viewdeck_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ViewDeckConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(e) = keybinds::validate_no_duplicates(&config.decks) {
        errors.push(e.to_string());
    }

    layout::validate_window(&mut errors, config);
    layout::validate_layout(&mut errors, config);
    decks::validate_decks(&mut errors, config);
    decks::validate_theme(&mut errors, config);

    if config.views.max_views_per_deck == Some(0) {
        errors.push("views.max_views_per_deck must be at least 1".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
