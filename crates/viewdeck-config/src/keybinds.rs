//! Devtools shortcut validation utilities.

use crate::schema::DeckDefinition;
use std::collections::HashMap;
use viewdeck_common::ConfigError;

/// Returns every configured devtools shortcut as `(deck name, binding)`.
pub fn all_shortcuts(decks: &[DeckDefinition]) -> Vec<(&str, &str)> {
    decks
        .iter()
        .filter_map(|d| {
            d.shortcut_dev_console
                .as_deref()
                .map(|s| (d.name.as_str(), s))
        })
        .collect()
}

/// Validate that no two decks bind the same key combination.
///
/// Bindings are compared case-insensitively with whitespace removed, so
/// `"Ctrl+1"` and `"ctrl + 1"` collide.
pub fn validate_no_duplicates(decks: &[DeckDefinition]) -> Result<(), ConfigError> {
    let mut seen: HashMap<String, &str> = HashMap::new();

    for (name, binding) in all_shortcuts(decks) {
        let normalized = normalize(binding);
        if let Some(existing_name) = seen.get(&normalized) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate shortcut '{binding}': assigned to both '{existing_name}' and '{name}'"
            )));
        }
        seen.insert(normalized, name);
    }

    Ok(())
}

/// Check that a binding has the `Mod+Mod+Key` shape: non-empty segments
/// separated by `+`.
pub fn is_well_formed(binding: &str) -> bool {
    let trimmed = binding.trim();
    !trimmed.is_empty() && trimmed.split('+').all(|part| !part.trim().is_empty())
}

fn normalize(binding: &str) -> String {
    binding
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase()
}
