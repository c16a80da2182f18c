//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = ViewDeckConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_split_ratio_out_of_range() {
    let mut config = ViewDeckConfig::default();
    config.layout.split_ratio = 0.95;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.split_ratio"));
}

#[test]
fn catches_gutter_width_zero() {
    let mut config = ViewDeckConfig::default();
    config.layout.gutter_width = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.gutter_width"));
}

#[test]
fn catches_titlebar_too_tall() {
    let mut config = ViewDeckConfig::default();
    config.window.titlebar_height = 500;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("window.titlebar_height"));
}

#[test]
fn catches_window_too_narrow_for_columns() {
    let mut config = ViewDeckConfig::default();
    config.window.width = 400;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("minimum columns"));
}

#[test]
fn catches_duplicate_deck_names() {
    let mut config = ViewDeckConfig::default();
    config.decks.push(DeckDefinition::new("footer"));
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate deck name 'footer'"));
}

#[test]
fn catches_empty_layout_key() {
    let mut config = ViewDeckConfig::default();
    config.decks = vec![DeckDefinition::new("main").with_layout("")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("decks[0].layout"));
}

#[test]
fn catches_named_background_color() {
    let mut config = ViewDeckConfig::default();
    config.decks = vec![DeckDefinition::new("main").with_background("lightblue")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("decks[0].background_color"));
}

#[test]
fn catches_non_ascii_background_color() {
    let mut config = ViewDeckConfig::default();
    config.decks = vec![DeckDefinition::new("main").with_background("#a\u{e9}234")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("decks[0].background_color"));
}

#[test]
fn catches_malformed_shortcut() {
    let mut config = ViewDeckConfig::default();
    config.decks = vec![DeckDefinition::new("main").with_dev_console("Ctrl++")];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("shortcut_dev_console"));
}

#[test]
fn catches_shortcut_duplicates() {
    let mut config = ViewDeckConfig::default();
    config.decks = vec![
        DeckDefinition::new("a").with_dev_console("F12"),
        DeckDefinition::new("b").with_dev_console("F12"),
    ];
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("duplicate shortcut"));
}

#[test]
fn catches_zero_view_capacity() {
    let mut config = ViewDeckConfig::default();
    config.views.max_views_per_deck = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("views.max_views_per_deck"));
}

#[test]
fn catches_bad_theme_color() {
    let mut config = ViewDeckConfig::default();
    config.theme.dark.window = "not-a-color".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("theme.dark.window"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = ViewDeckConfig::default();
    config.layout.split_ratio = 5.0;
    config.window.titlebar_height = 999;
    config.views.max_views_per_deck = Some(0);
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.split_ratio"));
    assert!(err.contains("window.titlebar_height"));
    assert!(err.contains("views.max_views_per_deck"));
}
