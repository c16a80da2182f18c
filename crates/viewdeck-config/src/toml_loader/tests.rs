//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use viewdeck_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_viewdeck_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[window]
title = "Split Browser"
titlebar_height = 28

[views]
max_views_per_deck = 5
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "Split Browser");
    assert_eq!(config.window.titlebar_height, 28);
    assert_eq!(config.views.max_views_per_deck, Some(5));
    // Defaults preserved
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.decks.len(), 10);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_config_with_invalid_values_is_returned_as_parsed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[layout]
split_ratio = 2.0
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert!((config.layout.split_ratio - 2.0).abs() < f64::EPSILON);
}

#[test]
fn create_and_load_default_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("viewdeck").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.window.title, "ViewDeck");
    assert_eq!(config.decks.len(), 10);
}

#[test]
fn default_config_toml_is_valid() {
    use super::template::default_config_toml;
    use crate::schema::ViewDeckConfig;

    let content = default_config_toml();
    let config: ViewDeckConfig = toml::from_str(&content).unwrap();
    assert_eq!(config.theme.accent, "#0078d4");
    assert!(crate::validation::validate(&config).is_ok());
}

#[test]
fn default_config_path_is_reasonable() {
    if let Ok(path) = default_config_path() {
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("viewdeck"));
        assert!(path_str.ends_with("config.toml"));
    }
}

#[test]
fn load_non_ascii_color_warns_and_continues() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[[decks]]\nlayout = \"leftContent\"\nname = \"main\"\nbackground_color = \"#a\u{e9}234\"\n",
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.decks.len(), 1);
    assert_eq!(
        config.decks[0].background_color.as_deref(),
        Some("#a\u{e9}234")
    );
}
