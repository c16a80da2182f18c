//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# ViewDeck Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[window]
# title = "ViewDeck"
# width = 1280
# height = 800
# startup_mode = "windowed"   # windowed, maximized
# titlebar_height = 35        # 0-200

[layout]
# split_ratio = 0.5           # 0.1-0.9
# tabs_height = 36            # 0-200
# address_bar_height = 36     # 0-200
# gutter_width = 8            # 1-64
# aside_width = 48            # 0-400
# footer_height = 24          # 0-200
# min_column_width = 160

[views]
# max_views_per_deck = 8      # unset = keep every view
# devtools = false

[preload]
# trusted = "/path/to/trusted-preload.js"
# sandboxed = "/path/to/public-preload.js"

[content]
# root = "assets"             # served as viewdeck://localhost/

[theme]
# accent = "#0078d4"

[theme.light]
# title_bar = "#e8e8e8"
# title_bar_text = "#1f1f1f"
# window = "#ffffff"
# background = "#f3f3f3"

[theme.dark]
# title_bar = "#202020"
# title_bar_text = "#f0f0f0"
# window = "#2b2b2b"
# background = "#3b3b3b"

[logging]
# level = "info"              # trace, debug, info, warn, error

# Defining any [[decks]] replaces the ten built-in decks.
#
# [[decks]]
# layout = "leftContent"      # key into the layout object
# name = "leftContent"        # unique deck name
# background_color = "#add8e6"
# scrollbars = true
# trusted = true
# init_file = "loader/leftContent.html"
# shortcut_dev_console = "CmdOrCtrl+Alt+Shift+1"
#
# [[decks]]
# layout = "rightContent"
# name = "rightContent"
# init_url = "https://example.com"
"##
    .to_string()
}
