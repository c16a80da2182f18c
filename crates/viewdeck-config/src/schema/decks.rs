//! Deck definitions: the static list of screen regions created at startup.

use serde::{Deserialize, Serialize};

/// One named screen region.
///
/// Optional fields default to: `scrollbars = false`, `trusted = false`,
/// `background_color = None`, no initial content and no devtools shortcut.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckDefinition {
    /// Key into the layout object that positions this deck.
    pub layout: String,
    /// Unique deck identifier used by open/show requests.
    pub name: String,
    #[serde(default, alias = "backgroundColor", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default)]
    pub scrollbars: bool,
    /// Content opened by this deck at startup runs with the privileged preload.
    #[serde(default)]
    pub trusted: bool,
    #[serde(default, alias = "initUrl", skip_serializing_if = "Option::is_none")]
    pub init_url: Option<String>,
    /// Path relative to `[content] root`.
    #[serde(default, alias = "initFile", skip_serializing_if = "Option::is_none")]
    pub init_file: Option<String>,
    /// Key combination toggling devtools for the deck's current view,
    /// e.g. `"CmdOrCtrl+Alt+Shift+1"`.
    #[serde(
        default,
        alias = "shortcutDevConsole",
        skip_serializing_if = "Option::is_none"
    )]
    pub shortcut_dev_console: Option<String>,
}

impl DeckDefinition {
    /// A deck whose layout key equals its name, with every optional field
    /// at its default.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            layout: name.clone(),
            name,
            background_color: None,
            scrollbars: false,
            trusted: false,
            init_url: None,
            init_file: None,
            shortcut_dev_console: None,
        }
    }

    pub fn with_layout(mut self, layout: impl Into<String>) -> Self {
        self.layout = layout.into();
        self
    }

    pub fn with_background(mut self, color: impl Into<String>) -> Self {
        self.background_color = Some(color.into());
        self
    }

    pub fn with_scrollbars(mut self, scrollbars: bool) -> Self {
        self.scrollbars = scrollbars;
        self
    }

    pub fn trusted(mut self) -> Self {
        self.trusted = true;
        self
    }

    pub fn with_init_url(mut self, url: impl Into<String>) -> Self {
        self.init_url = Some(url.into());
        self
    }

    pub fn with_init_file(mut self, file: impl Into<String>) -> Self {
        self.init_file = Some(file.into());
        self
    }

    pub fn with_dev_console(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut_dev_console = Some(shortcut.into());
        self
    }

    /// Whether the definition carries any initial content locator.
    pub fn has_initial_content(&self) -> bool {
        let non_empty = |s: &Option<String>| s.as_deref().is_some_and(|v| !v.trim().is_empty());
        non_empty(&self.init_url) || non_empty(&self.init_file)
    }
}

/// The standard two-column shell: tabs, address bar and content per column,
/// a gutter between them, aside rails and a footer.
pub fn default_decks() -> Vec<DeckDefinition> {
    vec![
        DeckDefinition::new("leftContent")
            .with_background("#add8e6")
            .with_scrollbars(true)
            .trusted()
            .with_init_file("loader/leftContent.html"),
        DeckDefinition::new("leftTabs")
            .with_background("#90ee90")
            .with_dev_console("CmdOrCtrl+Alt+Shift+1")
            .trusted()
            .with_init_file("loader/leftTabs.html"),
        DeckDefinition::new("leftAddressBar")
            .with_background("#ffb6c1")
            .with_init_file("loader/leftAddressBar.html"),
        DeckDefinition::new("rightContent")
            .with_background("#ffffe0")
            .with_scrollbars(true)
            .with_init_file("loader/rightContent.html"),
        DeckDefinition::new("rightTabs")
            .with_background("#cbc3e3")
            .with_init_file("loader/rightTabs.html"),
        DeckDefinition::new("rightAddressBar")
            .with_background("#ffcccb")
            .with_init_file("loader/rightAddressBar.html"),
        // Trusted: the gutter page drives the split drag over IPC.
        DeckDefinition::new("gutter")
            .with_background("#ffd8b1")
            .trusted()
            .with_init_file("loader/gutter.html"),
        DeckDefinition::new("leftAside")
            .with_background("#c4a484")
            .with_init_file("loader/leftAside.html"),
        DeckDefinition::new("rightAside")
            .with_background("#add8e6")
            .with_init_file("loader/rightAside.html"),
        DeckDefinition::new("footer")
            .with_background("#d3d3d3")
            .with_init_file("loader/footer.html"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_decks_cover_standard_layout_keys() {
        let decks = default_decks();
        assert_eq!(decks.len(), 10);
        let names: Vec<&str> = decks.iter().map(|d| d.name.as_str()).collect();
        assert!(names.contains(&"leftContent"));
        assert!(names.contains(&"rightContent"));
        assert!(names.contains(&"footer"));
        assert!(decks.iter().all(|d| d.layout == d.name));
    }

    #[test]
    fn only_first_party_chrome_is_trusted() {
        let trusted: Vec<String> = default_decks()
            .into_iter()
            .filter(|d| d.trusted)
            .map(|d| d.name)
            .collect();
        assert_eq!(trusted, vec!["leftContent", "leftTabs", "gutter"]);
    }

    #[test]
    fn definition_defaults_from_minimal_toml() {
        let def: DeckDefinition = toml::from_str("layout = \"footer\"\nname = \"status\"").unwrap();
        assert_eq!(def.layout, "footer");
        assert_eq!(def.name, "status");
        assert!(!def.scrollbars);
        assert!(!def.trusted);
        assert!(def.background_color.is_none());
        assert!(def.shortcut_dev_console.is_none());
        assert!(!def.has_initial_content());
    }

    #[test]
    fn definition_accepts_camel_case_aliases() {
        let json = r##"{
            "layout": "leftContent",
            "name": "leftContent",
            "backgroundColor": "#add8e6",
            "initFile": "home.html",
            "shortcutDevConsole": "CmdOrCtrl+Alt+Shift+1"
        }"##;
        let def: DeckDefinition = serde_json::from_str(json).unwrap();
        assert_eq!(def.background_color.as_deref(), Some("#add8e6"));
        assert_eq!(def.init_file.as_deref(), Some("home.html"));
        assert_eq!(
            def.shortcut_dev_console.as_deref(),
            Some("CmdOrCtrl+Alt+Shift+1")
        );
    }

    #[test]
    fn blank_locators_are_not_initial_content() {
        let def = DeckDefinition::new("a").with_init_url("  ").with_init_file("");
        assert!(!def.has_initial_content());
        assert!(DeckDefinition::new("a")
            .with_init_url("https://a")
            .has_initial_content());
    }
}
