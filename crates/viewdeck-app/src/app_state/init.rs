//! Window creation and deck registration.

use std::path::PathBuf;
use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::{Theme, WindowAttributes};

use viewdeck_config::schema::StartupMode;
use viewdeck_platform::ShortcutRegistry;
use viewdeck_webview::{ContentProvider, WryHost};

use super::core::ViewDeckApp;

// =============================================================================
// INITIALIZATION
// =============================================================================

impl ViewDeckApp {
    /// Create the window, register every deck and broadcast the initial
    /// theme. Returns `false` if the window could not be created and the
    /// event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(winit::dpi::LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ))
            .with_maximized(window_config.startup_mode == StartupMode::Maximized);

        // macOS: transparent titlebar with content extending behind traffic lights
        #[cfg(target_os = "macos")]
        let attrs = {
            use winit::platform::macos::WindowAttributesExtMacOS;
            if window_config.titlebar_height > 0 {
                attrs
                    .with_titlebar_transparent(true)
                    .with_title_hidden(true)
                    .with_fullsize_content_view(true)
            } else {
                attrs
            }
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let mut host = WryHost::new(window.clone())
            .with_content(ContentProvider::new(self.content_root()))
            .with_devtools(self.config.views.devtools || cfg!(debug_assertions));
        match viewdeck_platform::webview_data_dir() {
            Ok(dir) => host = host.with_data_dir(dir),
            Err(e) => tracing::warn!("No webview data directory, using platform default: {e}"),
        }

        self.window = Some(window.clone());

        // Layout and theme must exist before decks register so that initial
        // views open at their final position with the current palette.
        self.push_layout();
        self.broadcast_theme(window.theme().unwrap_or(Theme::Light));
        self.decks.initialize(host, self.config.decks.clone());

        let definitions: Vec<_> = self
            .decks
            .decks()
            .map(|deck| deck.definition().clone())
            .collect();
        self.shortcuts = ShortcutRegistry::from_decks(&definitions);

        tracing::info!(
            decks = definitions.len(),
            shortcuts = self.shortcuts.len(),
            "Window created and decks registered"
        );
        true
    }

    /// Asset root for `file` locators, relative paths resolved against the
    /// working directory.
    fn content_root(&self) -> PathBuf {
        let root = &self.config.content.root;
        let resolved = if root.is_absolute() {
            root.clone()
        } else {
            std::env::current_dir().unwrap_or_default().join(root)
        };
        if !resolved.is_dir() {
            tracing::warn!(
                path = %resolved.display(),
                "Content root not found, file locators will not resolve"
            );
        }
        resolved
    }

    /// Push the palette for `theme` to the window and every view.
    pub(super) fn broadcast_theme(&mut self, theme: Theme) {
        let descriptor = self
            .config
            .theme
            .descriptor(theme == Theme::Dark, self.config.window.titlebar_height);
        self.decks.theme_changed(&descriptor);
    }
}
