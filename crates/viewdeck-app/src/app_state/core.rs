//! ViewDeckApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use viewdeck_config::ViewDeckConfig;
use viewdeck_platform::ShortcutRegistry;
use viewdeck_webview::{ManagerOptions, PreloadSet, ViewDeckManager, WryHost};

use super::geometry::SplitGeometry;
use super::resize_drag::DragState;

/// Top-level application state.
pub struct ViewDeckApp {
    pub(super) config: ViewDeckConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,

    // Decks and their views
    pub(super) decks: ViewDeckManager<WryHost<Window>>,
    pub(super) geometry: SplitGeometry,
    pub(super) drag: Option<DragState>,

    // Devtools shortcuts, bound once decks are registered
    pub(super) shortcuts: ShortcutRegistry,
    pub(super) modifiers: winit::keyboard::ModifiersState,

    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl ViewDeckApp {
    pub fn new(config: ViewDeckConfig) -> Self {
        let preloads = PreloadSet::load(
            config.preload.trusted.as_deref(),
            config.preload.sandboxed.as_deref(),
        );
        let options = ManagerOptions::default()
            .with_capacity(config.views.max_views_per_deck.unwrap_or(0))
            .with_preloads(preloads);
        let geometry = SplitGeometry::new(&config.layout, config.window.titlebar_height);

        Self {
            config,
            window: None,
            decks: ViewDeckManager::new(options),
            geometry,
            drag: None,
            shortcuts: ShortcutRegistry::default(),
            modifiers: winit::keyboard::ModifiersState::empty(),
            should_exit: false,
            last_poll: Instant::now(),
        }
    }

    /// Window inner size in logical pixels, or zero before the window exists.
    pub(super) fn logical_size(&self) -> (f64, f64) {
        match &self.window {
            Some(w) => {
                let size = w.inner_size().to_logical::<f64>(w.scale_factor());
                (size.width, size.height)
            }
            None => (0.0, 0.0),
        }
    }

    /// Recompute the layout from the window size and push it to the decks.
    pub(super) fn push_layout(&mut self) {
        let (width, height) = self.logical_size();
        if width <= 0.0 || height <= 0.0 {
            return;
        }
        let layout = self.geometry.compute(width, height);
        self.decks.resize(layout);
    }
}
