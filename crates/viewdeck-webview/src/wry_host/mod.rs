//! [`HostWindow`] backed by wry child webviews.
//!
//! Every view is a `wry::WebView` built as a child of one native window.
//! Attaching and detaching toggle the child's visibility; the webview itself
//! lives until its [`WrySurface`] is dropped.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, info};
use viewdeck_common::{Color, HostError, ThemeDescriptor};
use wry::raw_window_handle::HasWindowHandle;
use wry::WebViewBuilder;

use crate::content::ContentProvider;
use crate::events::{EventSink, ViewOrigin, WebViewEvent};
use crate::host::{HostWindow, SurfaceSpec};
use crate::preload::{SCROLLBARS_HIDDEN_SCRIPT, SHORTCUT_FORWARD_SCRIPT};

mod bounds;
mod context;
mod handlers;
mod navigation;
mod surface;

pub use bounds::pixel_rect_to_wry;
pub use context::context_data_dir;
pub use navigation::{NavigationPolicy, LOCAL_PREFIXES};
pub use surface::WrySurface;

/// Builds wry webviews inside `W`.
pub struct WryHost<W: HasWindowHandle> {
    window: Arc<W>,
    events: EventSink,
    content: Option<Arc<ContentProvider>>,
    devtools: bool,
    contexts: context::WebContexts,
}

impl<W: HasWindowHandle> WryHost<W> {
    pub fn new(window: Arc<W>) -> Self {
        Self {
            window,
            events: EventSink::new(),
            content: None,
            devtools: cfg!(debug_assertions),
            contexts: context::WebContexts::new(None),
        }
    }

    /// Serve `file` locators from this provider.
    pub fn with_content(mut self, provider: ContentProvider) -> Self {
        info!(root = %provider.root().display(), "content provider registered");
        self.content = Some(Arc::new(provider));
        self
    }

    pub fn with_devtools(mut self, enabled: bool) -> Self {
        self.devtools = enabled;
        self
    }

    /// Keep browsing data under `dir`, one subdirectory per trust level.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.contexts = context::WebContexts::new(Some(dir.into()));
        self
    }

    /// Take every event raised by surfaces since the last call.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        self.events.drain()
    }
}

impl<W: HasWindowHandle> HostWindow for WryHost<W> {
    type Surface = WrySurface;

    fn create_surface(&mut self, spec: &SurfaceSpec) -> Result<WrySurface, HostError> {
        let origin = ViewOrigin {
            deck: spec.deck.clone(),
            key: spec.key.clone(),
            trust: spec.trust,
        };
        let url = spec.locator.to_url();

        let mut builder = WebViewBuilder::with_web_context(self.contexts.for_trust(spec.trust))
            .with_bounds(pixel_rect_to_wry(spec.bounds))
            .with_visible(false)
            .with_focused(false)
            .with_devtools(self.devtools)
            .with_initialization_script(&spec.preload)
            .with_initialization_script(SHORTCUT_FORWARD_SCRIPT);

        if !spec.scrollbars {
            builder = builder.with_initialization_script(SCROLLBARS_HIDDEN_SCRIPT);
        }
        if let Some(theme) = &spec.theme {
            builder = builder.with_initialization_script(theme);
        }
        if let Some(color) = spec.background.as_deref().and_then(Color::parse) {
            builder = builder.with_background_color((color.r, color.g, color.b, color.a));
        }

        // Channel filtering by trust happens where IPC is dispatched.
        builder = handlers::attach_ipc_handler(builder, self.events.clone(), origin.clone());
        builder = handlers::attach_page_load_handler(builder, self.events.clone(), origin.clone());
        builder = handlers::attach_title_handler(builder, self.events.clone(), origin.clone());
        builder = handlers::attach_navigation_handler(
            builder,
            self.events.clone(),
            origin.clone(),
            NavigationPolicy::new(spec.trust, &url),
        );
        builder = handlers::attach_custom_protocol(builder, self.content.clone());

        let webview = builder
            .with_url(&url)
            .build_as_child(self.window.as_ref())
            .map_err(|e| HostError::CreateFailed(e.to_string()))?;

        debug!(deck = %spec.deck, key = %spec.key, trust = %spec.trust, url = %url, "webview built");
        Ok(WrySurface { webview, origin })
    }

    fn attach(&mut self, surface: &mut WrySurface) -> Result<(), HostError> {
        surface
            .webview
            .set_visible(true)
            .map_err(|e| HostError::Other(e.to_string()))
    }

    fn detach(&mut self, surface: &mut WrySurface) -> Result<(), HostError> {
        surface
            .webview
            .set_visible(false)
            .map_err(|e| HostError::Other(e.to_string()))
    }

    fn theme_changed(&mut self, theme: &ThemeDescriptor) -> Result<(), HostError> {
        // Pages receive the theme through their own scripts; the native
        // window follows the system theme already.
        debug!(dark = theme.should_use_dark_colors, "window theme updated");
        Ok(())
    }
}
