//! View-deck management.
//!
//! [`ViewDeckManager`] owns every deck and every view. It builds surfaces
//! through a [`HostWindow`], swaps the visible view per deck, and keeps view
//! bounds in sync with the layout pushed by the geometry provider.
//!
//! Nothing here returns an error to the caller: unknown decks, empty
//! requests and host failures are logged and absorbed, because every call
//! originates from a UI event that may race with deck registration.

use tracing::{debug, info, warn};
use viewdeck_common::{Layout, PixelRect, Rect, ThemeDescriptor};
use viewdeck_config::DeckDefinition;

use crate::host::{ContentSurface, HostWindow};
use crate::theme_bridge::theme_script;

mod deck;
mod lifecycle;
mod registry;
mod resize;
mod types;


pub use deck::{Deck, View};
pub use registry::ViewRegistry;
pub use types::{ManagerOptions, OpenRequest};

/// Tracks decks and their views inside one host window.
pub struct ViewDeckManager<H: HostWindow> {
    host: Option<H>,
    /// Registration order; names are unique.
    decks: Vec<Deck<H::Surface>>,
    /// Last layout pushed by the geometry provider.
    layout: Option<Layout>,
    /// Last broadcast theme and its script form, handed to new views.
    theme: Option<(ThemeDescriptor, String)>,
    options: ManagerOptions,
}

impl<H: HostWindow> ViewDeckManager<H> {
    pub fn new(options: ManagerOptions) -> Self {
        Self {
            host: None,
            decks: Vec::new(),
            layout: None,
            theme: None,
            options,
        }
    }

    /// Register the host window and create a deck per definition.
    ///
    /// The first host registered is kept. A definition whose name is already
    /// registered is skipped. Definitions carrying initial content open it in
    /// the background with the definition's trust.
    pub fn initialize(&mut self, host: H, definitions: impl IntoIterator<Item = DeckDefinition>) {
        if self.host.is_some() {
            warn!("host window already registered, keeping the first one");
        } else {
            let mut host = host;
            if let Some((theme, _)) = &self.theme {
                if let Err(e) = host.theme_changed(theme) {
                    warn!(error = %e, "host rejected theme");
                }
            }
            self.host = Some(host);
        }

        for definition in definitions {
            if self.deck(&definition.name).is_some() {
                debug!(deck = %definition.name, "deck already registered, skipping");
                continue;
            }

            let rect = self
                .layout
                .as_ref()
                .and_then(|layout| layout.get(&definition.layout))
                .copied()
                .unwrap_or(Rect::ZERO);
            let name = definition.name.clone();
            let initial = initial_request(&definition);

            info!(deck = %name, layout = %definition.layout, trusted = definition.trusted, "deck registered");
            self.decks.push(Deck::new(
                definition,
                rect,
                self.options.max_views_per_deck,
            ));

            if let Some(request) = initial {
                self.open_in_deck(&name, request);
            }
        }
    }

    /// Broadcast a theme to the host window and every view. Views created
    /// later start with it.
    pub fn theme_changed(&mut self, theme: &ThemeDescriptor) {
        if let Some(host) = self.host.as_mut() {
            if let Err(e) = host.theme_changed(theme) {
                warn!(error = %e, "host rejected theme");
            }
        }

        let script = theme_script(theme);
        for deck in &self.decks {
            for view in deck.views() {
                if let Err(e) = view.surface.evaluate_script(&script) {
                    warn!(deck = %deck.name(), key = %view.key(), error = %e, "failed to apply theme");
                }
            }
        }
        debug!(dark = theme.should_use_dark_colors, "theme broadcast");
        self.theme = Some((theme.clone(), script));
    }

    /// Tear down every view. Decks stay registered and can open new views.
    pub fn destroy_all_browser_view(&mut self) {
        let mut destroyed = 0usize;
        for deck in &mut self.decks {
            deck.current = None;
            deck.pending_removal = None;
            for mut view in deck.views.drain() {
                if view.attached {
                    if let Some(host) = self.host.as_mut() {
                        detach(host, deck.definition.name.as_str(), &mut view);
                    }
                }
                destroyed += 1;
            }
        }
        info!(destroyed, "all views destroyed");
    }

    /// Toggle the inspector of a deck's current view.
    pub fn toggle_devtools_for_deck(&mut self, name: &str) {
        let Some(deck) = self.decks.iter_mut().find(|d| d.definition.name == name) else {
            warn!(deck = %name, "devtools toggle for unknown deck");
            return;
        };
        let Some(key) = deck.current.clone() else {
            debug!(deck = %name, "devtools toggle with no current view");
            return;
        };
        if let Some(view) = deck.views.peek_mut(&key) {
            match view.surface.toggle_devtools() {
                Ok(()) => debug!(deck = %name, key = %key, "devtools toggled"),
                Err(e) => warn!(deck = %name, key = %key, error = %e, "devtools toggle failed"),
            }
        }
    }

    pub fn deck(&self, name: &str) -> Option<&Deck<H::Surface>> {
        self.decks.iter().find(|d| d.name() == name)
    }

    /// Decks in registration order.
    pub fn decks(&self) -> impl Iterator<Item = &Deck<H::Surface>> {
        self.decks.iter()
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn host(&self) -> Option<&H> {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> Option<&mut H> {
        self.host.as_mut()
    }

    pub fn options(&self) -> &ManagerOptions {
        &self.options
    }
}

fn initial_request(definition: &DeckDefinition) -> Option<OpenRequest> {
    if !definition.has_initial_content() {
        return None;
    }
    let request = OpenRequest {
        url: definition.init_url.clone(),
        file: definition.init_file.clone(),
        ..Default::default()
    };
    Some(request.trusted(definition.trusted).in_background())
}

/// Hand `bounds` to a view's surface. The view records the bounds even when
/// the surface rejects them, so the next layout push retries with the right
/// intent.
fn apply_bounds<S: ContentSurface>(deck: &str, view: &mut View<S>, bounds: PixelRect) {
    view.applied = bounds;
    if let Err(e) = view.surface.set_bounds(bounds) {
        warn!(deck = %deck, key = %view.key(), %bounds, error = %e, "failed to apply view bounds");
    }
}

fn attach<H: HostWindow>(host: &mut H, deck: &str, view: &mut View<H::Surface>) {
    if view.attached {
        return;
    }
    match host.attach(&mut view.surface) {
        Ok(()) => debug!(deck = %deck, key = %view.key(), "view attached"),
        Err(e) => warn!(deck = %deck, key = %view.key(), error = %e, "failed to attach view"),
    }
    view.attached = true;
}

fn detach<H: HostWindow>(host: &mut H, deck: &str, view: &mut View<H::Surface>) {
    if !view.attached {
        return;
    }
    match host.detach(&mut view.surface) {
        Ok(()) => debug!(deck = %deck, key = %view.key(), "view detached"),
        Err(e) => warn!(deck = %deck, key = %view.key(), error = %e, "failed to detach view"),
    }
    view.attached = false;
}
