use std::num::NonZeroUsize;

use viewdeck_common::{PixelRect, Rect, TrustLevel};
use viewdeck_config::DeckDefinition;

use crate::host::ContentLocator;

use super::registry::ViewRegistry;

/// One content surface bound to a deck and an application key.
pub struct View<S> {
    key: String,
    locator: ContentLocator,
    trust: TrustLevel,
    background: Option<String>,
    pub(super) applied: PixelRect,
    pub(super) attached: bool,
    pub(super) surface: S,
}

impl<S> View<S> {
    pub(crate) fn new(
        key: String,
        locator: ContentLocator,
        trust: TrustLevel,
        background: Option<String>,
        surface: S,
    ) -> Self {
        Self {
            key,
            locator,
            trust,
            background,
            applied: PixelRect::ZERO,
            attached: false,
            surface,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// What the view loaded when it was built.
    pub fn locator(&self) -> &ContentLocator {
        &self.locator
    }

    pub fn trust(&self) -> TrustLevel {
        self.trust
    }

    pub fn background(&self) -> Option<&str> {
        self.background.as_deref()
    }

    /// Last bounds handed to the surface.
    pub fn applied_bounds(&self) -> PixelRect {
        self.applied
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

/// A named screen region and the views it has shown.
///
/// `current` is the visible view. `pending_removal` is the view displaced
/// by the last switch: hidden but still attached until the next switch.
pub struct Deck<S> {
    pub(super) definition: DeckDefinition,
    pub(super) rect: Rect,
    pub(super) hidden: bool,
    pub(super) created: usize,
    pub(super) views: ViewRegistry<S>,
    pub(super) current: Option<String>,
    pub(super) pending_removal: Option<String>,
}

impl<S> Deck<S> {
    pub(super) fn new(definition: DeckDefinition, rect: Rect, capacity: Option<NonZeroUsize>) -> Self {
        Self {
            definition,
            rect,
            hidden: false,
            created: 0,
            views: ViewRegistry::new(capacity),
            current: None,
            pending_removal: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn layout_key(&self) -> &str {
        &self.definition.layout
    }

    pub fn definition(&self) -> &DeckDefinition {
        &self.definition
    }

    /// The rectangle from the last layout, even while hidden.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Bounds the current view should have right now.
    pub(super) fn visible_bounds(&self) -> PixelRect {
        if self.hidden {
            PixelRect::ZERO
        } else {
            self.rect.round()
        }
    }

    /// How many views this deck has built, including evicted ones.
    pub fn created_count(&self) -> usize {
        self.created
    }

    pub(super) fn next_key(&self) -> String {
        format!("{}-{}", self.definition.name, self.created)
    }

    pub fn current_key(&self) -> Option<&str> {
        self.current.as_deref()
    }

    pub fn current_view(&self) -> Option<&View<S>> {
        self.current.as_deref().and_then(|k| self.views.peek(k))
    }

    pub fn pending_removal(&self) -> Option<&str> {
        self.pending_removal.as_deref()
    }

    pub fn view(&self, key: &str) -> Option<&View<S>> {
        self.views.peek(key)
    }

    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Keys from most to least recently shown.
    pub fn view_keys(&self) -> Vec<&str> {
        self.views.keys().collect()
    }

    pub fn views(&self) -> impl Iterator<Item = &View<S>> {
        self.views.iter()
    }
}
