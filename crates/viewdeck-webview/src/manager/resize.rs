use tracing::{debug, warn};
use viewdeck_common::{Layout, PixelRect};

use crate::host::HostWindow;

use super::deck::Deck;
use super::{apply_bounds, ViewDeckManager};

impl<H: HostWindow> ViewDeckManager<H> {
    /// Store `layout` and move every deck it names. Decks missing from the
    /// layout keep their rectangle.
    pub fn resize(&mut self, layout: Layout) {
        for deck in &mut self.decks {
            let Some(rect) = layout.get(deck.layout_key()).copied() else {
                continue;
            };
            deck.rect = rect;
            let bounds = deck.visible_bounds();
            apply_current(deck, bounds);
        }
        debug!(regions = layout.len(), "layout applied");
        self.layout = Some(layout);
    }

    /// Collapse every deck's current view, except `except`. Used while the
    /// user drags the layout grid.
    pub fn hide_all(&mut self, except: Option<&str>) {
        for deck in self.decks.iter_mut().filter(|d| Some(d.name()) != except) {
            deck.hidden = true;
            apply_current(deck, PixelRect::ZERO);
        }
    }

    /// Restore every deck's current view, except `except`.
    pub fn show_all(&mut self, except: Option<&str>) {
        for deck in self.decks.iter_mut().filter(|d| Some(d.name()) != except) {
            deck.hidden = false;
            let bounds = deck.visible_bounds();
            apply_current(deck, bounds);
        }
    }

    /// Restore a single deck.
    pub fn show(&mut self, name: &str) {
        let Some(deck) = self.decks.iter_mut().find(|d| d.name() == name) else {
            warn!(deck = %name, "show for unknown deck ignored");
            return;
        };
        deck.hidden = false;
        let bounds = deck.visible_bounds();
        apply_current(deck, bounds);
    }

    /// Abort an interactive drag: unhide everything and snap every deck back
    /// to the last committed layout.
    pub fn cancel_resize(&mut self) {
        for deck in &mut self.decks {
            deck.hidden = false;
            if let Some(rect) = self
                .layout
                .as_ref()
                .and_then(|layout| layout.get(deck.layout_key()))
            {
                deck.rect = *rect;
            }
            let bounds = deck.visible_bounds();
            apply_current(deck, bounds);
        }
        debug!("resize cancelled");
    }
}

fn apply_current<S: crate::host::ContentSurface>(deck: &mut Deck<S>, bounds: PixelRect) {
    let Some(key) = deck.current.as_deref() else {
        return;
    };
    if let Some(view) = deck.views.peek_mut(key) {
        apply_bounds(&deck.definition.name, view, bounds);
    }
}
