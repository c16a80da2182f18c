use tracing::{debug, info, warn};
use viewdeck_common::{PixelRect, TrustLevel};

use crate::host::{ContentLocator, ContentSurface, HostWindow, SurfaceSpec};

use super::deck::View;
use super::{apply_bounds, attach, detach, OpenRequest, ViewDeckManager};

impl<H: HostWindow> ViewDeckManager<H> {
    /// Show content in a deck, creating the view or reusing the one already
    /// bound to the request's key.
    ///
    /// Ignored when the deck is unknown or the request names no content.
    pub fn open_in_deck(&mut self, deck: &str, request: OpenRequest) {
        let Some(locator) = request.locator() else {
            debug!(deck = %deck, "open request without url or file ignored");
            return;
        };
        let Some(target) = self.decks.iter().find(|d| d.name() == deck) else {
            warn!(deck = %deck, "open request for unknown deck ignored");
            return;
        };

        let key = match request.explicit_key() {
            Some(key) => key.to_string(),
            None => target.next_key(),
        };
        self.materialize(deck, &key, Some((locator, &request)));
    }

    /// Switch a deck to a view it already holds. Nothing is loaded.
    pub fn show_view_in_deck(&mut self, deck: &str, key: &str) {
        let Some(target) = self.decks.iter().find(|d| d.name() == deck) else {
            warn!(deck = %deck, key = %key, "show request for unknown deck ignored");
            return;
        };
        if !target.views.contains(key) {
            warn!(deck = %deck, key = %key, "show request for unknown view ignored");
            return;
        }
        self.materialize(deck, key, None);
    }

    /// Make `key` the current view of `deck`.
    ///
    /// `open` carries what to build when the key is new; without it only an
    /// existing view can be selected.
    fn materialize(
        &mut self,
        deck_name: &str,
        key: &str,
        open: Option<(ContentLocator, &OpenRequest)>,
    ) {
        let Some(host) = self.host.as_mut() else {
            warn!(deck = %deck_name, "no host window registered");
            return;
        };
        let Some(deck) = self.decks.iter_mut().find(|d| d.definition.name == deck_name) else {
            return;
        };
        let focus = open.as_ref().is_some_and(|(_, req)| req.wants_focus());

        match (deck.views.contains(key), open) {
            (true, open) => {
                if let (Some((_, request)), Some(view)) = (open, deck.views.peek(key)) {
                    let requested = TrustLevel::from_trusted(request.trusted);
                    if requested != view.trust() {
                        warn!(
                            deck = %deck_name,
                            key = %key,
                            current = %view.trust(),
                            requested = %requested,
                            "trust level is fixed per view, keeping the original"
                        );
                    }
                    debug!(deck = %deck_name, key = %key, "reusing view");
                }
            }
            (false, Some((locator, request))) => {
                let trust = TrustLevel::from_trusted(request.trusted);
                let background = deck.definition.background_color.clone();
                let spec = SurfaceSpec {
                    deck: deck_name.to_string(),
                    key: key.to_string(),
                    trust,
                    preload: self.options.preloads.for_trust(trust).to_string(),
                    locator: locator.clone(),
                    background: background.clone(),
                    scrollbars: deck.definition.scrollbars,
                    theme: self.theme.as_ref().map(|(_, script)| script.clone()),
                    bounds: PixelRect::ZERO,
                };
                let surface = match host.create_surface(&spec) {
                    Ok(surface) => surface,
                    Err(e) => {
                        warn!(deck = %deck_name, key = %key, error = %e, "failed to create view");
                        return;
                    }
                };
                deck.created += 1;
                info!(deck = %deck_name, key = %key, %trust, url = %locator.to_url(), "view created");

                let view = View::new(key.to_string(), locator, trust, background, surface);
                for mut evicted in deck.views.insert(view, key) {
                    if deck.pending_removal.as_deref() == Some(evicted.key()) {
                        deck.pending_removal = None;
                    }
                    detach(host, deck_name, &mut evicted);
                    info!(deck = %deck_name, key = %evicted.key(), "view evicted");
                }
            }
            (false, None) => return,
        }

        // Displace the current view: hide it now, detach it on the next switch.
        let displaced = deck
            .current
            .take()
            .filter(|prev| prev != key && deck.views.contains(prev));
        if let Some(prev) = &displaced {
            if let Some(view) = deck.views.peek_mut(prev) {
                apply_bounds(deck_name, view, PixelRect::ZERO);
            }
        }
        if displaced.is_some() {
            let stale = std::mem::replace(&mut deck.pending_removal, displaced);
            if let Some(stale) = stale.filter(|k| k != key) {
                if let Some(view) = deck.views.peek_mut(&stale) {
                    detach(host, deck_name, view);
                }
            }
        }
        if deck.pending_removal.as_deref() == Some(key) {
            deck.pending_removal = None;
        }

        let bounds = deck.visible_bounds();
        let Some(view) = deck.views.touch(key) else {
            return;
        };
        attach(host, deck_name, view);
        apply_bounds(deck_name, view, bounds);
        if focus {
            if let Err(e) = view.surface.focus() {
                warn!(deck = %deck_name, key = %key, error = %e, "failed to focus view");
            }
        }
        deck.current = Some(key.to_string());
        debug!(deck = %deck_name, key = %key, %bounds, "view is current");
    }
}
