//! Graceful shutdown: tear down every view before the window goes away.

use super::core::ViewDeckApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl ViewDeckApp {
    /// Destroy every view and drop any drag in progress.
    ///
    /// Decks stay registered, so calling this twice is harmless.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        self.drag = None;
        self.decks.destroy_all_browser_view();

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::app_state::core::ViewDeckApp;
    use crate::app_state::resize_drag::DragState;
    use viewdeck_config::ViewDeckConfig;

    #[test]
    fn shutdown_on_fresh_app_does_not_panic() {
        let mut app = ViewDeckApp::new(ViewDeckConfig::default());
        app.shutdown();
        assert!(app.drag.is_none());
        assert_eq!(app.decks.decks().count(), 0);
    }

    #[test]
    fn shutdown_is_idempotent() {
        let mut app = ViewDeckApp::new(ViewDeckConfig::default());
        app.shutdown();
        app.shutdown();
        assert!(app.window.is_none());
    }

    #[test]
    fn shutdown_clears_drag() {
        let mut app = ViewDeckApp::new(ViewDeckConfig::default());
        app.drag = Some(DragState::new(0.4, Some("gutter")));
        app.shutdown();
        assert!(app.drag.is_none());
    }
}
