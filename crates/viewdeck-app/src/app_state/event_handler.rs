//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::ActiveEventLoop;
use winit::keyboard::PhysicalKey;
use winit::window::WindowId;

use viewdeck_platform::{normalize_physical_key, KeyCombo};

use super::core::ViewDeckApp;

impl ApplicationHandler for ViewDeckApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if !self.initialize_window(event_loop) {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.push_layout();
                }
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                self.push_layout();
            }

            // A drag cannot survive the window losing focus.
            WindowEvent::Focused(false) => {
                self.cancel_drag();
            }

            WindowEvent::ThemeChanged(theme) => {
                tracing::debug!(?theme, "System theme changed");
                self.broadcast_theme(theme);
            }

            WindowEvent::ModifiersChanged(new_modifiers) => {
                self.modifiers = new_modifiers.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                self.handle_keyboard_input(event);
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }
        self.poll_and_schedule(event_loop);
    }
}

impl ViewDeckApp {
    /// Match key presses against the devtools shortcuts of each deck.
    ///
    /// Matching uses the physical key so that `Alt+Shift+1` is found even
    /// when the layout turns the digit into a symbol.
    fn handle_keyboard_input(&mut self, event: KeyEvent) {
        if event.state != ElementState::Pressed || event.repeat {
            return;
        }
        let PhysicalKey::Code(code) = event.physical_key else {
            return;
        };

        let key = normalize_physical_key(&format!("{code:?}"));
        let combo = KeyCombo::from_winit(
            self.modifiers.control_key(),
            self.modifiers.alt_key(),
            self.modifiers.shift_key(),
            self.modifiers.super_key(),
            key,
        );

        self.trigger_shortcut(&combo);
    }

    /// Toggle devtools for the deck bound to `combo`, if any. Key presses
    /// arrive here from the native window and, when a view holds focus,
    /// forwarded over IPC.
    pub(super) fn trigger_shortcut(&mut self, combo: &KeyCombo) -> Option<String> {
        let deck = self.shortcuts.lookup(combo)?.to_string();
        tracing::debug!(deck = %deck, "Devtools shortcut");
        self.decks.toggle_devtools_for_deck(&deck);
        Some(deck)
    }
}
