//! Top-level application state.

use lucky_core::{GameSession, ViewModel};

/// Main application state for the TUI.
pub struct TuiApp {
    /// The running game session.
    pub session: GameSession,
    /// View-model for the current frame, refreshed after every press.
    pub view: ViewModel,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl TuiApp {
    /// Create the app around a session, rendering its initial view.
    pub fn new(session: GameSession) -> Self {
        let view = session.view();
        Self {
            session,
            view,
            show_help: false,
            should_quit: false,
        }
    }

    /// Apply one press of the primary button and refresh the view.
    pub fn press(&mut self) {
        self.view = self.session.press();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucky_core::{GameConfig, WELCOME_TEXT};

    #[test]
    fn initial_view_is_welcome() {
        let app = TuiApp::new(GameSession::new(GameConfig::default()));
        assert_eq!(app.view.message, WELCOME_TEXT);
        assert_eq!(app.view.button_label, "Start");
        assert!(!app.should_quit);
    }

    #[test]
    fn press_refreshes_view() {
        let mut app = TuiApp::new(GameSession::new(GameConfig::default()));
        app.press();
        assert_eq!(app.view.button_label, "Roll");
        assert!(app.session.state().started());
    }
}
