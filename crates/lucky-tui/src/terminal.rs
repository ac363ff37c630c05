//! Terminal setup, teardown, and main event loop.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;

use crate::app::TuiApp;
use crate::error::AppResult;
use crate::ui;

/// Launch the TUI application.
pub fn run(mut app: TuiApp) -> AppResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop: draw, block on input, repeat.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
) -> AppResult<()> {
    loop {
        terminal.draw(|frame| ui::draw(frame, app))?;

        if app.should_quit {
            return Ok(());
        }

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            handle_key(app, key);
        }
    }
}

/// Route a key press. Enter and Space are the game's single primary
/// action; everything else is app chrome.
fn handle_key(app: &mut TuiApp, key: crossterm::event::KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.press();
            }
        }
        KeyCode::Char('?') => app.show_help = !app.show_help,
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};
    use lucky_core::{GameConfig, GameSession};

    fn test_app() -> TuiApp {
        TuiApp::new(GameSession::new(GameConfig::default()))
    }

    fn press(app: &mut TuiApp, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn enter_triggers_primary_action() {
        let mut app = test_app();
        press(&mut app, KeyCode::Enter);
        assert!(app.session.state().started());
    }

    #[test]
    fn space_triggers_primary_action() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char(' '));
        assert!(app.session.state().started());
    }

    #[test]
    fn q_quits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = test_app();
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn help_toggles_and_swallows_enter() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);

        press(&mut app, KeyCode::Enter);
        assert!(!app.show_help);
        assert!(!app.session.state().started());
    }
}
