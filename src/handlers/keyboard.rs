//! Keyboard Input Handler
//!
//! Maps key presses to fetch, theme, selection and link actions.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::Focus;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Global keys
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.model.ui.should_quit = true;
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        KeyCode::Char('f') => {
            app.fetch_news();
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.model.ui.focus = app.model.ui.focus.toggled();
            return;
        }
        _ => {}
    }

    let vim_mode = app.model.ui.vim_mode;
    let up = key.code == KeyCode::Up || (vim_mode && key.code == KeyCode::Char('k'));
    let down = key.code == KeyCode::Down || (vim_mode && key.code == KeyCode::Char('j'));

    match app.model.ui.focus {
        Focus::Selector => {
            if up {
                app.model.ui.move_selection(-1);
            } else if down {
                app.model.ui.move_selection(1);
            } else if key.code == KeyCode::Home {
                app.model.ui.country_index = 0;
            } else if key.code == KeyCode::Enter {
                app.fetch_news();
            }
        }
        Focus::Cards => {
            if up {
                app.model.news.move_cursor(-1);
            } else if down {
                app.model.news.move_cursor(1);
            } else if matches!(key.code, KeyCode::Enter | KeyCode::Char('o')) {
                app.open_selected_link();
            }
        }
    }
}
