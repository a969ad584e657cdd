//! Keyboard dispatch — a single handler, no panel focus to track.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::App;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // The load-failure screen only accepts retry and quit.
    if app.fatal_error.is_some() {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => app.running = false,
            KeyCode::Char('r') => app.reload(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.running = false,
        KeyCode::Char('m') => app.toggle_market(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Char(' ') => app.toggle_canton(),
        KeyCode::Char('a') => app.select_all_cantons(),
        KeyCode::Char('n') => app.clear_canton_selection(),
        KeyCode::Char(',') => app.adjust_min_rooms(-0.5),
        KeyCode::Char('.') => app.adjust_min_rooms(0.5),
        KeyCode::Char('[') => app.adjust_max_rooms(-0.5),
        KeyCode::Char(']') => app.adjust_max_rooms(0.5),
        KeyCode::Char('{') => app.adjust_min_price(-1.0),
        KeyCode::Char('}') => app.adjust_min_price(1.0),
        KeyCode::Char('-') => app.adjust_max_price(-1.0),
        KeyCode::Char('+') | KeyCode::Char('=') => app.adjust_max_price(1.0),
        _ => {}
    }
}
