use chrono::Local;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') | KeyCode::Left => state.move_selection(-1),
        KeyCode::Char('l') | KeyCode::Right => state.move_selection(1),
        KeyCode::Char('j') | KeyCode::Down => state.move_selection(7),
        KeyCode::Char('k') | KeyCode::Up => state.move_selection(-7),
        KeyCode::Char('{') | KeyCode::Char('<') | KeyCode::PageUp => state.previous_month(),
        KeyCode::Char('}') | KeyCode::Char('>') | KeyCode::PageDown => state.next_month(),
        KeyCode::Char('t') => state.goto(Local::now().date_naive()),
        KeyCode::Char('a') | KeyCode::Tab => state.focus_form(),
        KeyCode::Char('?') => {
            state.show_help = !state.show_help;
        }
        KeyCode::Char(':') => {
            state.mode = Mode::Command;
            state.command_buffer = String::from(":");
        }
        _ => {}
    }
}
