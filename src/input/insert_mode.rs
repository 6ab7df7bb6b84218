use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::form::FormField;

const DATE_BUFFER_LEN: usize = 10;
const TIME_BUFFER_LEN: usize = 5;
const DURATION_BUFFER_LEN: usize = 5;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Esc => {
            state.form.commit_active_field();
            state.mode = Mode::Normal;
            return;
        }
        KeyCode::Enter => {
            // Rejections surface through `state.notice`.
            let _ = state.submit_form();
            return;
        }
        _ => {}
    }

    let form = &mut state.form;

    match key {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Left if form.active_field == FormField::Color => {
            form.color = form.color.prev();
        }
        KeyCode::Right | KeyCode::Char(' ') if form.active_field == FormField::Color => {
            form.color = form.color.next();
        }
        KeyCode::Backspace => match form.active_field {
            FormField::Title => {
                form.title.pop();
            }
            FormField::Date => {
                form.date_input_buffer.pop();
                form.date_buffer_touched = true;
            }
            FormField::Time => {
                form.time_input_buffer.pop();
                form.time_buffer_touched = true;
            }
            FormField::Duration => {
                form.duration_input_buffer.pop();
                form.duration_buffer_touched = true;
            }
            FormField::Color => {}
        },
        KeyCode::Char(c) => match form.active_field {
            FormField::Title => {
                form.title.push(c);
            }
            FormField::Date => {
                if c.is_ascii_digit() || c == '-' {
                    if !form.date_buffer_touched {
                        form.date_input_buffer.clear();
                        form.date_buffer_touched = true;
                    }
                    if form.date_input_buffer.len() < DATE_BUFFER_LEN {
                        form.date_input_buffer.push(c);
                    }
                }
            }
            FormField::Time => {
                if c.is_ascii_digit() || c == ':' {
                    if !form.time_buffer_touched {
                        form.time_input_buffer.clear();
                        form.time_buffer_touched = true;
                    }
                    if form.time_input_buffer.len() < TIME_BUFFER_LEN {
                        form.time_input_buffer.push(c);
                    }
                }
            }
            FormField::Duration => {
                if c.is_ascii_digit() {
                    if !form.duration_buffer_touched {
                        form.duration_input_buffer.clear();
                        form.duration_buffer_touched = true;
                    }
                    if form.duration_input_buffer.len() < DURATION_BUFFER_LEN {
                        form.duration_input_buffer.push(c);
                    }
                }
            }
            FormField::Color => {}
        },
        _ => {}
    }
}
