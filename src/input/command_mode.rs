use chrono::{Local, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    Today,
    NewEvent(Option<String>),
    Theme(String),
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    if parts.is_empty() {
        return Command::Error("Empty command".to_string());
    }

    match parts[0] {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "today" => Command::Today,
        "goto" => {
            if parts.len() < 2 {
                Command::Error("goto requires a date argument".to_string())
            } else if let Ok(date) = NaiveDate::parse_from_str(parts[1], "%Y-%m-%d") {
                Command::Goto(date)
            } else {
                Command::Error(format!("Invalid date format: {}", parts[1]))
            }
        }
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "theme" => {
            if parts.len() < 2 {
                Command::Error("theme requires a theme name".to_string())
            } else {
                Command::Theme(parts[1].to_string())
            }
        }
        _ => Command::Error(format!("Unknown command: {}", parts[0])),
    }
}

/// Returns `true` when the command asks to quit.
pub fn handle_key(code: KeyCode, state: &mut AppState) -> bool {
    match code {
        KeyCode::Enter => {
            let cmd = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            execute(cmd, state)
        }
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
            false
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
            false
        }
        KeyCode::Char(c) => {
            state.command_buffer.push(c);
            false
        }
        _ => false,
    }
}

fn execute(cmd: Command, state: &mut AppState) -> bool {
    match cmd {
        Command::Quit => return true,
        Command::Goto(date) => state.goto(date),
        Command::Today => state.goto(Local::now().date_naive()),
        Command::NewEvent(title) => {
            if let Some(title) = title {
                state.form.title = title;
            }
            state.focus_form();
        }
        Command::Theme(name) => {
            state.theme = Theme::get_by_name(&name);
            tracing::info!("Switched theme to {}", state.theme.name);
        }
        Command::Help => {
            state.show_help = !state.show_help;
        }
        Command::Error(message) => {
            tracing::warn!("Command failed: {}", message);
            state.notice = Some(message);
        }
    }
    false
}
