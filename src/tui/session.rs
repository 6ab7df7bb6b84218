use std::io;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use chrono::Local;
use calgrid::{
    app::{AppState, Mode},
    storage::config::Config,
    ui::theme::Theme,
    input::{normal_mode, command_mode, insert_mode, mouse},
};
use crate::cli::CliOptions;
use crate::tui::{
    presentation::ui,
    sample_events::add_sample_events,
};

pub fn run_tui(config: &Config, options: &CliOptions) -> Result<(), io::Error> {
    let theme_name = options.theme.as_deref().unwrap_or(&config.ui.theme);
    let theme = Theme::get_by_name(theme_name);
    let mut app = AppState::starting_on(Local::now().date_naive(), config.form_defaults())
        .with_theme(theme);

    if options.sample {
        add_sample_events(&mut app);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

/// Draw, wait for one input, apply it, repeat. Every frame is rebuilt from
/// `app`, so each state change shows up on the next draw.
fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if handle_key(key.code, app) {
                    return Ok(());
                }
            }
            TermEvent::Mouse(mouse_event) => {
                if app.notice.is_none() && !app.show_help && app.mode != Mode::Command {
                    let area = terminal.size()?;
                    mouse::handle_event(mouse_event, area, app);
                }
            }
            _ => {}
        }
    }
}

/// Returns `true` when the session should end.
fn handle_key(code: KeyCode, app: &mut AppState) -> bool {
    if app.notice.is_some() {
        if matches!(code, KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q')) {
            app.dismiss_notice();
        }
        return false;
    }

    match app.mode {
        Mode::Normal => {
            if app.show_help {
                handle_help_keys(code, app);
                false
            } else if code == KeyCode::Char('q') {
                true
            } else {
                normal_mode::handle_key(code, app);
                false
            }
        }
        Mode::Insert => {
            insert_mode::handle_key(code, app);
            false
        }
        Mode::Command => command_mode::handle_key(code, app),
    }
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
