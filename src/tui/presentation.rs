use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calgrid::{
    app::{AppState, Mode},
    ui::layout::screen_layout,
};
use crate::tui::{calendar_views, dialogs};

pub fn ui(f: &mut Frame, app: &AppState) {
    let screen = screen_layout(f.size());

    let title = Paragraph::new(app.current_date().format("%B %Y").to_string())
        .style(Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, screen.header);

    let button_style = Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD);
    f.render_widget(
        Paragraph::new(" ◀ ").style(button_style).alignment(Alignment::Center),
        screen.prev_button,
    );
    f.render_widget(
        Paragraph::new(" ▶ ").style(button_style).alignment(Alignment::Center),
        screen.next_button,
    );

    calendar_views::month::render(f, app, screen.grid);
    calendar_views::event_list::render(f, app, screen.details);
    calendar_views::event_form::render(f, app, screen.form);

    let status_text = if matches!(app.mode, Mode::Command) {
        app.command_buffer.to_string()
    } else {
        format!("{:?} | Events: {} | Press 'q' to quit, '?' for help",
            app.mode, app.store.len())
    };

    let status_color = if matches!(app.mode, Mode::Command) {
        app.theme.command_mode
    } else {
        app.theme.status_bar
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(if matches!(app.mode, Mode::Command) { Alignment::Left } else { Alignment::Center })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, screen.status);

    if app.show_help {
        dialogs::help::render(f, app);
    }

    if app.notice.is_some() {
        dialogs::notice::render(f, app);
    }
}
