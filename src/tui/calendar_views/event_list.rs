use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use calgrid::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let events = app.selected_events();

    let title = app.selected_date.format("%A, %B %-d, %Y").to_string();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(title, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    if events.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("No events scheduled", Style::default().fg(Color::DarkGray)),
        ]));
    } else {
        for event in &events {
            let color = app.theme.event_color(event.color);
            lines.push(Line::from(vec![
                Span::styled("● ", Style::default().fg(color)),
                Span::styled(&event.title, Style::default().add_modifier(Modifier::BOLD)),
            ]));
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    format!("{} ({} mins)", event.time_label(), event.duration_minutes),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
        }
    }

    let content = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(" Selected Day "));
    f.render_widget(content, area);
}
