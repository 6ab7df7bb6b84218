use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use calgrid::app::AppState;

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(message) = &app.notice else {
        return;
    };

    let area = f.size();
    let dialog_width = 50.min(area.width);
    let dialog_height = 7.min(area.height);
    let x = (area.width.saturating_sub(dialog_width)) / 2;
    let y = (area.height.saturating_sub(dialog_height)) / 2;

    let dialog_area = ratatui::layout::Rect {
        x,
        y,
        width: dialog_width,
        height: dialog_height,
    };

    f.render_widget(Clear, dialog_area);

    let dialog_text = vec![
        Line::from(""),
        Line::from(vec![Span::styled(
            message.as_str(),
            Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" / "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = OK"),
        ]),
    ];

    let dialog_paragraph = Paragraph::new(dialog_text)
        .wrap(Wrap { trim: true })
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Notice ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}
