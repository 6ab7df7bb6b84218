use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use calgrid::{app::AppState, ui::theme::Theme};

pub fn render(f: &mut Frame, app: &AppState) {
    let area = f.size();
    let help_width = 60.min(area.width);
    let help_height = 23.min(area.height);
    let x = (area.width.saturating_sub(help_width)) / 2;
    let y = (area.height.saturating_sub(help_height)) / 2;

    let help_area = ratatui::layout::Rect {
        x,
        y,
        width: help_width,
        height: help_height,
    };

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("calgrid Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Month:", Style::default().fg(app.theme.help_section))]),
        Line::from("  { / }    - Previous/next month (also < > PgUp PgDn)"),
        Line::from("  click ◀ ▶ - Previous/next month"),
        Line::from("  t        - Jump to today"),
        Line::from(""),
        Line::from(vec![Span::styled("Selecting a day:", Style::default().fg(app.theme.help_section))]),
        Line::from("  click    - Select the clicked day"),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Next/previous week"),
        Line::from(""),
        Line::from(vec![Span::styled("Add Event form:", Style::default().fg(app.theme.help_section))]),
        Line::from("  a / Tab  - Focus the form"),
        Line::from("  Tab      - Next field (Shift-Tab: previous)"),
        Line::from("  ←/→      - Change color"),
        Line::from("  Enter    - Add the event"),
        Line::from("  Esc      - Leave the form, keeping the draft"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]),
        Line::from("  :q       - Quit"),
        Line::from("  :goto    - Jump to date (:goto 2025-12-25)"),
        Line::from("  :today   - Jump to today"),
        Line::from("  :new     - Add event (:new [title])"),
        Line::from(format!("  :theme   - Change theme ({})", Theme::available_themes().join(", "))),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
