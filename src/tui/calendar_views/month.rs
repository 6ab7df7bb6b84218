use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::{Datelike, Local};
use calgrid::{
    app::AppState,
    ui::{
        layout::{grid_geometry, split_columns},
        month_view::{self, DayCell, GridCell},
        theme::Theme,
    },
};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let layout = month_view::calculate_layout(app, Local::now().date_naive());
    let geometry = grid_geometry(area, layout.weeks.len());

    f.render_widget(Block::default().borders(Borders::ALL), area);

    for (label, rect) in WEEKDAYS.iter().zip(split_columns(geometry.weekday_header)) {
        let header = Paragraph::new(*label)
            .style(Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        f.render_widget(header, rect);
    }

    for (rects, week) in geometry.rows.iter().zip(layout.weeks.iter()) {
        for (rect, cell) in rects.iter().zip(week.cells.iter()) {
            match cell {
                GridCell::Blank => render_blank(f, &app.theme, *rect),
                GridCell::Day(day) => render_day(f, &app.theme, day, *rect),
            }
        }
    }
}

fn render_blank(f: &mut Frame, theme: &Theme, area: Rect) {
    let blank = Paragraph::new("·").style(Style::default().fg(theme.inactive_day));
    f.render_widget(blank, area);
}

fn render_day(f: &mut Frame, theme: &Theme, day: &DayCell, area: Rect) {
    let width = area.width as usize;
    let height = area.height as usize;

    let mut number_style = Style::default();
    if day.is_selected {
        number_style = number_style.bg(theme.selected_bg).fg(theme.selected_fg).add_modifier(Modifier::BOLD);
    } else if day.is_today {
        number_style = number_style.fg(theme.today).add_modifier(Modifier::BOLD);
    }

    let marker = if day.is_today { "•" } else { " " };
    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{:>2}", day.date.day()), number_style),
        Span::styled(marker, Style::default().fg(theme.today)),
    ])];

    let room = height.saturating_sub(1);
    let overflow = day.events.len() > room;
    let shown = if overflow { room.saturating_sub(1) } else { day.events.len() };

    for chip in day.events.iter().take(shown) {
        lines.push(Line::from(Span::styled(
            truncate_to_width(&chip.label(), width),
            Style::default().fg(theme.event_color(chip.color)),
        )));
    }

    if overflow && room > 0 {
        let more = day.events.len() - shown;
        lines.push(Line::from(Span::styled(
            truncate_to_width(&format!("+{} more", more), width),
            Style::default().fg(theme.inactive_day),
        )));
    }

    let mut cell = Paragraph::new(lines);
    if day.is_selected {
        cell = cell.style(Style::default().bg(theme.selected_bg));
    }
    f.render_widget(cell, area);
}

pub fn truncate_to_width(line: &str, width: usize) -> String {
    if width > 0 && line.chars().count() > width {
        let mut truncated = line.chars().take(width.saturating_sub(1)).collect::<String>();
        truncated.push('…');
        truncated
    } else {
        line.to_string()
    }
}
