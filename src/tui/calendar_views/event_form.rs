use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use calgrid::{
    app::{AppState, Mode},
    form::FormField,
};

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let form = &app.form;
    let focused = app.mode == Mode::Insert;

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let label_style = |field: FormField| {
        if focused && form.active_field == field {
            Style::default().fg(active_color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(inactive_color)
        }
    };
    let hint = |field: FormField, touched: bool| {
        if focused && form.active_field == field && !touched {
            " [type to replace]"
        } else {
            ""
        }
    };

    let form_text = vec![
        Line::from(vec![
            Span::styled("Title: ", label_style(FormField::Title)),
            Span::raw(&form.title),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", label_style(FormField::Date)),
            Span::raw(&form.date_input_buffer),
            Span::styled(hint(FormField::Date, form.date_buffer_touched), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Time: ", label_style(FormField::Time)),
            Span::raw(&form.time_input_buffer),
            Span::styled(hint(FormField::Time, form.time_buffer_touched), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Duration (minutes): ", label_style(FormField::Duration)),
            Span::raw(&form.duration_input_buffer),
            Span::styled(hint(FormField::Duration, form.duration_buffer_touched), Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled("Color: ", label_style(FormField::Color)),
            Span::styled("● ", Style::default().fg(app.theme.event_color(form.color))),
            Span::raw(form.color.label()),
            Span::styled(
                if focused && form.active_field == FormField::Color { "  ←/→ to change" } else { "" },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        if focused {
            Line::from(vec![
                Span::styled("Tab", Style::default().fg(Color::Cyan)),
                Span::raw(" = Next field | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" = Add Event | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" = Back"),
            ])
        } else {
            Line::from(vec![
                Span::styled("a", Style::default().fg(Color::Green)),
                Span::raw(" or click here to add an event"),
            ])
        },
    ];

    let border_style = if focused {
        Style::default().fg(active_color)
    } else {
        Style::default()
    };

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" Add Event "));

    f.render_widget(form_paragraph, area);
}
