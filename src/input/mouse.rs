use chrono::Local;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::app::{AppState, Mode};
use crate::ui::{
    layout::{cell_at, contains, grid_geometry, screen_layout},
    month_view::calculate_layout,
};

/// Applies a left click at terminal position (`column`, `row`) given the
/// current terminal `area`.
pub fn handle_event(event: MouseEvent, area: Rect, state: &mut AppState) {
    if event.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    handle_click(event.column, event.row, area, state);
}

pub fn handle_click(column: u16, row: u16, area: Rect, state: &mut AppState) {
    let screen = screen_layout(area);

    if contains(screen.prev_button, column, row) {
        state.previous_month();
        return;
    }
    if contains(screen.next_button, column, row) {
        state.next_month();
        return;
    }
    if contains(screen.form, column, row) {
        state.focus_form();
        return;
    }

    if contains(screen.grid, column, row) {
        let layout = calculate_layout(state, Local::now().date_naive());
        let geometry = grid_geometry(screen.grid, layout.weeks.len());
        if let Some(date) = cell_at(&geometry, &layout, column, row) {
            state.form.commit_active_field();
            state.mode = Mode::Normal;
            state.select_date(date);
        }
    }
}
