use chrono::NaiveDate;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders},
};

use super::month_view::{MonthLayout, DAYS_PER_WEEK};

pub const FORM_HEIGHT: u16 = 11;
const NAV_BUTTON_WIDTH: u16 = 5;

/// Screen regions, derived from the terminal size alone so that drawing and
/// mouse hit-testing always agree.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub prev_button: Rect,
    pub next_button: Rect,
    pub grid: Rect,
    pub details: Rect,
    pub form: Rect,
    pub status: Rect,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GridGeometry {
    pub weekday_header: Rect,
    pub rows: Vec<Vec<Rect>>,
}

pub fn screen_layout(area: Rect) -> ScreenLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(area);

    let content_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(65),
            Constraint::Percentage(35),
        ])
        .split(main_chunks[1]);

    let side_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FORM_HEIGHT),
        ])
        .split(content_chunks[1]);

    let header = main_chunks[0];
    let button_y = header.y.saturating_add(1);
    let button_width = NAV_BUTTON_WIDTH.min(header.width.saturating_sub(2));
    let button_height = if header.height >= 2 { 1 } else { 0 };
    let prev_button = Rect {
        x: header.x.saturating_add(1),
        y: button_y,
        width: button_width,
        height: button_height,
    };
    let next_button = Rect {
        x: header.x + header.width.saturating_sub(NAV_BUTTON_WIDTH + 1),
        y: button_y,
        width: button_width,
        height: button_height,
    };

    ScreenLayout {
        header,
        prev_button,
        next_button,
        grid: content_chunks[0],
        details: side_chunks[0],
        form: side_chunks[1],
        status: main_chunks[2],
    }
}

pub fn grid_geometry(grid: Rect, row_count: usize) -> GridGeometry {
    let inner = Block::default().borders(Borders::ALL).inner(grid);
    let row_count = row_count.max(1) as u32;

    let mut constraints = vec![Constraint::Length(1)];
    constraints.extend((0..row_count).map(|_| Constraint::Ratio(1, row_count)));

    let row_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let rows = row_chunks
        .iter()
        .skip(1)
        .map(|row| split_columns(*row))
        .collect();

    GridGeometry {
        weekday_header: row_chunks[0],
        rows,
    }
}

pub fn split_columns(row: Rect) -> Vec<Rect> {
    let constraints: Vec<Constraint> = (0..DAYS_PER_WEEK)
        .map(|_| Constraint::Ratio(1, DAYS_PER_WEEK as u32))
        .collect();

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(row)
        .to_vec()
}

/// The date under the terminal position, if it lands on a day cell.
pub fn cell_at(geometry: &GridGeometry, layout: &MonthLayout, column: u16, row: u16) -> Option<NaiveDate> {
    geometry
        .rows
        .iter()
        .zip(layout.weeks.iter())
        .flat_map(|(rects, week)| rects.iter().zip(week.cells.iter()))
        .find(|(rect, _)| contains(**rect, column, row))
        .and_then(|(_, cell)| cell.date())
}

pub fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
