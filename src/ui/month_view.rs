use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::app::AppState;
use crate::calendar::{Event, PaletteColor};

pub const DAYS_PER_WEEK: usize = 7;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub cells: Vec<GridCell>,
}

/// Weeks start on Sunday; blanks only ever lead the first week.
#[derive(Debug, Clone, PartialEq)]
pub enum GridCell {
    Blank,
    Day(DayCell),
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub events: Vec<EventChip>,
}

/// The slice of an event a grid cell shows.
#[derive(Debug, Clone, PartialEq)]
pub struct EventChip {
    pub time: NaiveTime,
    pub title: String,
    pub color: PaletteColor,
}

impl From<&Event> for EventChip {
    fn from(event: &Event) -> Self {
        Self {
            time: event.time,
            title: event.title.clone(),
            color: event.color,
        }
    }
}

impl EventChip {
    pub fn label(&self) -> String {
        format!("{} {}", self.time.format("%H:%M"), self.title)
    }
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            events: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_events(mut self, events: Vec<EventChip>) -> Self {
        self.events = events;
        self
    }
}

impl GridCell {
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            GridCell::Blank => None,
            GridCell::Day(day) => Some(day.date),
        }
    }
}

impl MonthLayout {
    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.weeks.iter().flat_map(|week| week.cells.iter())
    }

    pub fn blank_count(&self) -> usize {
        self.cells().filter(|cell| matches!(cell, GridCell::Blank)).count()
    }

    pub fn find(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find_map(|cell| match cell {
            GridCell::Day(day) if day.date == date => Some(day),
            _ => None,
        })
    }
}

pub fn calculate_layout(state: &AppState, today: NaiveDate) -> MonthLayout {
    let navigator = &state.navigator;
    let first_day = navigator.first_day();
    let offset = first_day.weekday().num_days_from_sunday() as usize;

    let mut cells: Vec<GridCell> = vec![GridCell::Blank; offset];
    cells.extend(navigator.days().into_iter().map(|date| {
        let events = state
            .events_for_date(date)
            .into_iter()
            .map(EventChip::from)
            .collect();

        GridCell::Day(
            DayCell::new(date)
                .with_selected(date == state.selected_date)
                .with_today(date == today)
                .with_events(events),
        )
    }));

    let weeks = cells
        .chunks(DAYS_PER_WEEK)
        .map(|chunk| Week { cells: chunk.to_vec() })
        .collect();

    MonthLayout {
        year: first_day.year(),
        month: first_day.month(),
        weeks,
    }
}
