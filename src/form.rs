use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::calendar::{NewEvent, PaletteColor, coerce_duration};
use crate::storage::config::FormDefaults;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a title.")]
    EmptyTitle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Title,
    Date,
    Time,
    Duration,
    Color,
}

/// Draft of the next event to add.
///
/// Date, time and duration are edited through text buffers and only parsed
/// when the user leaves the field or submits.
#[derive(Debug, Clone)]
pub struct EventForm {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub color: PaletteColor,
    pub active_field: FormField,
    pub date_input_buffer: String,
    pub time_input_buffer: String,
    pub duration_input_buffer: String,
    pub date_buffer_touched: bool,
    pub time_buffer_touched: bool,
    pub duration_buffer_touched: bool,
    defaults: FormDefaults,
}

impl EventForm {
    pub fn new(date: NaiveDate, defaults: FormDefaults) -> Self {
        let mut form = Self {
            title: String::new(),
            date,
            time: defaults.time,
            duration_minutes: defaults.duration_minutes,
            color: defaults.color,
            active_field: FormField::Title,
            date_input_buffer: String::new(),
            time_input_buffer: String::new(),
            duration_input_buffer: String::new(),
            date_buffer_touched: false,
            time_buffer_touched: false,
            duration_buffer_touched: false,
            defaults,
        };
        form.sync_buffers();
        form
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Follows the selected day without touching any other field.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
        self.date_input_buffer = format_date(date);
        self.date_buffer_touched = false;
    }

    pub fn next_field(&mut self) {
        self.commit_active_field();
        self.active_field = match self.active_field {
            FormField::Title => FormField::Date,
            FormField::Date => FormField::Time,
            FormField::Time => FormField::Duration,
            FormField::Duration => FormField::Color,
            FormField::Color => FormField::Title,
        };
    }

    pub fn prev_field(&mut self) {
        self.commit_active_field();
        self.active_field = match self.active_field {
            FormField::Title => FormField::Color,
            FormField::Date => FormField::Title,
            FormField::Time => FormField::Date,
            FormField::Duration => FormField::Time,
            FormField::Color => FormField::Duration,
        };
    }

    pub fn commit_active_field(&mut self) {
        match self.active_field {
            FormField::Date => self.parse_date_input(),
            FormField::Time => self.parse_time_input(),
            FormField::Duration => self.parse_duration_input(),
            FormField::Title | FormField::Color => {}
        }
    }

    pub fn commit_all(&mut self) {
        self.parse_date_input();
        self.parse_time_input();
        self.parse_duration_input();
    }

    /// `YYYY-MM-DD`; anything else reverts to the current date.
    pub fn parse_date_input(&mut self) {
        if let Ok(date) = NaiveDate::parse_from_str(self.date_input_buffer.trim(), "%Y-%m-%d") {
            self.date = date;
        }
        self.date_input_buffer = format_date(self.date);
        self.date_buffer_touched = false;
    }

    /// Accepts `H:M`, `HH:MM`, `HHMM`, `HMM` or `HH`, clamping out of range parts.
    pub fn parse_time_input(&mut self) {
        if let Some((hour, minute)) = parse_time_parts(self.time_input_buffer.trim()) {
            if let Some(time) = NaiveTime::from_hms_opt(hour.min(23), minute.min(59), 0) {
                self.time = time;
            }
        }
        self.time_input_buffer = format_time(self.time);
        self.time_buffer_touched = false;
    }

    pub fn parse_duration_input(&mut self) {
        self.duration_minutes = coerce_duration(&self.duration_input_buffer);
        self.duration_input_buffer = self.duration_minutes.to_string();
        self.duration_buffer_touched = false;
    }

    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::EmptyTitle);
        }
        Ok(())
    }

    pub fn to_new_event(&self) -> NewEvent {
        NewEvent::new(self.title.clone(), self.date, self.time)
            .with_duration(self.duration_minutes)
            .with_color(self.color)
    }

    /// Clears everything but the date so the next add lands on the same day.
    pub fn reset_after_submit(&mut self) {
        self.title.clear();
        self.time = self.defaults.time;
        self.duration_minutes = self.defaults.duration_minutes;
        self.color = self.defaults.color;
        self.active_field = FormField::Title;
        self.sync_buffers();
    }

    fn sync_buffers(&mut self) {
        self.date_input_buffer = format_date(self.date);
        self.time_input_buffer = format_time(self.time);
        self.duration_input_buffer = self.duration_minutes.to_string();
        self.date_buffer_touched = false;
        self.time_buffer_touched = false;
        self.duration_buffer_touched = false;
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// With a colon the parts are read separately; without one the digit count
/// decides where the hour ends.
fn parse_time_parts(input: &str) -> Option<(u32, u32)> {
    if let Some((hour, minute)) = input.split_once(':') {
        let hour = hour.parse::<u32>().ok()?;
        let minute = if minute.is_empty() { 0 } else { minute.parse::<u32>().ok()? };
        return Some((hour, minute));
    }

    let num = input.parse::<u32>().ok()?;
    match input.len() {
        3 | 4 => Some((num / 100, num % 100)),
        1 | 2 => Some((num, 0)),
        _ => None,
    }
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn form() -> EventForm {
        EventForm::new(date(2025, 1, 15), FormDefaults::default())
    }

    #[test]
    fn new_form_uses_defaults() {
        let form = form();

        assert_eq!(form.title, "");
        assert_eq!(form.time_input_buffer, "09:00");
        assert_eq!(form.duration_minutes, 60);
        assert_eq!(form.duration_input_buffer, "60");
        assert_eq!(form.color, PaletteColor::Blue);
        assert_eq!(form.date_input_buffer, "2025-01-15");
        assert_eq!(form.active_field, FormField::Title);
    }

    #[test]
    fn fields_cycle_forward_and_back() {
        let mut form = form();

        form.next_field();
        assert_eq!(form.active_field, FormField::Date);
        form.next_field();
        form.next_field();
        form.next_field();
        assert_eq!(form.active_field, FormField::Color);
        form.next_field();
        assert_eq!(form.active_field, FormField::Title);
        form.prev_field();
        assert_eq!(form.active_field, FormField::Color);
    }

    #[test]
    fn set_date_leaves_other_fields_alone() {
        let mut form = form().with_title("Half typed");
        form.color = PaletteColor::Purple;
        form.duration_input_buffer = "15".to_string();

        form.set_date(date(2025, 2, 3));

        assert_eq!(form.date, date(2025, 2, 3));
        assert_eq!(form.date_input_buffer, "2025-02-03");
        assert_eq!(form.title, "Half typed");
        assert_eq!(form.color, PaletteColor::Purple);
        assert_eq!(form.duration_input_buffer, "15");
    }

    #[test]
    fn parse_time_accepts_colon_and_compact_forms() {
        let mut form = form();

        form.time_input_buffer = "14:30".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "14:30");

        form.time_input_buffer = "745".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "07:45");

        form.time_input_buffer = "18".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "18:00");
    }

    #[test]
    fn parse_time_reads_single_digit_parts_around_colon() {
        let mut form = form();

        form.time_input_buffer = "9:5".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "09:05");

        form.time_input_buffer = "12:3".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "12:03");

        form.time_input_buffer = "9:05".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "09:05");

        form.time_input_buffer = "7:".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "07:00");
    }

    #[test]
    fn parse_time_with_missing_hour_reverts() {
        let mut form = form();
        form.time_input_buffer = ":30".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "09:00");
    }

    #[test]
    fn parse_time_clamps_out_of_range_values() {
        let mut form = form();
        form.time_input_buffer = "2599".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "23:59");
    }

    #[test]
    fn parse_time_reverts_on_garbage() {
        let mut form = form();
        form.time_input_buffer = "".to_string();
        form.parse_time_input();
        assert_eq!(form.time_input_buffer, "09:00");
    }

    #[test]
    fn parse_date_reverts_on_garbage() {
        let mut form = form();
        form.date_input_buffer = "2025-13-40".to_string();
        form.parse_date_input();
        assert_eq!(form.date, date(2025, 1, 15));
        assert_eq!(form.date_input_buffer, "2025-01-15");
    }

    #[test]
    fn parse_date_accepts_iso_dates() {
        let mut form = form();
        form.date_input_buffer = "2026-07-04".to_string();
        form.parse_date_input();
        assert_eq!(form.date, date(2026, 7, 4));
    }

    #[test]
    fn parse_duration_coerces_empty_to_zero() {
        let mut form = form();
        form.duration_input_buffer.clear();
        form.parse_duration_input();
        assert_eq!(form.duration_minutes, 0);
        assert_eq!(form.duration_input_buffer, "0");
    }

    #[test]
    fn validate_rejects_blank_titles() {
        assert_eq!(form().validate(), Err(FormError::EmptyTitle));
        assert_eq!(form().with_title("   \t").validate(), Err(FormError::EmptyTitle));
        assert_eq!(form().with_title("Lunch").validate(), Ok(()));
    }

    #[test]
    fn reset_after_submit_keeps_date() {
        let mut form = form().with_title("Lunch");
        form.set_date(date(2025, 3, 9));
        form.time_input_buffer = "12:30".to_string();
        form.duration_input_buffer = "90".to_string();
        form.color = PaletteColor::Green;
        form.commit_all();

        form.reset_after_submit();

        assert_eq!(form.title, "");
        assert_eq!(form.date, date(2025, 3, 9));
        assert_eq!(form.time_input_buffer, "09:00");
        assert_eq!(form.duration_minutes, 60);
        assert_eq!(form.color, PaletteColor::Blue);
    }

    #[test]
    fn reset_uses_configured_defaults() {
        let defaults = FormDefaults {
            time: NaiveTime::from_hms_opt(8, 15, 0).unwrap(),
            duration_minutes: 25,
            color: PaletteColor::Yellow,
        };
        let mut form = EventForm::new(date(2025, 1, 15), defaults).with_title("Focus");

        form.reset_after_submit();

        assert_eq!(form.time_input_buffer, "08:15");
        assert_eq!(form.duration_minutes, 25);
        assert_eq!(form.color, PaletteColor::Yellow);
    }
}
