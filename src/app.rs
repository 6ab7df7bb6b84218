use chrono::{Days, Local, NaiveDate};

use crate::calendar::{Event, EventStore, MonthNavigator};
use crate::form::{EventForm, FormError};
use crate::storage::config::FormDefaults;
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Command,
}

/// The whole widget: navigator, store, selection and draft live here and
/// every input handler mutates this one value.
pub struct AppState {
    pub mode: Mode,
    pub navigator: MonthNavigator,
    pub selected_date: NaiveDate,
    pub store: EventStore,
    pub form: EventForm,
    pub command_buffer: String,
    pub notice: Option<String>,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
}

impl AppState {
    pub fn new() -> Self {
        Self::starting_on(Local::now().date_naive(), FormDefaults::default())
    }

    pub fn starting_on(today: NaiveDate, defaults: FormDefaults) -> Self {
        Self {
            mode: Mode::Normal,
            navigator: MonthNavigator::new(today),
            selected_date: today,
            store: EventStore::new(),
            form: EventForm::new(today, defaults),
            command_buffer: String::new(),
            notice: None,
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
        }
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn current_date(&self) -> NaiveDate {
        self.navigator.current_date()
    }

    pub fn next_month(&mut self) {
        self.navigator.next();
        tracing::debug!("Showing month of {}", self.navigator.current_date());
    }

    pub fn previous_month(&mut self) {
        self.navigator.previous();
        tracing::debug!("Showing month of {}", self.navigator.current_date());
    }

    /// Shows the month containing `date` and selects it.
    pub fn goto(&mut self, date: NaiveDate) {
        self.navigator.goto(date);
        self.select_date(date);
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
        self.form.set_date(date);
    }

    /// Moves the selection by `days`, staying inside the displayed month.
    /// A selection outside the displayed month snaps to its first day.
    pub fn move_selection(&mut self, days: i64) {
        let first = self.navigator.first_day();
        let last = self.navigator.last_day();

        if !self.navigator.contains(self.selected_date) {
            self.select_date(first);
            return;
        }

        let moved = if days >= 0 {
            self.selected_date.checked_add_days(Days::new(days as u64))
        } else {
            self.selected_date.checked_sub_days(Days::new(days.unsigned_abs()))
        };

        let target = moved.unwrap_or(self.selected_date).clamp(first, last);
        self.select_date(target);
    }

    pub fn events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.query_by_date(date)
    }

    pub fn selected_events(&self) -> Vec<&Event> {
        self.events_for_date(self.selected_date)
    }

    pub fn focus_form(&mut self) {
        self.mode = Mode::Insert;
    }

    /// Validates the draft and appends it to the store, returning the new id.
    /// A blank title raises a notice and leaves the draft as typed.
    pub fn submit_form(&mut self) -> Result<String, FormError> {
        self.form.commit_all();

        if let Err(err) = self.form.validate() {
            tracing::warn!("Rejected event submission: {}", err);
            self.notice = Some(err.to_string());
            return Err(err);
        }

        let event = self.store.add(self.form.to_new_event());
        tracing::info!("Added event '{}' on {} at {}", event.title, event.date, event.time_label());
        let id = event.id.clone();

        self.form.reset_after_submit();
        Ok(id)
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{NewEvent, PaletteColor};
    use chrono::NaiveTime;
    use pretty_assertions::assert_eq;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn app_on(today: NaiveDate) -> AppState {
        AppState::starting_on(today, FormDefaults::default())
    }

    fn titles(events: Vec<&Event>) -> Vec<String> {
        events.into_iter().map(|e| e.title.clone()).collect()
    }

    #[test]
    fn new_app_starts_in_normal_mode() {
        let app = AppState::new();
        assert_eq!(app.mode, Mode::Normal);
    }

    #[test]
    fn new_app_selects_and_shows_today() {
        let app = AppState::new();
        let today = Local::now().date_naive();
        assert_eq!(app.selected_date, today);
        assert_eq!(app.current_date(), today);
        assert_eq!(app.form.date, today);
    }

    #[test]
    fn new_app_has_no_events() {
        let app = AppState::new();
        assert!(app.store.is_empty());
    }

    #[test]
    fn paging_months_keeps_selection() {
        let mut app = app_on(date(2025, 1, 15));

        app.next_month();

        assert_eq!(app.current_date(), date(2025, 2, 15));
        assert_eq!(app.selected_date, date(2025, 1, 15));

        app.previous_month();
        app.previous_month();
        assert_eq!(app.current_date(), date(2024, 12, 15));
    }

    #[test]
    fn select_date_resyncs_form_date_only() {
        let mut app = app_on(date(2025, 1, 15));
        app.form.title = "Draft".to_string();
        app.form.color = PaletteColor::Red;

        app.select_date(date(2025, 1, 20));

        assert_eq!(app.selected_date, date(2025, 1, 20));
        assert_eq!(app.form.date, date(2025, 1, 20));
        assert_eq!(app.form.title, "Draft");
        assert_eq!(app.form.color, PaletteColor::Red);
    }

    #[test]
    fn goto_shows_and_selects_date() {
        let mut app = app_on(date(2025, 1, 15));

        app.goto(date(2026, 7, 4));

        assert_eq!(app.current_date(), date(2026, 7, 4));
        assert_eq!(app.selected_date, date(2026, 7, 4));
    }

    #[test]
    fn move_selection_clamps_to_displayed_month() {
        let mut app = app_on(date(2025, 1, 30));

        app.move_selection(7);
        assert_eq!(app.selected_date, date(2025, 1, 31));

        app.select_date(date(2025, 1, 3));
        app.move_selection(-7);
        assert_eq!(app.selected_date, date(2025, 1, 1));

        app.move_selection(1);
        assert_eq!(app.selected_date, date(2025, 1, 2));
    }

    #[test]
    fn move_selection_snaps_into_newly_shown_month() {
        let mut app = app_on(date(2025, 1, 15));
        app.next_month();

        app.move_selection(1);

        assert_eq!(app.selected_date, date(2025, 2, 1));
    }

    #[test]
    fn seeded_events_list_in_insertion_order_for_selected_day() {
        let today = date(2025, 6, 10);
        let mut app = app_on(today);
        app.store.add(NewEvent::new("Team Meeting", today, time(10, 0)));
        app.store.add(NewEvent::new("Lunch with Client", today, time(12, 30)).with_duration(90));

        assert_eq!(titles(app.selected_events()), vec!["Team Meeting", "Lunch with Client"]);

        app.select_date(date(2025, 6, 11));
        assert!(app.selected_events().is_empty());
    }

    #[test]
    fn submit_with_blank_title_is_rejected_and_keeps_draft() {
        let mut app = app_on(date(2025, 1, 15));
        app.form.title = "   ".to_string();
        app.form.duration_input_buffer = "30".to_string();
        app.form.color = PaletteColor::Yellow;

        let result = app.submit_form();

        assert_eq!(result, Err(FormError::EmptyTitle));
        assert_eq!(app.store.len(), 0);
        assert_eq!(app.notice.as_deref(), Some("Please enter a title."));
        assert_eq!(app.form.title, "   ");
        assert_eq!(app.form.duration_minutes, 30);
        assert_eq!(app.form.color, PaletteColor::Yellow);
    }

    #[test]
    fn submit_valid_form_adds_exactly_one_event() {
        let mut app = app_on(date(2025, 1, 15));
        app.select_date(date(2025, 1, 18));
        app.form.title = "Dentist".to_string();
        app.form.time_input_buffer = "1430".to_string();
        app.form.duration_input_buffer = "45".to_string();
        app.form.color = PaletteColor::Purple;

        let id = app.submit_form().unwrap();

        assert_eq!(app.store.len(), 1);
        let event = app.store.get(&id).unwrap();
        assert_eq!(event.title, "Dentist");
        assert_eq!(event.date, date(2025, 1, 18));
        assert_eq!(event.time, time(14, 30));
        assert_eq!(event.duration_minutes, 45);
        assert_eq!(event.color, PaletteColor::Purple);
    }

    #[test]
    fn submit_stores_short_colon_time_and_multi_week_duration() {
        let mut app = app_on(date(2025, 1, 15));
        app.form.title = "Sabbatical".to_string();
        app.form.time_input_buffer = "9:5".to_string();
        app.form.duration_input_buffer = "20160".to_string();

        let id = app.submit_form().unwrap();

        let event = app.store.get(&id).unwrap();
        assert_eq!(event.time, time(9, 5));
        assert_eq!(event.duration_minutes, 20160);
    }

    #[test]
    fn submit_resets_form_but_keeps_date() {
        let mut app = app_on(date(2025, 1, 15));
        app.select_date(date(2025, 1, 18));
        app.form.title = "Dentist".to_string();
        app.form.color = PaletteColor::Green;

        app.submit_form().unwrap();

        assert_eq!(app.form.title, "");
        assert_eq!(app.form.date, date(2025, 1, 18));
        assert_eq!(app.form.time_input_buffer, "09:00");
        assert_eq!(app.form.duration_minutes, 60);
        assert_eq!(app.form.color, PaletteColor::Blue);
        assert!(app.notice.is_none());
    }

    #[test]
    fn consecutive_submits_land_on_same_day_in_order() {
        let mut app = app_on(date(2025, 1, 15));

        app.form.title = "First".to_string();
        app.submit_form().unwrap();
        app.form.title = "Second".to_string();
        app.submit_form().unwrap();

        assert_eq!(titles(app.events_for_date(date(2025, 1, 15))), vec!["First", "Second"]);
    }

    #[test]
    fn dismiss_notice_clears_it() {
        let mut app = app_on(date(2025, 1, 15));
        let _ = app.submit_form();
        assert!(app.notice.is_some());

        app.dismiss_notice();

        assert!(app.notice.is_none());
    }
}
