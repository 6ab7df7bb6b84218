use chrono::{Datelike, Months, NaiveDate};

/// Tracks which month is on screen through an anchor date.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthNavigator {
    current_date: NaiveDate,
}

impl MonthNavigator {
    pub fn new(current_date: NaiveDate) -> Self {
        Self { current_date }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn next(&mut self) {
        if let Some(date) = self.current_date.checked_add_months(Months::new(1)) {
            self.current_date = date;
        }
    }

    pub fn previous(&mut self) {
        if let Some(date) = self.current_date.checked_sub_months(Months::new(1)) {
            self.current_date = date;
        }
    }

    pub fn goto(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn first_day(&self) -> NaiveDate {
        self.current_date.with_day(1).unwrap_or(self.current_date)
    }

    pub fn last_day(&self) -> NaiveDate {
        self.first_day()
            .checked_add_months(Months::new(1))
            .and_then(|d| d.pred_opt())
            .unwrap_or(self.current_date)
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        self.first_day()
            .iter_days()
            .take_while(|d| *d <= self.last_day())
            .collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.current_date.year() && date.month() == self.current_date.month()
    }
}
