use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub color: PaletteColor,
}

impl Event {
    pub fn time_label(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// Everything an event needs except its id, which the store assigns.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub title: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration_minutes: u32,
    pub color: PaletteColor,
}

impl NewEvent {
    pub fn new(title: impl Into<String>, date: NaiveDate, time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            date,
            time,
            duration_minutes: 60,
            color: PaletteColor::default(),
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_color(mut self, color: PaletteColor) -> Self {
        self.color = color;
        self
    }
}

/// Turns free-form duration text into minutes.
///
/// Numbers are rounded to the nearest integer; negatives become 0 and values
/// past `u32::MAX` saturate. Empty or non-numeric text becomes 0.
pub fn coerce_duration(input: &str) -> u32 {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value.round().clamp(0.0, u32::MAX as f64) as u32,
        _ => 0,
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PaletteColor {
    #[default]
    Blue,
    Green,
    Red,
    Yellow,
    Purple,
}

impl PaletteColor {
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Red,
        PaletteColor::Yellow,
        PaletteColor::Purple,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            PaletteColor::Blue => "blue",
            PaletteColor::Green => "green",
            PaletteColor::Red => "red",
            PaletteColor::Yellow => "yellow",
            PaletteColor::Purple => "purple",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PaletteColor::Blue => "Blue",
            PaletteColor::Green => "Green",
            PaletteColor::Red => "Red",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Purple => "Purple",
        }
    }

    /// Accepts `blue` as well as the `bg-blue-500` class form, ignoring case.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim().to_lowercase();
        let name = tag
            .strip_prefix("bg-")
            .and_then(|rest| rest.strip_suffix("-500"))
            .unwrap_or(&tag);
        Self::ALL.into_iter().find(|color| color.tag() == name)
    }

    pub fn next(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let idx = self.index();
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn time_label_is_zero_padded() {
        let event = Event {
            id: "e1".to_string(),
            title: "Standup".to_string(),
            date: date(2025, 1, 15),
            time: time(9, 5),
            duration_minutes: 15,
            color: PaletteColor::Blue,
        };

        assert_eq!(event.time_label(), "09:05");
        assert!(event.is_on(date(2025, 1, 15)));
        assert!(!event.is_on(date(2025, 1, 16)));
    }

    #[test]
    fn coerce_duration_accepts_plain_integers() {
        assert_eq!(coerce_duration("90"), 90);
        assert_eq!(coerce_duration(" 45 "), 45);
    }

    #[test]
    fn coerce_duration_rounds_fractions() {
        assert_eq!(coerce_duration("45.4"), 45);
        assert_eq!(coerce_duration("45.6"), 46);
    }

    #[test]
    fn coerce_duration_clamps_negative_to_zero() {
        assert_eq!(coerce_duration("-30"), 0);
    }

    #[test]
    fn coerce_duration_keeps_long_durations() {
        assert_eq!(coerce_duration("20160"), 20160);
        assert_eq!(coerce_duration("999999"), 999999);
    }

    #[test]
    fn coerce_duration_saturates_past_u32() {
        assert_eq!(coerce_duration("1e12"), u32::MAX);
    }

    #[test]
    fn coerce_duration_treats_garbage_as_zero() {
        assert_eq!(coerce_duration(""), 0);
        assert_eq!(coerce_duration("abc"), 0);
        assert_eq!(coerce_duration("NaN"), 0);
        assert_eq!(coerce_duration("inf"), 0);
    }

    #[test]
    fn palette_from_tag_accepts_plain_and_class_forms() {
        assert_eq!(PaletteColor::from_tag("green"), Some(PaletteColor::Green));
        assert_eq!(PaletteColor::from_tag("RED"), Some(PaletteColor::Red));
        assert_eq!(PaletteColor::from_tag("bg-purple-500"), Some(PaletteColor::Purple));
        assert_eq!(PaletteColor::from_tag("orange"), None);
    }

    #[test]
    fn palette_cycles_in_both_directions() {
        assert_eq!(PaletteColor::Blue.next(), PaletteColor::Green);
        assert_eq!(PaletteColor::Purple.next(), PaletteColor::Blue);
        assert_eq!(PaletteColor::Blue.prev(), PaletteColor::Purple);
    }
}
