use chrono::{Datelike, Local, Months, NaiveDate, NaiveTime};
use calgrid::{
    app::AppState,
    calendar::{NewEvent, PaletteColor},
};

pub fn add_sample_events(app: &mut AppState) {
    add_sample_events_for(app, Local::now().date_naive());
}

/// Two events today and a deadline on the 15th of next month.
pub fn add_sample_events_for(app: &mut AppState, today: NaiveDate) {
    let deadline = today
        .checked_add_months(Months::new(1))
        .and_then(|d| d.with_day(15));

    let events = vec![
        ("Team Meeting", Some(today), 10, 0, 60, PaletteColor::Blue),
        ("Lunch with Client", Some(today), 12, 30, 90, PaletteColor::Green),
        ("Project Deadline", deadline, 17, 0, 0, PaletteColor::Red),
    ];

    for (title, date, hour, minute, duration, color) in events {
        let Some(date) = date else { continue };
        let Some(time) = NaiveTime::from_hms_opt(hour, minute, 0) else { continue };

        app.store.add(
            NewEvent::new(title, date, time)
                .with_duration(duration)
                .with_color(color),
        );
    }

    tracing::info!("Seeded {} sample events", app.store.len());
}
