use chrono::NaiveDate;
use uuid::Uuid;

use super::event::{Event, NewEvent};

/// Append-only, insertion-ordered event collection owned by one widget.
#[derive(Debug, Default)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, new_event: NewEvent) -> &Event {
        let mut id = Uuid::new_v4().to_string();
        while self.get(&id).is_some() {
            id = Uuid::new_v4().to_string();
        }

        tracing::debug!("Storing event {} on {}", id, new_event.date);

        self.events.push(Event {
            id,
            title: new_event.title,
            date: new_event.date,
            time: new_event.time,
            duration_minutes: new_event.duration_minutes,
            color: new_event.color,
        });
        &self.events[self.events.len() - 1]
    }

    pub fn query_by_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.events.iter().filter(|event| event.is_on(date)).collect()
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.events.iter()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
