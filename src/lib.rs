pub mod calendar;
pub mod form;
pub mod input;
pub mod ui;
pub mod storage;
pub mod app;

pub use calendar::{Event, EventStore, MonthNavigator, NewEvent, PaletteColor};
pub use app::{AppState, Mode};
pub use form::{EventForm, FormError, FormField};
