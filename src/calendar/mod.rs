pub mod event;
pub mod navigator;
pub mod store;

pub use event::{Event, NewEvent, PaletteColor, coerce_duration};
pub use navigator::MonthNavigator;
pub use store::EventStore;
