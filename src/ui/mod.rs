pub mod layout;
pub mod month_view;
pub mod theme;
