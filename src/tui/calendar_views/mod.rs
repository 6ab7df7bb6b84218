pub mod event_form;
pub mod event_list;
pub mod month;
