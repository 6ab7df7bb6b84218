pub mod help;
pub mod notice;
