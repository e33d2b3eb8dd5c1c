//! loggit: record work hours per customer and browse them in the terminal.

pub mod app;
pub mod store;
pub mod tui;
pub mod types;
