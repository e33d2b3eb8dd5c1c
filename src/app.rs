//! Top-level flows: main menu, adding a log, viewing logs.
//!
//! Everything here is written against [`LogStore`] and [`Console`], so the
//! whole interactive session can be driven from tests.

use chrono::Local;

use crate::store::LogStore;
use crate::tui::{Console, FloatPrompt, Menu, Prompt, Table, TableExit, UiError};
use crate::types::{LogRecord, MenuAction, LOG_COLUMNS};

/// The menu shown when no action was given, and after each action.
pub fn main_menu() -> Menu {
    let mut menu = Menu::new("Select an action:");
    menu.add_item("Add a new log", MenuAction::Add.as_str())
        .add_item("View logs", MenuAction::View.as_str())
        .add_item("Exit", MenuAction::Exit.as_str());
    menu
}

/// Run actions until the user picks Exit.
///
/// `first` is performed before the menu is shown, if given.
pub fn run<S: LogStore, C: Console>(
    store: &mut S,
    console: &mut C,
    first: Option<MenuAction>,
) -> Result<(), UiError> {
    let mut next = first;
    loop {
        let action = match next.take() {
            Some(action) => action,
            None => choose_action(console)?,
        };
        log::debug!("dispatching {:?}", action);

        match action {
            MenuAction::Add => add_log(store, console)?,
            MenuAction::View => {
                view_logs(store, console)?;
            }
            MenuAction::Exit => return Ok(()),
        }
    }
}

fn choose_action<C: Console>(console: &mut C) -> Result<MenuAction, UiError> {
    let value = main_menu().select(console)?;
    let Ok(action) = value.parse::<MenuAction>();
    Ok(action)
}

/// Ask for the four fields of a new record and store it.
pub fn add_log<S: LogStore, C: Console>(store: &mut S, console: &mut C) -> Result<(), UiError> {
    console.clear_screen()?;
    let record = LogRecord {
        customer: Prompt::new("Customer:").get(console)?,
        hours: FloatPrompt::new("Hours:").get(console)?,
        date: Prompt::new("Date:").with_default(&today()).get(console)?,
        description: Prompt::new("Description:").get(console)?,
    };
    store.add_log(record)?;
    Ok(())
}

/// Show all stored records in the table viewer.
pub fn view_logs<S: LogStore, C: Console>(
    store: &mut S,
    console: &mut C,
) -> Result<TableExit, UiError> {
    console.clear_screen()?;
    let logs = store.get_logs()?;
    let mut table = log_table(&logs)?;
    table.browse(store, console)
}

/// Table with one row per record, in storage order.
pub fn log_table(logs: &[LogRecord]) -> Result<Table, UiError> {
    let mut table = Table::new();
    for name in LOG_COLUMNS {
        table.add_column(name);
    }
    for log in logs {
        table.add_row(log.to_row())?;
    }
    Ok(table)
}

/// Today's local date as `DD-MM-YYYY`.
pub fn today() -> String {
    Local::now().format("%d-%m-%Y").to_string()
}

// ============================================================================
// TESTS
// ============================================================================
