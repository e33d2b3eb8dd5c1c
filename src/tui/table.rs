//! Log viewer table with row highlighting and in-place edit/delete.
//!
//! Columns are right-aligned and sized to their widest cell. The
//! highlighted row moves with the arrow keys; `d` deletes it and `e` edits
//! it, both through the [`LogStore`] so the table and the database stay in
//! step. Enter or `b` leaves the viewer.

use std::time::Duration;

use crate::store::{LogStore, StoreError};
use crate::types::LogRecord;

use super::console::Console;
use super::error::UiError;
use super::keys::Key;
use super::prompt::{FloatPrompt, Prompt};
use super::screen::{self, Region};
use super::style;

/// Spaces added to every column beyond its widest cell.
pub const PADDING: usize = 2;

const FOOTER_HINT: &str = "D to delete, E to edit, Enter to exit, B to go back";

/// How long transient notices stay on screen.
const NOTICE_DELAY: Duration = Duration::from_secs(1);

const HEADER_STYLE: &str = "[bgBlack,bold,blue]";
const ROW_STYLE: &str = "[bgBlack,white]";
const HIGHLIGHT_STYLE: &str = "[bgWhite,black]";
const FOOTER_STYLE: &str = "[bgBlack,green]";

/// How the user left the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableExit {
    /// Enter.
    Exit,
    /// `b`.
    Back,
}

/// What a key asks the table to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableStep {
    Continue,
    Delete,
    Edit,
    Leave(TableExit),
}

#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    highlighted: usize,
}

impl Table {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_column(&mut self, name: &str) -> &mut Self {
        self.columns.push(name.to_string());
        self
    }

    /// Append a row. It must have one cell per column.
    pub fn add_row(&mut self, cells: Vec<String>) -> Result<&mut Self, UiError> {
        self.check_arity(&cells)?;
        self.rows.push(cells);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn highlighted(&self) -> usize {
        self.highlighted
    }

    fn check_arity(&self, cells: &[String]) -> Result<(), UiError> {
        if cells.len() != self.columns.len() {
            return Err(UiError::RowArity {
                expected: self.columns.len(),
                found: cells.len(),
            });
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn move_up(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.highlighted = (self.highlighted + 1).min(self.rows.len().saturating_sub(1));
    }

    /// Map a key to a step. Movement is applied immediately.
    pub fn handle_key(&mut self, key: Key) -> Result<TableStep, UiError> {
        let step = match key {
            Key::Up => {
                self.move_up();
                TableStep::Continue
            }
            Key::Down => {
                self.move_down();
                TableStep::Continue
            }
            Key::Enter => TableStep::Leave(TableExit::Exit),
            Key::Char(c) => match c.to_ascii_lowercase() {
                'b' => TableStep::Leave(TableExit::Back),
                'd' => TableStep::Delete,
                'e' => TableStep::Edit,
                _ => TableStep::Continue,
            },
            Key::Interrupt => return Err(UiError::Interrupted),
            _ => TableStep::Continue,
        };
        Ok(step)
    }

    fn remove_row(&mut self, index: usize) {
        if index < self.rows.len() {
            self.rows.remove(index);
        }
        self.highlighted = self.highlighted.min(self.rows.len().saturating_sub(1));
    }

    fn replace_row(&mut self, index: usize, cells: Vec<String>) -> Result<(), UiError> {
        self.check_arity(&cells)?;
        if let Some(row) = self.rows.get_mut(index) {
            *row = cells;
        }
        Ok(())
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Width of each column: widest cell or header, plus [`PADDING`].
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let widest_cell = self
                    .rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0);
                widest_cell.max(name.chars().count()) + PADDING
            })
            .collect()
    }

    /// Markup for header, rows and footer. Always `rows + 2` lines.
    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        for (name, &width) in self.columns.iter().zip(&widths) {
            push_cell(&mut out, HEADER_STYLE, name, width);
        }
        out.push('\n');

        for (i, row) in self.rows.iter().enumerate() {
            let row_style = if i == self.highlighted {
                HIGHLIGHT_STYLE
            } else {
                ROW_STYLE
            };
            for (cell, &width) in row.iter().zip(&widths) {
                push_cell(&mut out, row_style, cell, width);
            }
            out.push('\n');
        }

        let total: usize = widths.iter().sum();
        let hint_len = FOOTER_HINT.chars().count();
        let margin = " ".repeat((total / 2).saturating_sub(hint_len / 2));
        out.push_str(&format!("{FOOTER_STYLE}{margin}{FOOTER_HINT}{margin}[reset]\n"));
        out
    }

    // ------------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------------

    /// Show the table and handle keys until the user leaves.
    pub fn browse<S: LogStore, C: Console>(
        &mut self,
        store: &mut S,
        console: &mut C,
    ) -> Result<TableExit, UiError> {
        screen::hide_cursor(console)?;
        let result = self.browse_loop(store, console);
        screen::show_cursor(console)?;
        result
    }

    fn browse_loop<S: LogStore, C: Console>(
        &mut self,
        store: &mut S,
        console: &mut C,
    ) -> Result<TableExit, UiError> {
        let mut region = Region::new();
        loop {
            region.paint(console, &style::parse(&self.render()))?;
            let key = console.read_key()?;
            match self.handle_key(key)? {
                TableStep::Continue => {}
                TableStep::Leave(exit) => return Ok(exit),
                TableStep::Delete => {
                    self.delete_highlighted(store, console)?;
                    region.forget();
                }
                TableStep::Edit => {
                    self.edit_highlighted(store, console)?;
                    region.forget();
                }
            }
        }
    }

    fn delete_highlighted<S: LogStore, C: Console>(
        &mut self,
        store: &mut S,
        console: &mut C,
    ) -> Result<(), UiError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let index = self.highlighted;

        console.clear_screen()?;
        style::println(
            console,
            "[red,bold]Are you sure you want to delete this log? [blue]/[y/n/][reset]",
        )?;
        if !confirm(console)? {
            console.clear_screen()?;
            return Ok(());
        }

        match store.remove_log(index) {
            Ok(()) => {
                self.remove_row(index);
                console.clear_screen()?;
                style::println(console, "[green,bold]Log deleted![reset]")?;
                console.pause(NOTICE_DELAY);
                console.clear_screen()?;
                Ok(())
            }
            Err(StoreError::IndexOutOfRange { .. }) => notice_missing(console, index),
            Err(e) => Err(e.into()),
        }
    }

    fn edit_highlighted<S: LogStore, C: Console>(
        &mut self,
        store: &mut S,
        console: &mut C,
    ) -> Result<(), UiError> {
        if self.rows.is_empty() {
            return Ok(());
        }
        let index = self.highlighted;

        console.clear_screen()?;
        let logs = store.get_logs()?;
        let Some(current) = logs.get(index) else {
            return notice_missing(console, index);
        };

        // The browser hides the cursor; typing needs it back.
        screen::show_cursor(console)?;
        let record = prompt_edits(console, current);
        screen::hide_cursor(console)?;
        let record = record?;
        let cells = record.to_row();

        match store.update_log(index, record) {
            Ok(()) => {
                self.replace_row(index, cells)?;
                console.clear_screen()?;
                Ok(())
            }
            Err(StoreError::IndexOutOfRange { .. }) => notice_missing(console, index),
            Err(e) => Err(e.into()),
        }
    }
}

/// Ask for each field again, offering the stored value as the default.
fn prompt_edits<C: Console>(console: &mut C, current: &LogRecord) -> Result<LogRecord, UiError> {
    Ok(LogRecord {
        customer: Prompt::new("Customer:")
            .with_default(&current.customer)
            .get(console)?,
        hours: FloatPrompt::new("Hours:")
            .with_default(&current.hours.to_string())
            .get(console)?,
        date: Prompt::new("Date:").with_default(&current.date).get(console)?,
        description: Prompt::new("Description:")
            .with_default(&current.description)
            .get(console)?,
    })
}

fn push_cell(out: &mut String, cell_style: &str, text: &str, width: usize) {
    let pad = width.saturating_sub(text.chars().count());
    out.push_str(cell_style);
    out.push_str(&" ".repeat(pad));
    out.push_str(&style::escape(text));
    out.push_str(&" ".repeat(PADDING));
    out.push_str("[reset]");
}

/// Wait for `y` or `n`; every other key is ignored.
fn confirm<C: Console>(console: &mut C) -> Result<bool, UiError> {
    loop {
        match console.read_key()? {
            Key::Char('y') => return Ok(true),
            Key::Char('n') => return Ok(false),
            Key::Interrupt => return Err(UiError::Interrupted),
            _ => {}
        }
    }
}

/// The highlighted row has no record behind it any more.
fn notice_missing<C: Console>(console: &mut C, index: usize) -> Result<(), UiError> {
    log::warn!("no stored log for table row {}", index);
    console.clear_screen()?;
    style::println(console, &format!("[red,bold]No log found for row {}.[reset]", index + 1))?;
    console.pause(NOTICE_DELAY);
    console.clear_screen()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
