//! Vertical menu navigated with the arrow keys.
//!
//! Single-select confirms the item under the cursor with Enter.
//! Multi-select toggles checkboxes with Space and confirms with Enter.
//! The menu is redrawn in place after every key.

use std::collections::BTreeSet;

use super::console::Console;
use super::error::UiError;
use super::keys::Key;
use super::screen::{self, Region};
use super::style;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub text: String,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuMode {
    Single,
    Multi,
}

/// What a key did to the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuStep {
    /// Still choosing.
    Continue,
    /// Enter was pressed.
    Confirmed,
}

#[derive(Debug, Clone)]
pub struct Menu {
    prompt: String,
    items: Vec<MenuItem>,
    cursor: usize,
    selected: BTreeSet<usize>,
}

impl Menu {
    pub fn new(prompt: &str) -> Self {
        Self {
            prompt: prompt.to_string(),
            items: Vec::new(),
            cursor: 0,
            selected: BTreeSet::new(),
        }
    }

    pub fn add_item(&mut self, text: &str, value: &str) -> &mut Self {
        self.items.push(MenuItem {
            text: text.to_string(),
            value: value.to_string(),
        });
        self
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Indices toggled on in multi-select mode.
    pub fn selected(&self) -> &BTreeSet<usize> {
        &self.selected
    }

    // ------------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------------

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        self.cursor = (self.cursor + 1).min(self.items.len().saturating_sub(1));
    }

    /// Flip membership of the cursor row in the selection.
    pub fn toggle(&mut self) {
        if !self.selected.remove(&self.cursor) {
            self.selected.insert(self.cursor);
        }
    }

    /// Apply one key. Keys a mode does not use are ignored.
    pub fn handle_key(&mut self, key: Key, mode: MenuMode) -> Result<MenuStep, UiError> {
        match key {
            Key::Up => self.move_up(),
            Key::Down => self.move_down(),
            Key::Space if mode == MenuMode::Multi => self.toggle(),
            Key::Enter => return Ok(MenuStep::Confirmed),
            Key::Interrupt => return Err(UiError::Interrupted),
            _ => {}
        }
        Ok(MenuStep::Continue)
    }

    // ------------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------------

    /// Markup for the prompt line plus one line per item.
    pub fn render(&self, mode: MenuMode) -> String {
        let mut out = format!("{}\n", style::escape(&self.prompt));
        for (i, item) in self.items.iter().enumerate() {
            let at_cursor = i == self.cursor;
            let text = style::escape(&item.text);
            let line = match mode {
                MenuMode::Single if at_cursor => {
                    format!("[blue]> [reset][bold][cyan]{text}[reset]")
                }
                MenuMode::Single => format!("  [reset][bold][cyan]{text}[reset]"),
                MenuMode::Multi => {
                    let marker = if at_cursor { '>' } else { ' ' };
                    let check = if self.selected.contains(&i) { 'x' } else { ' ' };
                    format!("{marker} /[{check}/] [reset][bold][cyan]{text}[reset]")
                }
            };
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    // ------------------------------------------------------------------------
    // Interaction
    // ------------------------------------------------------------------------

    /// Let the user pick one item and return its value.
    pub fn select<C: Console>(&mut self, console: &mut C) -> Result<String, UiError> {
        self.run(console, MenuMode::Single)?;
        Ok(self.items[self.cursor].value.clone())
    }

    /// Let the user tick any number of items and return their values in
    /// display order.
    pub fn multi_select<C: Console>(&mut self, console: &mut C) -> Result<Vec<String>, UiError> {
        self.selected.clear();
        self.run(console, MenuMode::Multi)?;
        Ok(self
            .selected
            .iter()
            .map(|&i| self.items[i].value.clone())
            .collect())
    }

    fn run<C: Console>(&mut self, console: &mut C, mode: MenuMode) -> Result<(), UiError> {
        if self.items.is_empty() {
            return Err(UiError::EmptyMenu);
        }
        self.cursor = self.cursor.min(self.items.len() - 1);

        let mut region = Region::new();
        screen::hide_cursor(console)?;
        let result = loop {
            region.paint(console, &style::parse(&self.render(mode)))?;
            match console.read_key().and_then(|key| self.handle_key(key, mode)) {
                Ok(MenuStep::Continue) => {}
                Ok(MenuStep::Confirmed) => break Ok(()),
                Err(e) => break Err(e),
            }
        };
        screen::show_cursor(console)?;
        result
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::console::testing::{rendered, ScriptedConsole};

    fn menu() -> Menu {
        let mut menu = Menu::new("Select an action:");
        menu.add_item("Add a new log", "add")
            .add_item("View logs", "view")
            .add_item("Exit", "exit");
        menu
    }

    // -- Transitions --

    #[test]
    fn cursor_clamps_at_top() {
        let mut m = menu();
        m.move_up();
        m.move_up();
        assert_eq!(m.cursor(), 0);
    }

    #[test]
    fn cursor_clamps_at_bottom() {
        let mut m = menu();
        for _ in 0..10 {
            m.move_down();
        }
        assert_eq!(m.cursor(), 2);
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut m = menu();
        m.move_down();
        m.toggle();
        assert!(m.selected().contains(&1));
        m.toggle();
        assert!(m.selected().is_empty());
    }

    #[test]
    fn space_only_toggles_in_multi_mode() {
        let mut m = menu();
        m.handle_key(Key::Space, MenuMode::Single).unwrap();
        assert!(m.selected().is_empty());
        m.handle_key(Key::Space, MenuMode::Multi).unwrap();
        assert!(m.selected().contains(&0));
    }

    #[test]
    fn enter_confirms_and_interrupt_errors() {
        let mut m = menu();
        assert_eq!(m.handle_key(Key::Enter, MenuMode::Single).unwrap(), MenuStep::Confirmed);
        assert_eq!(m.handle_key(Key::Left, MenuMode::Single).unwrap(), MenuStep::Continue);
        assert!(matches!(
            m.handle_key(Key::Interrupt, MenuMode::Single),
            Err(UiError::Interrupted)
        ));
    }

    #[test]
    fn move_down_on_empty_menu_stays_at_zero() {
        let mut m = Menu::new("Nothing here");
        m.move_down();
        assert_eq!(m.cursor(), 0);
    }

    // -- Rendering --

    #[test]
    fn single_render_marks_cursor_row() {
        let mut m = menu();
        m.move_down();
        let lines: Vec<String> = m.render(MenuMode::Single).lines().map(rendered).collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Select an action:");
        assert!(lines[1].starts_with("  "));
        assert!(lines[2].contains("> "));
        assert!(lines[2].contains("View logs"));
    }

    #[test]
    fn multi_render_shows_checkboxes() {
        let mut m = menu();
        m.toggle();
        m.move_down();
        let lines: Vec<String> = m.render(MenuMode::Multi).lines().map(rendered).collect();

        assert!(lines[1].starts_with("  [x] "));
        assert!(lines[2].starts_with("> [ ] "));
    }

    // -- Interaction --

    #[test]
    fn select_returns_value_under_cursor() {
        let mut console =
            ScriptedConsole::new().with_keys([Key::Down, Key::Down, Key::Up, Key::Enter]);
        let value = menu().select(&mut console).unwrap();

        assert_eq!(value, "view");
        assert_eq!(console.keys_left(), 0);
    }

    #[test]
    fn select_redraws_in_place_and_restores_cursor() {
        let mut console = ScriptedConsole::new().with_keys([Key::Down, Key::Enter]);
        menu().select(&mut console).unwrap();

        let out = console.raw_output();
        assert!(out.starts_with("\x1b[?25l"));
        assert!(out.ends_with("\x1b[?25h"));
        // Second paint walks back over prompt + 3 items.
        assert_eq!(out.matches("\x1b[1A\x1b[2K").count(), 4);
    }

    #[test]
    fn multi_select_returns_values_in_display_order() {
        let mut console = ScriptedConsole::new().with_keys([
            Key::Down,
            Key::Down,
            Key::Space,
            Key::Up,
            Key::Up,
            Key::Space,
            Key::Enter,
        ]);
        let values = menu().multi_select(&mut console).unwrap();
        assert_eq!(values, vec!["add", "exit"]);
    }

    #[test]
    fn multi_select_starts_with_empty_selection() {
        let mut m = menu();
        m.toggle();
        let mut console = ScriptedConsole::new().with_keys([Key::Enter]);
        assert!(m.multi_select(&mut console).unwrap().is_empty());
    }

    #[test]
    fn empty_menu_is_an_error() {
        let mut console = ScriptedConsole::new().with_keys([Key::Enter]);
        let result = Menu::new("Nothing").select(&mut console);
        assert!(matches!(result, Err(UiError::EmptyMenu)));
    }

    #[test]
    fn interrupt_still_restores_cursor() {
        let mut console = ScriptedConsole::new().with_keys([Key::Interrupt]);
        let result = menu().select(&mut console);

        assert!(matches!(result, Err(UiError::Interrupted)));
        assert!(console.raw_output().ends_with("\x1b[?25h"));
    }
}
