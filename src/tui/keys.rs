//! Single keypress acquisition.
//!
//! The terminal is put into raw mode for exactly one read and restored
//! before returning, whether or not the read succeeded. Output never
//! happens while raw mode is on.

use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use super::error::UiError;

/// Normalized key, independent of the terminal's byte encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    /// Any other printable character, used for letter shortcuts.
    Char(char),
    /// Ctrl+C. Raw mode swallows the signal, so it arrives as a key.
    Interrupt,
    Other,
}

/// Map a crossterm key event to a [`Key`].
pub fn map_key(key: KeyEvent) -> Key {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Key::Interrupt;
    }

    match key.code {
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Enter => Key::Enter,
        KeyCode::Esc => Key::Esc,
        KeyCode::Char(' ') => Key::Space,
        KeyCode::Char(c) => Key::Char(c),
        _ => Key::Other,
    }
}

/// Block until one key is pressed and return it.
///
/// No timeout. Release and repeat events are skipped so each physical
/// press yields one key on every platform.
pub fn read_key() -> Result<Key, UiError> {
    with_raw_mode(enable_raw_mode, next_key_press, disable_raw_mode)
}

/// Run `read` between `enable` and `disable`.
///
/// `disable` runs whenever `enable` succeeded, even if `read` failed. A
/// failure to disable wins over the read's result, since the terminal is
/// left unusable either way.
fn with_raw_mode<T>(
    enable: impl FnOnce() -> io::Result<()>,
    read: impl FnOnce() -> Result<T, UiError>,
    disable: impl FnOnce() -> io::Result<()>,
) -> Result<T, UiError> {
    enable()?;
    let result = read();
    disable()?;
    result
}

fn next_key_press() -> Result<Key, UiError> {
    loop {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(map_key(key));
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
