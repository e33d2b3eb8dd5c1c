//! The terminal seam: everything the widgets need from the outside world.
//!
//! Widgets are written against [`Console`], so the same code drives a real
//! terminal or a scripted one in tests.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use super::error::UiError;
use super::keys::{self, Key};
use super::screen;

pub trait Console: Write {
    /// Block until one key is pressed.
    fn read_key(&mut self) -> Result<Key, UiError>;

    /// Block until a full line is entered. The line ending is stripped.
    /// End of input reads as an empty line.
    fn read_line(&mut self) -> Result<String, UiError>;

    fn pause(&mut self, duration: Duration);

    fn clear_screen(&mut self) -> io::Result<()>;
}

/// Console backed by the process's terminal.
#[derive(Debug)]
pub struct TerminalConsole {
    stdout: io::Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Write for TerminalConsole {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()
    }
}

impl Console for TerminalConsole {
    fn read_key(&mut self) -> Result<Key, UiError> {
        self.stdout.flush()?;
        keys::read_key()
    }

    fn read_line(&mut self) -> Result<String, UiError> {
        self.stdout.flush()?;
        let mut line = String::new();
        io::stdin().lock().read_line(&mut line)?;
        Ok(trim_line_ending(line))
    }

    fn pause(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn clear_screen(&mut self) -> io::Result<()> {
        screen::clear_screen(&mut self.stdout)
    }
}

fn trim_line_ending(mut line: String) -> String {
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    line
}

// ============================================================================
// SCRIPTED CONSOLE
// ============================================================================


// ============================================================================
// TESTS
// ============================================================================
