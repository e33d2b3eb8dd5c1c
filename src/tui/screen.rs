//! Screen control: clearing, cursor visibility, in-place repaint.

use std::io::{self, Write};

use crossterm::cursor::{Hide, MoveUp, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

/// Clear the whole screen and home the cursor.
///
/// Unix-like terminals get an escape sequence; Windows runs `cls`. Anything
/// else gets a note that the screen was left alone.
pub fn clear_screen<W: Write>(out: &mut W) -> io::Result<()> {
    if cfg!(unix) {
        writeln!(out, "\x1b[H\x1b[2J")?;
    } else if cfg!(windows) {
        out.flush()?;
        let status = std::process::Command::new("cmd").args(["/c", "cls"]).status()?;
        if !status.success() {
            log::warn!("cls exited with {}", status);
        }
    } else {
        write!(
            out,
            "Operating system {} not supported, the screen cannot be cleared automatically",
            std::env::consts::OS
        )?;
    }
    out.flush()
}

pub fn hide_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Hide)?;
    out.flush()
}

pub fn show_cursor<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Show)?;
    out.flush()
}

// ============================================================================
// REPAINT REGION
// ============================================================================

/// A block of lines that is redrawn in place.
///
/// Remembers how many lines it last painted. Repainting first walks the
/// cursor back up over those lines, clearing each one.
#[derive(Debug, Default)]
pub struct Region {
    height: usize,
}

impl Region {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines currently on screen.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Replace the region's content with `text`, which is already rendered.
    ///
    /// Every line of `text` must end in a newline so the cursor finishes
    /// just below the region.
    pub fn paint<W: Write>(&mut self, out: &mut W, text: &str) -> io::Result<()> {
        self.erase(out)?;
        out.write_all(text.as_bytes())?;
        out.flush()?;
        self.height = text.matches('\n').count();
        Ok(())
    }

    /// Clear the painted lines, leaving the cursor where the region began.
    pub fn erase<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        for _ in 0..self.height {
            queue!(out, MoveUp(1), Clear(ClearType::CurrentLine))?;
        }
        self.height = 0;
        Ok(())
    }

    /// Drop the record of painted lines without touching the terminal.
    ///
    /// Used after the screen was cleared by something else.
    pub fn forget(&mut self) {
        self.height = 0;
    }
}

// ============================================================================
// TESTS
// ============================================================================
