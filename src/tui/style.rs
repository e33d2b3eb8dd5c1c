//! Inline markup to ANSI escape rendering.
//!
//! Markup looks like `hello [red,bold]world[reset]`. A bracketed directive
//! names one or more styles separated by commas; each resolves to an escape
//! code. `/[` and `/]` render as literal brackets.
//!
//! Lookup misses are silent: an unknown style name renders as nothing.

use std::io::{self, Write};

/// Marker that turns a following bracket into a literal one.
const ESCAPE: char = '/';

// ============================================================================
// STYLE MAP
// ============================================================================

/// Escape code for a style name, if the name is known.
pub fn style_code(name: &str) -> Option<&'static str> {
    let code = match name {
        "red" => "\x1b[31;1m",
        "blue" => "\x1b[34;1m",
        "green" => "\x1b[32;1m",
        "yellow" => "\x1b[33;1m",
        "black" => "\x1b[30m",
        "white" => "\x1b[37m",
        "cyan" => "\x1b[36m",
        "magenta" => "\x1b[35m",
        "gray" => "\x1b[30;1m",
        "lightGray" => "\x1b[37;1m",
        "bgWhite" => "\x1b[47m",
        "bgBlack" => "\x1b[40m",
        "bgBlue" => "\x1b[44m",
        "bold" => "\x1b[1m",
        "reset" => "\x1b[0m",
        "underline" => "\x1b[4m",
        "blink" => "\x1b[5m",
        "reverse" => "\x1b[7m",
        _ => return None,
    };
    Some(code)
}

// ============================================================================
// PARSER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Literal,
    Directive,
}

/// Render markup into text with raw escape codes.
///
/// Single left-to-right pass over two states. An unterminated directive is
/// dropped. A `[` inside a directive restarts it, so the last one wins.
/// A stray `]` outside a directive is dropped.
pub fn parse(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut directive = String::new();
    let mut state = State::Literal;
    let mut chars = markup.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ESCAPE {
            if let Some(&next) = chars.peek().filter(|&&n| n == '[' || n == ']') {
                chars.next();
                match state {
                    State::Literal => out.push(next),
                    State::Directive => directive.push(next),
                }
                continue;
            }
        }

        match (state, c) {
            (_, '[') => {
                directive.clear();
                state = State::Directive;
            }
            (State::Directive, ']') => {
                for name in directive.split(',') {
                    out.push_str(style_code(name.trim()).unwrap_or_default());
                }
                directive.clear();
                state = State::Literal;
            }
            (State::Literal, ']') => {}
            (State::Literal, c) => out.push(c),
            (State::Directive, c) => directive.push(c),
        }
    }

    out
}

/// Escape brackets so arbitrary text renders literally inside markup.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c == '[' || c == ']' {
            out.push(ESCAPE);
        }
        out.push(c);
    }
    out
}

// ============================================================================
// OUTPUT
// ============================================================================

/// Render markup and write it.
pub fn print<W: Write>(out: &mut W, markup: &str) -> io::Result<()> {
    out.write_all(parse(markup).as_bytes())?;
    out.flush()
}

/// Render markup and write it followed by a newline.
pub fn println<W: Write>(out: &mut W, markup: &str) -> io::Result<()> {
    out.write_all(parse(markup).as_bytes())?;
    out.write_all(b"\n")?;
    out.flush()
}

// ============================================================================
// TESTS
// ============================================================================
