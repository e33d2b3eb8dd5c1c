//! Terminal UI core.
//!
//! Line-oriented widgets drawn in place on the normal screen:
//! - `style`: markup to ANSI escape rendering
//! - `keys`: one raw-mode keypress at a time
//! - `console`: the I/O seam widgets are written against
//! - `screen`: clearing, cursor visibility, repaint regions
//! - `prompt`, `menu`, `table`: the widgets themselves

pub mod console;
pub mod error;
pub mod keys;
pub mod menu;
pub mod prompt;
pub mod screen;
pub mod style;
pub mod table;

pub use console::{Console, TerminalConsole};
pub use error::UiError;
pub use keys::Key;
pub use menu::{Menu, MenuItem};
pub use prompt::{FloatPrompt, Prompt};
pub use table::{Table, TableExit};
