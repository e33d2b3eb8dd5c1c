//! Errors surfaced by the terminal widgets.

use std::io;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum UiError {
    /// Terminal I/O failed, including entering or leaving raw mode.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// The float prompt got something that is not a number.
    #[error("invalid number: {input:?}")]
    InvalidNumber { input: String },

    #[error("menu has no items")]
    EmptyMenu,

    #[error("row has {found} cells but the table has {expected} columns")]
    RowArity { expected: usize, found: usize },

    /// Ctrl+C during a key read.
    #[error("interrupted")]
    Interrupted,
}
