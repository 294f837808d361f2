//! Error types for catalog loading and the interactive session.
//!
//! Library code returns these typed errors; the binary wraps them with
//! `anyhow` context at the edge.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading the scale catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The scale table does not exist or cannot be opened.
    #[error("Cannot open scale table {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file exists but its tabular structure could not be read.
    #[error("Cannot read scale table {}: {message}", path.display())]
    Unreadable { path: PathBuf, message: String },

    /// A data row failed strict validation.
    ///
    /// `row` is 1-based and counts data rows only (the header is row 0).
    #[error("Malformed scale on row {row}: {reason}")]
    MalformedRow { row: usize, reason: String },
}

/// Errors produced while resolving a scale selection.
#[derive(Debug, Error)]
pub enum SelectionError {
    /// The entered index is outside the catalog.
    #[error("Invalid selection")]
    OutOfRange { index: i64 },

    /// The entered text is not an integer (strict mode only).
    #[error("Invalid selection")]
    Malformed { input: String },

    /// Standard input was closed before a selection was entered.
    #[error("End of input")]
    EndOfInput,

    #[error("I/O error during selection: {0}")]
    Io(#[from] io::Error),
}

/// Errors produced while reading a temperature.
#[derive(Debug, Error)]
pub enum InputError {
    /// The entered text is not a number (strict mode only).
    #[error("Invalid temperature")]
    Malformed { input: String },

    #[error("End of input")]
    EndOfInput,

    #[error("I/O error reading temperature: {0}")]
    Io(#[from] io::Error),
}
