//! Custom error types for the utf8-tables crate.

use thiserror::Error;

/// The primary error type for all operations in this crate.
///
/// Every variant is fatal for a generator run: there is nothing to retry,
/// the same input fails the same way.
#[derive(Debug, Error)]
pub enum UcdError {
    /// The database could not be opened or read, or the output could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Formatting the generated source failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] std::fmt::Error),

    /// A line did not split into the expected number of `;`-separated fields.
    #[error("line {line}: expected {expected} fields, found {found}: {content:?}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
        content: String,
    },

    /// A line is not valid UTF-8.
    #[error("line {line}: invalid UTF-8: {content:?}")]
    InvalidUtf8 { line: usize, content: String },

    /// A code point field is not a valid base-16 integer.
    #[error("line {line}: invalid {field} {value:?}: {content:?}")]
    InvalidCodePoint {
        line: usize,
        field: &'static str,
        value: String,
        content: String,
    },
}

/// A convenience `Result` type alias using the crate's `UcdError` type.
pub type Result<T> = std::result::Result<T, UcdError>;
