//! Error types for console input.

use thiserror::Error;

/// Errors that can occur while reading operator input.
#[derive(Debug, Error)]
pub enum InputError {
    /// The input stream ended before a valid answer was read.
    #[error("Input closed before a valid answer was entered")]
    Closed,

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
