//! Error types for the tracker programs.

use crate::config::ConfigError;
use crate::input::InputError;
use record_list::ListError;
use thiserror::Error;

/// Errors that end a tracker session.
///
/// List outcomes such as a missing name are normally handled in place and
/// shown to the operator; they only surface here when a session cannot go on.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("List error: {0}")]
    List(#[from] ListError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Writing a receipt or summary file failed.
    #[error("File error: {0}")]
    Io(#[from] std::io::Error),
}
