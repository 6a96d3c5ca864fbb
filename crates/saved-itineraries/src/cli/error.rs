//! Error types for the saved-itineraries CLI.

use thiserror::Error;

use crate::config::SettingsError;
use crate::domain::SavedItineraryError;

/// Errors surfaced while resolving options or running a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// Settings could not be loaded from files or the environment.
    #[error("failed to load settings: {message}")]
    LoadSettings {
        /// Loader error message.
        message: String,
    },
    /// A loaded setting or flag holds an unusable value.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The data directory could not be opened.
    #[error("open data directory '{path}': {message}")]
    OpenDataDir {
        /// Directory that failed to open.
        path: String,
        /// I/O error message.
        message: String,
    },
    /// A draft file could not be read.
    #[error("read draft file '{path}': {message}")]
    ReadDraft {
        /// Draft file path.
        path: String,
        /// I/O error message.
        message: String,
    },
    /// A draft file does not hold a valid draft.
    #[error("parse draft file '{path}': {message}")]
    ParseDraft {
        /// Draft file path.
        path: String,
        /// Parser error message.
        message: String,
    },
    /// The store rejected the command.
    #[error("{source}")]
    Store {
        /// Underlying store error.
        #[from]
        #[source]
        source: SavedItineraryError,
    },
}
