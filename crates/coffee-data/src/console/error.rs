//! Error types for the console front end.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::{ExportError, GenerationError};
use crate::export::ExportFormat;

/// Errors surfaced by the one-shot and interactive console flows.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// The generation request was rejected.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// The batch could not be exported.
    #[error(transparent)]
    Export(#[from] ExportError),
    /// Export was requested before any batch was generated.
    #[error("Bitte zuerst Daten generieren!")]
    NoBatch,
    /// A binary format was requested without an output path.
    #[error("{format} output is binary; supply --output <path>")]
    OutputRequired {
        /// Format that cannot go to the terminal.
        format: ExportFormat,
    },
    /// Reading from the terminal failed.
    #[error("prompt failed: {message}")]
    Prompt {
        /// Description of the terminal failure.
        message: String,
    },
    /// Writing an export file failed.
    #[error("failed to write {path}: {message}")]
    Io {
        /// Path being written.
        path: Utf8PathBuf,
        /// Description of the I/O failure.
        message: String,
    },
    /// Writing to the terminal failed.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the I/O failure.
        message: String,
    },
}

impl From<dialoguer::Error> for ConsoleError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(err: std::io::Error) -> Self {
        Self::Output {
            message: err.to_string(),
        }
    }
}
