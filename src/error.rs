//! Error types for readmegen

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the collect → render → write pipeline
#[derive(Debug, Error)]
pub enum ReadmeError {
    /// The operator cancelled the prompt sequence
    #[error("input aborted: {0}")]
    InputAborted(String),

    /// The output file could not be created or overwritten
    #[error("failed to write {}: {source}", .path.display())]
    IoFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An answer file could not be read or parsed
    #[error("invalid answer file {}: {message}", .path.display())]
    AnswerFile { path: PathBuf, message: String },

    #[error("unknown license: {0} (expected one of MIT, Apache, GPL, BSD, None)")]
    UnknownLicense(String),

    /// A custom template failed to compile or render
    #[error("template error: {0}")]
    Template(String),
}

impl ReadmeError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadmeError::InputAborted(_) => 130,
            _ => 1,
        }
    }
}

impl From<dialoguer::Error> for ReadmeError {
    fn from(err: dialoguer::Error) -> Self {
        ReadmeError::InputAborted(err.to_string())
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, ReadmeError>;
