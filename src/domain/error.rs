use std::io;

use thiserror::Error;

/// Library-wide error type for lemmy-setup operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// An example template the workflow copies from is missing.
    #[error("Example template not found: {0}")]
    ExampleMissing(String),

    /// A substitution entry matched no line of the target file.
    #[error("Placeholder not found in {path}: {placeholder}")]
    PlaceholderNotFound { path: String, placeholder: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
