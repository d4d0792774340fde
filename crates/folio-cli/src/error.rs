//! Error types for folio-cli

use thiserror::Error;

/// Result type alias for folio-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in folio-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from the content pipeline
    #[error(transparent)]
    Core(#[from] folio_core::Error),

    /// Output could not be rendered as JSON
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),

    /// Validation finished with problems
    #[error("Content validation failed: {invalid} of {total} files invalid")]
    ValidationFailed {
        /// Files missing or malformed
        invalid: usize,
        /// Files checked
        total: usize,
    },
}
