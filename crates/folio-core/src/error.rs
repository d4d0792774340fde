//! Error types for the folio content pipeline.
//!
//! A single error enum is shared by every folio crate. Loaders never swallow
//! a failure into a default value: they enrich it with [`Error::load`] and
//! propagate it to the caller.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::Language;

/// Result type alias for folio operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading portfolio content
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A backing resource could not be read.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path (or locator) that failed
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A resource was read but its content is malformed.
    #[error("Failed to decode {what}: {message}")]
    Decode {
        /// What was being decoded (a locator or record kind)
        what: String,
        /// Description of the underlying cause
        message: String,
    },

    /// Slug lookup exhausted the project document set.
    #[error("Project not found: {slug}")]
    ProjectNotFound {
        /// The slug that was requested
        slug: String,
        /// The language variant that was requested
        language: Language,
    },

    /// A required top-level value resolved to nothing.
    #[error("Incomplete data: {field} is missing")]
    IncompleteData {
        /// Name of the missing value
        field: String,
    },

    /// A loader failed; carries the content kind and the underlying cause.
    #[error("Failed to load {what}: {source}")]
    Load {
        /// Content kind (e.g. "profile", "project k8s-migration")
        what: String,
        /// Underlying error
        #[source]
        source: Box<Error>,
    },

    /// Configuration or settings error
    #[error("Configuration error: {message}")]
    Config {
        /// What is wrong
        message: String,
    },

    /// A language tag outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

impl Error {
    /// Creates an I/O error annotated with the path that failed.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a decode error.
    pub fn decode<W, M>(what: W, message: M) -> Self
    where
        W: Into<String>,
        M: std::fmt::Display,
    {
        Error::Decode {
            what: what.into(),
            message: message.to_string(),
        }
    }

    /// Creates a not-found error for a project slug.
    pub fn project_not_found(slug: impl Into<String>, language: Language) -> Self {
        Error::ProjectNotFound {
            slug: slug.into(),
            language,
        }
    }

    /// Creates an incomplete-data error.
    pub fn incomplete(field: impl Into<String>) -> Self {
        Error::IncompleteData {
            field: field.into(),
        }
    }

    /// Wraps an error with the content kind that failed to load.
    pub fn load(what: impl Into<String>, source: Error) -> Self {
        Error::Load {
            what: what.into(),
            source: Box::new(source),
        }
    }

    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Returns `true` if this error (or the error it wraps) is a project
    /// lookup miss.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::ProjectNotFound { .. } => true,
            Error::Load { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// Returns the innermost error, skipping [`Error::Load`] wrappers.
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Load { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
