//! Folio Core: shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all folio crates.
//! It has no internal folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error types and Result alias
//! - [`language`]: Supported content languages
//! - [`util`]: Slug, file-name, and path utilities

pub mod error;
pub mod language;
pub mod util;

// Re-export key types at crate root for convenience
pub use error::{Error, Result};
pub use language::Language;

// Convenience re-exports from util
pub use util::ids::{project_file_name, split_project_file_name};
pub use util::resolver::PathResolver;
