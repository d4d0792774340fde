//! Utility modules for slug handling and path resolution.
//!
//! # Modules
//!
//! - [`ids`]: Slug normalization and project file-name conventions
//! - [`paths`]: Generic path utilities (binary location, tilde expansion)
//! - [`resolver`]: Content and config directory resolution

pub mod ids;
pub mod paths;
pub mod resolver;
