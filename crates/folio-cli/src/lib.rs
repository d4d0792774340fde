//! # folio-cli
//!
//! Command-line interface for folio content.
//!
//! This crate provides:
//! - Inspection commands that print typed records as JSON
//! - Content validation with a per-file report
//! - Configuration (`config.toml`) and saved settings (`settings.toml`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

#[allow(missing_docs)]
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod error;
pub mod settings;

pub use cli::Cli;
pub use config::FolioConfig;
pub use error::{Error, Result};
pub use settings::{Settings, Theme};
