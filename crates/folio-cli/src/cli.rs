//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use folio_core::Language;

use crate::settings::Theme;

/// Folio - inspect and validate bilingual portfolio content
#[derive(Parser, Debug)]
#[command(name = "folio", author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "FOLIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Content root directory (overrides configuration)
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Content language (overrides saved settings)
    #[arg(short, long, global = true)]
    pub lang: Option<Language>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the profile
    Profile,
    /// Print work experience, most recent first
    Experience,
    /// Print skills by category
    Skills,
    /// Print education, most recent first
    Education,
    /// Print certifications with expiration status
    Certifications,
    /// Print personal interests
    Interests,
    /// List projects
    Projects {
        /// Only featured projects
        #[arg(long)]
        featured: bool,
        /// Only projects in this category (exact match)
        #[arg(long)]
        category: Option<String>,
        /// Maximum number of projects (0 means no limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Print one project by slug
    Project {
        /// Project slug, e.g. k8s-migration
        slug: String,
    },
    /// Print all content for the selected language
    Site,
    /// Check every content file and report problems
    Validate,
    /// Configuration file operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
    /// Saved language and theme settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path
    Path,
    /// Print the effective configuration
    Show,
    /// Print one configuration value by dotted key
    Get {
        /// Key, e.g. default_language
        key: String,
    },
    /// Create a default configuration file
    Init {
        /// Write to this path instead of the default location
        #[arg(long)]
        file: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the current settings
    Show,
    /// Save the content language
    SetLanguage {
        /// Language code (en or de)
        language: Language,
    },
    /// Save the display theme
    SetTheme {
        #[arg(value_enum)]
        theme: Theme,
    },
}
