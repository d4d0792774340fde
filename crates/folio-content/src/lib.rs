//! Markdown frontmatter extraction and content utilities.
//!
//! This crate turns raw project documents into structured data. It has no
//! knowledge of portfolio record types; the loader crate defines those and
//! deserializes them from the generic [`FrontmatterRecord`].
//!
//! # Modules
//!
//! - [`markdown`]: Markdown parsing and frontmatter extraction
//!   - [`markdown::frontmatter`]: `key: value` header extraction
//!   - [`markdown::value`]: Scalar/list/boolean/null value coercion
//!   - [`markdown::parser`]: Excerpt, plain text, and reading-time helpers
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::extract_frontmatter;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Meta {
//!     title: String,
//!     technologies: Vec<String>,
//! }
//!
//! let doc = "---\ntitle: Home Lab\ntechnologies: [Rust, Nix]\n---\nBody";
//! let fm = extract_frontmatter(doc);
//! let meta: Meta = fm.deserialize().unwrap();
//! assert_eq!(meta.title, "Home Lab");
//! assert_eq!(meta.technologies, vec!["Rust", "Nix"]);
//! assert_eq!(fm.content(), "Body");
//! ```

pub mod markdown;

// Re-export commonly used types
pub use markdown::{
    coerce_value, estimate_reading_minutes, extract_first_paragraph, extract_frontmatter,
    extract_text_content, strip_frontmatter, Frontmatter, FrontmatterRecord, FrontmatterValue,
};
