//! Markdown parsing and frontmatter extraction utilities.
//!
//! - [`frontmatter`]: Header block extraction into a [`FrontmatterRecord`]
//! - [`value`]: Coercion of raw header values
//! - [`parser`]: Markdown body helpers built on `pulldown-cmark`

pub mod frontmatter;
pub mod parser;
pub mod value;

// Re-export key types and functions
pub use frontmatter::{extract_frontmatter, strip_frontmatter, Frontmatter, FrontmatterRecord};
pub use parser::{estimate_reading_minutes, extract_first_paragraph, extract_text_content};
pub use value::{coerce_value, FrontmatterValue};
