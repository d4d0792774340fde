//! Frontmatter extraction from markdown documents.
//!
//! Frontmatter is a block of `key: value` lines at the very start of a
//! document, delimited by standalone `---` lines:
//!
//! ```markdown
//! ---
//! title: Kubernetes Migration
//! date: 2024-03
//! technologies: [Kubernetes, Terraform, Go]
//! featured: true
//! ---
//! # Kubernetes Migration
//!
//! The body of the write-up starts here.
//! ```
//!
//! This is deliberately not YAML. Every line is split on its first colon,
//! and the value is coerced by [`coerce_value`](super::value::coerce_value).
//! Lines without a colon are skipped.
//!
//! # Usage
//!
//! ```rust
//! use folio_content::markdown::extract_frontmatter;
//!
//! let doc = "---\ntitle: Test\nfeatured: true\n---\nBody";
//! let fm = extract_frontmatter(doc);
//!
//! assert!(fm.has_frontmatter());
//! assert_eq!(fm.data().get_str("title"), Some("Test"));
//! assert_eq!(fm.data().get_bool("featured"), Some(true));
//! assert_eq!(fm.content(), "Body");
//! ```

use folio_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::value::{coerce_value, FrontmatterValue};

/// Delimiter line opening and closing the header block.
pub const DELIMITER: &str = "---";

// ============================================================================
// FrontmatterRecord
// ============================================================================

/// Ordered mapping from field name to coerced value.
///
/// Keys are unique. Inserting an existing key replaces its value in place,
/// so a repeated header key keeps its first position and its last value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrontmatterRecord {
    fields: Vec<(String, FrontmatterValue)>,
}

impl FrontmatterRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: FrontmatterValue) {
        let key = key.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((key, value)),
        }
    }

    /// Look up a field.
    pub fn get(&self, key: &str) -> Option<&FrontmatterValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a plain string field.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Look up a boolean field.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key)?.as_bool()
    }

    /// Look up a list field; returns an empty slice when missing or not a list.
    pub fn get_list(&self, key: &str) -> &[String] {
        self.get(key).and_then(FrontmatterValue::as_list).unwrap_or(&[])
    }

    /// Whether the record has a field with this name.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over fields in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrontmatterValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Field names in header order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    /// Convert into a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let map = self
            .fields
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect::<serde_json::Map<_, _>>();
        serde_json::Value::Object(map)
    }

    /// Deserialize the record into a typed struct.
    ///
    /// Fails with [`Error::Decode`] when a required field is missing or a
    /// value has the wrong shape.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(self.to_json()).map_err(|e| Error::decode("frontmatter", e))
    }
}

impl Serialize for FrontmatterRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

// ============================================================================
// Frontmatter
// ============================================================================

/// Result of frontmatter extraction: the header record and the body.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    data: FrontmatterRecord,
    content: &'a str,
    had_delimiters: bool,
}

impl<'a> Frontmatter<'a> {
    fn without_frontmatter(content: &'a str) -> Self {
        Self {
            data: FrontmatterRecord::new(),
            content,
            had_delimiters: false,
        }
    }

    /// Whether an opening and a closing delimiter were both found.
    pub fn has_frontmatter(&self) -> bool {
        self.had_delimiters
    }

    /// The parsed header record (empty when there is no frontmatter).
    pub fn data(&self) -> &FrontmatterRecord {
        &self.data
    }

    /// Take ownership of the header record.
    pub fn into_data(self) -> FrontmatterRecord {
        self.data
    }

    /// The body: everything after the closing delimiter line, or the whole
    /// document when there is no frontmatter.
    pub fn content(&self) -> &'a str {
        self.content
    }

    /// Deserialize the header record into a typed struct.
    ///
    /// ```rust
    /// use folio_content::markdown::extract_frontmatter;
    /// use serde::Deserialize;
    ///
    /// #[derive(Deserialize)]
    /// struct Meta {
    ///     title: String,
    ///     featured: Option<bool>,
    /// }
    ///
    /// let fm = extract_frontmatter("---\ntitle: Hello\n---\nBody");
    /// let meta: Meta = fm.deserialize().unwrap();
    /// assert_eq!(meta.title, "Hello");
    /// assert_eq!(meta.featured, None);
    /// ```
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T> {
        self.data.deserialize()
    }
}

// ============================================================================
// Extraction
// ============================================================================

/// Extract the frontmatter header from a document.
///
/// # Behavior
///
/// - First line not exactly `---`: no frontmatter, content is the whole text
/// - Opening `---` but no closing `---` line: no frontmatter, content is the
///   whole text (logged at warn level)
/// - Adjacent delimiters: empty record, content is everything after the
///   closing delimiter line
///
/// A trailing `\r` on delimiter lines is accepted.
///
/// ```rust
/// use folio_content::markdown::extract_frontmatter;
///
/// let fm = extract_frontmatter("# Just Markdown");
/// assert!(!fm.has_frontmatter());
/// assert!(fm.data().is_empty());
/// assert_eq!(fm.content(), "# Just Markdown");
/// ```
pub fn extract_frontmatter(text: &str) -> Frontmatter<'_> {
    let (first, after_open) = split_line(text);
    if !is_delimiter(first) {
        return Frontmatter::without_frontmatter(text);
    }

    let mut rest = after_open;
    let mut header_len = 0;
    let body = loop {
        if rest.is_empty() {
            log::warn!("Frontmatter opening delimiter found but no closing delimiter");
            return Frontmatter::without_frontmatter(text);
        }
        let (line, next) = split_line(rest);
        if is_delimiter(line) {
            break next;
        }
        header_len += rest.len() - next.len();
        rest = next;
    };

    Frontmatter {
        data: parse_header(&after_open[..header_len]),
        content: body,
        had_delimiters: true,
    }
}

/// Strip frontmatter from a document, returning only the body.
///
/// ```rust
/// use folio_content::markdown::strip_frontmatter;
///
/// assert_eq!(strip_frontmatter("---\ntitle: Test\n---\n# Heading"), "# Heading");
/// assert_eq!(strip_frontmatter("# Heading"), "# Heading");
/// ```
pub fn strip_frontmatter(text: &str) -> &str {
    extract_frontmatter(text).content()
}

fn parse_header(header: &str) -> FrontmatterRecord {
    let mut record = FrontmatterRecord::new();
    for line in header.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        record.insert(key.trim(), coerce_value(value.trim()));
    }
    record
}

/// Split off the first line, returning it (without the `\n`) and the rest.
fn split_line(s: &str) -> (&str, &str) {
    match s.find('\n') {
        Some(pos) => (&s[..pos], &s[pos + 1..]),
        None => (s, ""),
    }
}

fn is_delimiter(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == DELIMITER
}

// ============================================================================
// Tests
// ============================================================================
