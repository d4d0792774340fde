//! Coercion of raw frontmatter values.
//!
//! Each header value is a trimmed string. Coercion applies these rules in
//! order, first match wins:
//!
//! 1. `true` → [`FrontmatterValue::Bool`]`(true)`
//! 2. `false` → [`FrontmatterValue::Bool`]`(false)`
//! 3. `null` → [`FrontmatterValue::Null`]
//! 4. `[a, b, c]` → [`FrontmatterValue::List`], each element trimmed and
//!    stripped of one layer of quotes
//! 5. anything else → [`FrontmatterValue::String`], stripped of one layer of
//!    quotes
//!
//! Numbers are never coerced. List elements cannot contain commas; there is
//! no escaping.

use serde::Serialize;

/// A coerced frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    /// `true` or `false`
    Bool(bool),
    /// `null`
    Null,
    /// `[a, b, c]`
    List(Vec<String>),
    /// Any other value
    String(String),
}

impl FrontmatterValue {
    /// The string payload, if this is a plain string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontmatterValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The boolean payload, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FrontmatterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The list payload, if this is a list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FrontmatterValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Whether this is `null`.
    pub fn is_null(&self) -> bool {
        matches!(self, FrontmatterValue::Null)
    }

    /// Render any non-null value as text: lists join with `", "`, booleans
    /// become `true`/`false`.
    ///
    /// ```rust
    /// use folio_content::markdown::coerce_value;
    ///
    /// assert_eq!(coerce_value("true").to_text().as_deref(), Some("true"));
    /// assert_eq!(coerce_value("[a, b]").to_text().as_deref(), Some("a, b"));
    /// assert_eq!(coerce_value("null").to_text(), None);
    /// ```
    pub fn to_text(&self) -> Option<String> {
        match self {
            FrontmatterValue::Bool(b) => Some(b.to_string()),
            FrontmatterValue::Null => None,
            FrontmatterValue::List(items) => Some(items.join(", ")),
            FrontmatterValue::String(s) => Some(s.clone()),
        }
    }

    /// Convert into a JSON value for typed deserialization.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FrontmatterValue::Bool(b) => serde_json::Value::Bool(*b),
            FrontmatterValue::Null => serde_json::Value::Null,
            FrontmatterValue::List(items) => items
                .iter()
                .map(|item| serde_json::Value::String(item.clone()))
                .collect(),
            FrontmatterValue::String(s) => serde_json::Value::String(s.clone()),
        }
    }
}

/// Coerce a trimmed raw header value.
///
/// ```rust
/// use folio_content::markdown::{coerce_value, FrontmatterValue};
///
/// assert_eq!(coerce_value("true"), FrontmatterValue::Bool(true));
/// assert_eq!(coerce_value("null"), FrontmatterValue::Null);
/// assert_eq!(coerce_value("2024"), FrontmatterValue::String("2024".into()));
/// assert_eq!(
///     coerce_value("[Rust, 'Tokio', \"Serde\"]"),
///     FrontmatterValue::List(vec!["Rust".into(), "Tokio".into(), "Serde".into()])
/// );
/// ```
pub fn coerce_value(raw: &str) -> FrontmatterValue {
    match raw {
        "true" => FrontmatterValue::Bool(true),
        "false" => FrontmatterValue::Bool(false),
        "null" => FrontmatterValue::Null,
        _ => match raw.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
            Some(inner) => FrontmatterValue::List(split_list(inner)),
            None => FrontmatterValue::String(strip_quotes(raw).to_string()),
        },
    }
}

fn split_list(inner: &str) -> Vec<String> {
    // `[]` and `[ ]` yield no elements rather than one empty string. This
    // intentionally departs from a literal comma split, which gives `[""]`.
    if inner.trim().is_empty() {
        return Vec::new();
    }
    inner
        .split(',')
        .map(|item| strip_quotes(item.trim()).to_string())
        .collect()
}

/// Strip one leading and one trailing quote character (`"` or `'`).
fn strip_quotes(s: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let s = s.strip_prefix(is_quote).unwrap_or(s);
    s.strip_suffix(is_quote).unwrap_or(s)
}
