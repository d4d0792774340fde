//! Markdown body helpers built on `pulldown-cmark`.
//!
//! Project records carry a short plain-text excerpt and a reading-time
//! estimate derived from their Markdown body. Nothing here renders HTML.
//!
//! # Example
//!
//! ```rust
//! use folio_content::markdown::parser::{extract_first_paragraph, estimate_reading_minutes};
//!
//! let body = "# Migration\n\nMoved **forty** services to Kubernetes.\n\n## Details";
//!
//! assert_eq!(
//!     extract_first_paragraph(body, 100).as_deref(),
//!     Some("Moved forty services to Kubernetes.")
//! );
//! assert_eq!(estimate_reading_minutes(body), 1);
//! ```

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Words per minute assumed by [`estimate_reading_minutes`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Extract the first paragraph from markdown content.
///
/// Skips headings and extracts the first actual paragraph content.
/// Inline formatting is stripped. Content is truncated to `max_chars` if needed.
///
/// # Returns
///
/// * `Some(String)` - The paragraph text
/// * `None` - If no paragraph is found
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_paragraph = false;
    let mut in_heading = false;
    let mut paragraph_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => in_heading = true,
            Event::End(TagEnd::Heading(_)) => in_heading = false,

            Event::Start(Tag::Paragraph) if !in_heading => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let trimmed = paragraph_text.trim();
                if !trimmed.is_empty() {
                    return Some(truncate_text(trimmed, max_chars));
                }
                in_paragraph = false;
            }

            Event::Text(text) | Event::Code(text) if in_paragraph => {
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }

            _ => {}
        }
    }

    None
}

/// Extract plain text content from markdown, stripping all formatting.
///
/// Code blocks are dropped; inline code is kept.
///
/// ```rust
/// use folio_content::markdown::parser::extract_text_content;
///
/// let text = extract_text_content("# Title\n\nSome **bold** text.\n\n```rust\nfn main() {}\n```");
/// assert_eq!(text, "Title Some bold text.");
/// ```
pub fn extract_text_content(content: &str) -> String {
    let mut text_content = String::new();
    let mut in_code_block = false;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
            Event::End(TagEnd::CodeBlock) => in_code_block = false,
            Event::Text(text) | Event::Code(text) if !in_code_block => {
                let piece = text.trim();
                if piece.is_empty() {
                    continue;
                }
                if !text_content.is_empty() && !text_content.ends_with(' ') {
                    text_content.push(' ');
                }
                text_content.push_str(piece);
            }
            Event::SoftBreak | Event::HardBreak if !text_content.is_empty() => {
                text_content.push(' ');
            }
            _ => {}
        }
    }

    text_content.trim_end().to_string()
}

/// Estimate reading time in whole minutes, never less than one.
pub fn estimate_reading_minutes(content: &str) -> u32 {
    let words = extract_text_content(content).split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Truncate on a char boundary, appending "..." when shortened.
fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let cut: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut.trim_end())
}
