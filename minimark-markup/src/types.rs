//! Types for the minimark-markup public API.
use serde::{Deserialize, Serialize};

/// Represents a heading in a rendered document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Header {
    /// Heading text as written, without HTML escaping.
    pub text: String,
    /// Heading level (1-6).
    pub level: u8,
    /// Generated anchor ID for the heading.
    pub id: String,
}

/// Result of rendering a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MarkupResult {
    /// Rendered HTML fragment, newline-joined, no trailing newline.
    pub html: String,

    /// Extracted headings (for ToC, navigation, etc).
    pub headers: Vec<Header>,

    /// Title of the document, if found (first H1).
    pub title: Option<String>,
}
