//! # minimark-markup
//!
//! A single-pass, line-oriented renderer for a small Markdown subset:
//! ATX headings (levels 1-6), flat unordered and ordered lists, and
//! paragraphs. Two inline directives are resolved across the whole
//! document before any line parsing: `[[text]]` becomes the lowercase
//! hex MD5 digest of `text`, and `((text))` becomes `text` with every
//! `c`/`C` removed.
//!
//! ## Quick Start
//!
//! ```rust
//! use minimark_markup::{MarkupOptions, MarkupProcessor};
//!
//! let processor = MarkupProcessor::new(MarkupOptions::default());
//! let result = processor.render("# Hello\n\nSome text.").unwrap();
//!
//! assert_eq!(result.html, "<h1>Hello</h1>\n<p>Some text.</p>");
//! assert_eq!(result.title.as_deref(), Some("Hello"));
//! ```
//!
//! The output is an HTML fragment: there is no document wrapper, the
//! fragments for each line are joined with single newlines and no
//! trailing newline is appended. List wrappers are closed only at the
//! end of the document, never when the line kind changes mid-stream;
//! this mirrors the converter this crate replaces and is deliberate.

pub mod directives;
pub mod processor;
mod types;
pub mod utils;

mod error;

pub use crate::{
    error::MarkupError,
    processor::{MarkupOptions, MarkupProcessor},
    types::{Header, MarkupResult},
};
