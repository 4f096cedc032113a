use std::sync::LazyLock;

use html_escape::encode_safe;
use log::{error, trace};
use regex::Regex;

use crate::{
    directives,
    error::MarkupError,
    types::{Header, MarkupResult},
    utils,
};

/// ATX heading: 1-6 leading `#`, exactly one space, then content.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(#{1,6}) (.*)").unwrap_or_else(|e| {
        error!("Failed to compile HEADING_RE regex: {e}");
        utils::never_matching_regex()
    })
});

/// Ordered list item prefix: one or more digits followed by a period.
static ORDERED_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.").unwrap_or_else(|e| {
        error!("Failed to compile ORDERED_PREFIX_RE regex: {e}");
        utils::never_matching_regex()
    })
});

/// Options for configuring the markup processor.
#[derive(Debug, Clone)]
pub struct MarkupOptions {
    /// Replace `[[content]]` with the MD5 digest of the content.
    pub hash_directives: bool,

    /// Replace `((content))` with the content minus any `c`/`C`.
    pub strip_directives: bool,
}

impl Default for MarkupOptions {
    fn default() -> Self {
        Self {
            hash_directives: true,
            strip_directives: true,
        }
    }
}

/// Which kind of HTML fragment a line produces.
enum LineKind<'a> {
    Heading { level: usize, content: &'a str },
    UnorderedItem,
    OrderedItem,
    Paragraph,
    Blank,
}

/// Tracks which list wrappers have been opened but not yet closed.
///
/// Wrappers are closed only once, after the last line. A non-list line
/// between two items does not close the surrounding list, even though
/// the resulting nesting is invalid HTML; callers rely on that
/// historical behavior.
#[derive(Debug, Default)]
struct ListState {
    unordered_open: bool,
    ordered_open: bool,
}

/// Main markup processor struct.
pub struct MarkupProcessor {
    options: MarkupOptions,
}

impl MarkupProcessor {
    /// Create a new `MarkupProcessor` with the given options.
    #[must_use]
    pub const fn new(options: MarkupOptions) -> Self {
        Self { options }
    }

    /// Render a document to an HTML fragment, extracting headers and
    /// title along the way.
    ///
    /// The directive passes run over the entire source first; the
    /// substituted text is then split on `\n` and each line classified
    /// into exactly one fragment kind. Fragments are joined with single
    /// newlines and no trailing newline.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::MissingItemSeparator`] when a line with a
    /// digit/period prefix contains no space at all.
    pub fn render(&self, source: &str) -> Result<MarkupResult, MarkupError> {
        let substituted = self.substitute(source);

        let mut fragments: Vec<String> = Vec::new();
        let mut headers: Vec<Header> = Vec::new();
        let mut title: Option<String> = None;
        let mut lists = ListState::default();

        for line in substituted.split('\n') {
            match classify(line) {
                LineKind::Heading { level, content } => {
                    if level == 1 && title.is_none() {
                        title = Some(content.to_string());
                    }
                    headers.push(Header {
                        text: content.to_string(),
                        // The pattern bounds the hash run to 1-6
                        level: u8::try_from(level).unwrap_or(6),
                        id: utils::slugify(content),
                    });
                    let escaped = encode_safe(content);
                    fragments.push(format!("<h{level}>{escaped}</h{level}>"));
                }
                LineKind::UnorderedItem => {
                    if !lists.unordered_open {
                        fragments.push("<ul>".to_string());
                        lists.unordered_open = true;
                    }
                    // Slice by characters, not bytes: an indented item
                    // loses its first two characters whatever they are,
                    // matching the converter this one replaces.
                    let rest: String = line.chars().skip(2).collect();
                    fragments.push(format!("<li>{rest}</li>"));
                }
                LineKind::OrderedItem => {
                    if !lists.ordered_open {
                        fragments.push("<ol>".to_string());
                        lists.ordered_open = true;
                    }
                    // Item content starts after the first space found
                    // anywhere in the line, not after the digit prefix.
                    let space = line.find(' ').ok_or_else(|| {
                        MarkupError::MissingItemSeparator(line.to_string())
                    })?;
                    fragments.push(format!("<li>{}</li>", &line[space + 1..]));
                }
                LineKind::Paragraph => {
                    fragments.push(format!("<p>{}</p>", encode_safe(line)));
                }
                LineKind::Blank => {}
            }
        }

        if lists.unordered_open {
            fragments.push("</ul>".to_string());
        }
        if lists.ordered_open {
            fragments.push("</ol>".to_string());
        }

        trace!("rendered {} fragments", fragments.len());

        Ok(MarkupResult {
            html: fragments.join("\n"),
            headers,
            title,
        })
    }

    /// Run the enabled directive passes over the raw source, hash
    /// directives first.
    fn substitute(&self, source: &str) -> String {
        let hashed = if self.options.hash_directives {
            directives::apply_hash_directives(source)
        } else {
            source.to_string()
        };
        if self.options.strip_directives {
            directives::apply_strip_directives(&hashed)
        } else {
            hashed
        }
    }
}

/// Classify one line. Precedence is fixed: heading, then unordered
/// item, then ordered item, then paragraph; only the empty string is
/// blank (a whitespace-only line is a paragraph).
fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = HEADING_RE.captures(line) {
        let level = caps[1].len();
        let content = caps.get(2).map_or("", |m| m.as_str());
        return LineKind::Heading { level, content };
    }
    // The item test runs on a trimmed view, the content extraction in
    // `render` does not.
    if line.trim().starts_with("- ") {
        return LineKind::UnorderedItem;
    }
    if ORDERED_PREFIX_RE.is_match(line) {
        return LineKind::OrderedItem;
    }
    if line.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph
    }
}
