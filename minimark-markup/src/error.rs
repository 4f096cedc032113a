use thiserror::Error;

/// Top-level error type for the minimark-markup crate.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// An ordered list item line carried a digit/period prefix but no
    /// space anywhere in the line, so there is no boundary to slice
    /// the item content at.
    #[error("ordered list item has no space separator: {0:?}")]
    MissingItemSeparator(String),
}
