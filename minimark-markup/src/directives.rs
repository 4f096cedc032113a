//! Inline directive substitution, applied to the whole document before
//! line classification.
//!
//! Two forms are recognized. `[[text]]` is replaced by the lowercase
//! hexadecimal MD5 digest of `text`'s UTF-8 bytes, and `((text))` is
//! replaced by `text` with every `c` and `C` deleted. The hash pass
//! always runs first, so a strip form captured inside a hash form is
//! digested as literal text, while a hash form inside a strip form has
//! already been resolved by the time the strip pass runs.
//!
//! Both patterns are non-greedy: the first closing delimiter after the
//! opener ends the match, and a directive never spans a newline.

use std::sync::LazyLock;

use log::error;
use md5::{Digest, Md5};
use regex::Regex;

use crate::utils::never_matching_regex;

/// `[[content]]` — shortest capture up to the first `]]`.
pub static HASH_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(.*?)\]\]").unwrap_or_else(|e| {
        error!("Failed to compile HASH_DIRECTIVE regex: {e}");
        never_matching_regex()
    })
});

/// `((content))` — shortest capture up to the first `))`.
pub static STRIP_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(\((.*?)\)\)").unwrap_or_else(|e| {
        error!("Failed to compile STRIP_DIRECTIVE regex: {e}");
        never_matching_regex()
    })
});

/// Replace every `[[content]]` with the MD5 digest of `content`.
///
/// Each occurrence is hashed independently over its own captured text,
/// exactly as written.
#[must_use]
pub fn apply_hash_directives(text: &str) -> String {
    HASH_DIRECTIVE
        .replace_all(text, |caps: &regex::Captures| {
            hex::encode(Md5::digest(caps[1].as_bytes()))
        })
        .to_string()
}

/// Replace every `((content))` with `content` minus any `c`/`C`.
///
/// Deletion, not substitution: all other characters keep their
/// relative order and case.
#[must_use]
pub fn apply_strip_directives(text: &str) -> String {
    STRIP_DIRECTIVE
        .replace_all(text, |caps: &regex::Captures| {
            caps[1]
                .chars()
                .filter(|c| *c != 'c' && *c != 'C')
                .collect::<String>()
        })
        .to_string()
}
