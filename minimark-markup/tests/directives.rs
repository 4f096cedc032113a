#![allow(
  clippy::expect_used,
  clippy::unwrap_used,
  clippy::panic,
  reason = "Fine in tests"
)]
use md5::{Digest, Md5};
use minimark_markup::directives::{
  apply_hash_directives,
  apply_strip_directives,
};

fn md5_hex(text: &str) -> String {
  hex::encode(Md5::digest(text.as_bytes()))
}

#[test]
fn hash_directive_replaces_with_known_digest() {
  // RFC 1321 test vector for "abc"
  assert_eq!(
    apply_hash_directives("[[abc]]"),
    "900150983cd24fb0d6963f7d28e17f72"
  );
  assert_eq!(
    apply_hash_directives("before [[abc]] after"),
    "before 900150983cd24fb0d6963f7d28e17f72 after"
  );
}

#[test]
fn hash_directive_empty_content() {
  assert_eq!(
    apply_hash_directives("[[]]"),
    "d41d8cd98f00b204e9800998ecf8427e"
  );
}

#[test]
fn hash_directive_is_deterministic_and_content_sensitive() {
  let once = apply_hash_directives("[[message digest]]");
  let twice = apply_hash_directives("[[message digest]]");
  assert_eq!(once, twice);
  assert_eq!(once.len(), 32);
  assert_ne!(once, apply_hash_directives("[[message digest!]]"));
}

#[test]
fn hash_occurrences_are_hashed_independently() {
  let html = apply_hash_directives("[[abc]] [[abc]]");
  assert_eq!(
    html,
    "900150983cd24fb0d6963f7d28e17f72 900150983cd24fb0d6963f7d28e17f72"
  );

  let distinct = apply_hash_directives("[[a]] [[b]]");
  let parts: Vec<&str> = distinct.split(' ').collect();
  assert_eq!(parts.len(), 2);
  assert_ne!(parts[0], parts[1]);
}

#[test]
fn hash_directive_is_non_greedy() {
  // The first ]] closes the match; the trailing ]] stays literal.
  assert_eq!(
    apply_hash_directives("[[a]]b]]"),
    format!("{}b]]", md5_hex("a"))
  );
}

#[test]
fn directives_do_not_span_newlines() {
  assert_eq!(apply_hash_directives("[[a\nb]]"), "[[a\nb]]");
  assert_eq!(apply_strip_directives("((a\nb))"), "((a\nb))");
}

#[test]
fn strip_directive_removes_c_case_insensitively() {
  assert_eq!(apply_strip_directives("((Chicago))"), "hiago");
  assert_eq!(apply_strip_directives("((CCcc))"), "");
  // All other characters keep their order and case
  assert_eq!(apply_strip_directives("((aCbc d))"), "ab d");
  assert_eq!(apply_strip_directives("no directive here"), "no directive here");
}

#[test]
fn strip_directive_is_non_greedy() {
  // Only the captured content loses its c's; text outside stays put.
  assert_eq!(apply_strip_directives("((ab))cd))"), "abcd))");
  assert_eq!(apply_strip_directives("((ac))cd))"), "acd))");
}

#[test]
fn hash_pass_runs_before_strip_pass() {
  // A strip form inside a hash form is hashed as literal text
  let hashed = apply_hash_directives("[[((x))]]");
  assert_eq!(hashed, md5_hex("((x))"));
  // ... and the digest contains no parens for the strip pass to match
  assert_eq!(apply_strip_directives(&hashed), hashed);
}

#[test]
fn strip_pass_sees_resolved_digests() {
  // [[abc]] resolves first; the strip pass then deletes the digest's
  // own `c` characters.
  let out = apply_strip_directives(&apply_hash_directives("(([[abc]]))"));
  assert_eq!(out, "900150983d24fb0d6963f7d28e17f72");
}
