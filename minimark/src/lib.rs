//! Expose minimark's internal API for use in integration tests. The
//! supported way to drive a conversion programmatically is
//! [`minimark_markup::MarkupProcessor`]; this crate only adds the file
//! plumbing and the CLI around it.
pub mod cli;
pub mod convert;
