use std::path::PathBuf;

use clap::Parser;

/// Command line interface for minimark
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about = "Convert a small Markdown subset to an HTML fragment"
)]
pub struct Cli {
  /// Path to the Markdown file to convert
  pub input_file: PathBuf,

  /// Path to write the generated HTML fragment to
  pub output_file: PathBuf,

  /// Enable verbose debug logging
  #[arg(short, long)]
  pub verbose: bool,
}

impl Cli {
  /// Parse command line arguments into a [`Cli`] struct.
  #[must_use]
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
