use std::{fs, path::Path};

use anyhow::{Context, Result};
use log::{debug, info};
use minimark_markup::{MarkupOptions, MarkupProcessor};

/// Convert the Markdown file at `input` into an HTML fragment written
/// at `output`.
///
/// The whole input is read into memory as UTF-8, rendered in a single
/// pass, and the output file is created or overwritten with the joined
/// fragments. There is no partial-write recovery: if writing fails
/// partway, the output file is left with whatever the write produced.
///
/// # Errors
///
/// Returns an error if the input cannot be read as UTF-8 text, if
/// rendering fails, or if the output cannot be written.
pub fn convert(input: &Path, output: &Path) -> Result<()> {
  let source = fs::read_to_string(input)
    .with_context(|| format!("Failed to read {}", input.display()))?;
  debug!("Read {} bytes from {}", source.len(), input.display());

  let processor = MarkupProcessor::new(MarkupOptions::default());
  let result = processor.render(&source)?;

  fs::write(output, &result.html)
    .with_context(|| format!("Failed to write {}", output.display()))?;
  info!("Wrote {}", output.display());

  Ok(())
}
