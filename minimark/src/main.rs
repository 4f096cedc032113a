#![allow(clippy::print_stderr, reason = "User-facing CLI messages")]
use std::process::ExitCode;

use log::LevelFilter;

mod cli;
mod convert;

use cli::Cli;

fn main() -> ExitCode {
  // Parse command line arguments
  let cli = Cli::parse_args();

  // Initialize logging before anything that might want to log
  env_logger::Builder::new()
    .filter_level(if cli.verbose {
      LevelFilter::Debug
    } else {
      LevelFilter::Info
    })
    .write_style(env_logger::WriteStyle::Always)
    .init();

  // The input must exist as a regular file before the pipeline runs
  if !cli.input_file.is_file() {
    eprintln!("Missing {}", cli.input_file.display());
    return ExitCode::FAILURE;
  }

  match convert::convert(&cli.input_file, &cli.output_file) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      eprintln!("An error occurred: {e:#}");
      ExitCode::FAILURE
    },
  }
}
