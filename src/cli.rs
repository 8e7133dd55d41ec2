//! Command-line interface implementation for restructure.
//! Provides argument parsing using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for restructure.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Restructure a document repository into framework/ and templates/",
    long_about = None
)]
pub struct Args {
    /// Repository root containing scripts/, themes/ and the ICD template
    #[arg(value_name = "ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling for argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
