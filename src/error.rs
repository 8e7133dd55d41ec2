//! Error handling for the restructure tool.
//! Defines the error type and result alias used throughout the crate.

use std::io;
use std::path::PathBuf;
use thiserror::Error as ThisError;

/// Errors that abort a restructuring run.
///
/// Heredoc extraction misses are deliberately absent: they degrade to
/// placeholder content instead of failing the run.
#[derive(ThisError, Debug)]
pub enum Error {
    /// A required source file or directory does not exist
    #[error("Source not found: '{}'.", .path.display())]
    MissingSource { path: PathBuf },

    /// A copy source exists but is not a regular file
    #[error("Not a regular file: '{}'.", .path.display())]
    NotAFile { path: PathBuf },

    /// A directory copy source exists but is not a directory
    #[error("Not a directory: '{}'.", .path.display())]
    NotADirectory { path: PathBuf },

    /// A filesystem operation failed on a known path
    #[error("IO error at '{}': {source}.", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents errors raised while enumerating a directory
    #[error("Directory traversal error: {0}.")]
    WalkDirError(#[from] walkdir::Error),

    /// Represents errors that occur during Makefile rendering
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    /// Represents errors that occur while building a render context
    #[error("Serialization error: {0}.")]
    SerializationError(#[from] serde_json::Error),
}

impl Error {
    /// Wraps an `io::Error` with the path it occurred on.
    pub fn io<P: Into<PathBuf>>(path: P) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

/// Convenience type alias for Results with `Error` as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("\nError during restructuring: {err}");
    std::process::exit(1);
}
