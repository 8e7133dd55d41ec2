//! Restructure migrates a document-authoring repository into a shared
//! `framework/` directory and per-document `templates/` directories,
//! generating the Makefiles that wire them together.

/// Command-line interface module
pub mod cli;

/// Fixed relative paths and markers
pub mod constants;

/// File copying with permission and timestamp preservation
pub mod copier;

/// Error types and handling
pub mod error;

/// Best-effort heredoc extraction from the companion shell script
pub mod extractor;

/// Generated Makefiles and text asset writing
pub mod generator;

/// Target directory creation
pub mod layout;

/// Logger initialization
pub mod logger;

/// Step-by-step orchestration of a restructuring run
pub mod processor;

/// Template rendering for generated Makefiles
pub mod renderer;

/// Console progress and summary output
pub mod report;

/// Document template descriptors
pub mod template;
