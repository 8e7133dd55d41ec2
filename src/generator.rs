//! Generated text assets: the shared and per-template Makefiles.
//! Bodies are fixed text; `make` variables in them are passed through untouched.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use crate::template::DocumentTemplate;

/// Shared rules included by every template Makefile
pub const FRAMEWORK_MAKEFILE: &str = include_str!("assets/Makefile.include");

/// Top-level Makefile delegating to each template directory
pub const ROOT_MAKEFILE: &str = include_str!("assets/Makefile.root");

const TEMPLATE_MAKEFILE: &str = include_str!("assets/template.mk.j2");

/// Writes `content` to `path`, replacing whatever is there.
///
/// Parent directories are not created.
///
/// # Errors
/// * `Error::Io` if the file cannot be written, e.g. a directory is in the way
pub fn write_text<P: AsRef<Path>>(path: P, content: &str) -> Result<PathBuf> {
    let path = path.as_ref();
    debug!("Writing file: {} ({} bytes)", path.display(), content.len());
    fs::write(path, content).map_err(Error::io(path))?;
    Ok(path.to_path_buf())
}

/// Renders the Makefile for one document template.
pub fn template_makefile(
    engine: &dyn TemplateRenderer,
    template: &DocumentTemplate,
) -> Result<String> {
    let context = serde_json::to_value(template)?;
    engine.render(TEMPLATE_MAKEFILE, &context)
}
