//! Target directory creation.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Creates every directory in `dirs` (with missing parents) under `root`.
///
/// Directories that already exist are not an error, so repeated runs succeed.
///
/// # Returns
/// * `Result<Vec<PathBuf>>` - The relative paths that were ensured, in order
///
/// # Errors
/// * `Error::Io` if a directory cannot be created, e.g. a file is in the way
pub fn create_directories<P: AsRef<Path>>(root: P, dirs: &[&str]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut created = Vec::with_capacity(dirs.len());

    for dir in dirs {
        let path = root.join(dir);
        debug!("Ensuring directory: {}", path.display());
        fs::create_dir_all(&path).map_err(Error::io(&path))?;
        println!("  Created: {dir}");
        created.push(PathBuf::from(dir));
    }

    Ok(created)
}
