//! File and asset copying.
//! Copies keep the source's base name, permission bits and timestamps.
//! Directory copies are shallow: only direct regular-file children are copied.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Execute capability set, independent of any numeric mode representation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecPermissions {
    pub owner: bool,
    pub group: bool,
    pub other: bool,
}

impl ExecPermissions {
    /// Executable by owner, group and others
    pub const ALL: Self = Self {
        owner: true,
        group: true,
        other: true,
    };

    pub const NONE: Self = Self {
        owner: false,
        group: false,
        other: false,
    };

    #[cfg(unix)]
    fn mode_bits(self) -> u32 {
        let mut bits = 0;
        if self.owner {
            bits |= 0o100;
        }
        if self.group {
            bits |= 0o010;
        }
        if self.other {
            bits |= 0o001;
        }
        bits
    }

    #[cfg(unix)]
    fn from_mode(mode: u32) -> Self {
        Self {
            owner: mode & 0o100 != 0,
            group: mode & 0o010 != 0,
            other: mode & 0o001 != 0,
        }
    }
}

/// Copies `source` into `dest_dir`, keeping its file name.
///
/// An existing destination file is replaced, even when it is read-only.
///
/// # Returns
/// * `Result<PathBuf>` - Path of the written copy
///
/// # Errors
/// * `Error::MissingSource` if `source` does not exist
/// * `Error::NotAFile` if `source` is not a regular file
/// * `Error::Io` if the destination cannot be written
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(source: P, dest_dir: Q) -> Result<PathBuf> {
    let source = source.as_ref();
    if !source.exists() {
        return Err(Error::MissingSource { path: source.to_path_buf() });
    }
    if !source.is_file() {
        return Err(Error::NotAFile { path: source.to_path_buf() });
    }
    let file_name = source
        .file_name()
        .ok_or_else(|| Error::NotAFile { path: source.to_path_buf() })?;
    let target = dest_dir.as_ref().join(file_name);

    // A previous run may have left a read-only copy; replace it rather than
    // writing through it. Directories in the way are left for `fs::copy` to
    // reject.
    if fs::symlink_metadata(&target).is_ok_and(|m| !m.is_dir()) {
        debug!("Replacing existing file: {}", target.display());
        fs::remove_file(&target).map_err(Error::io(&target))?;
    }

    debug!("Copying file: {} -> {}", source.display(), target.display());
    fs::copy(source, &target).map_err(Error::io(&target))?;
    preserve_times(source, &target)?;

    Ok(target)
}

/// Copies the direct regular-file children of `source_dir` into `dest_dir`.
///
/// Subdirectories are skipped, not descended into. Entries are processed in
/// file name order.
///
/// # Errors
/// * `Error::MissingSource` if `source_dir` does not exist
/// * `Error::NotADirectory` if `source_dir` is not a directory
/// * Any error from [`copy_file`]
pub fn copy_dir_files<P: AsRef<Path>, Q: AsRef<Path>>(
    source_dir: P,
    dest_dir: Q,
) -> Result<Vec<PathBuf>> {
    let source_dir = source_dir.as_ref();
    if !source_dir.exists() {
        return Err(Error::MissingSource { path: source_dir.to_path_buf() });
    }
    if !source_dir.is_dir() {
        return Err(Error::NotADirectory { path: source_dir.to_path_buf() });
    }

    let mut copied = Vec::new();
    for entry in WalkDir::new(source_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry?;
        // Follows symlinks, so a link to a regular file is copied as a file.
        if entry.path().is_file() {
            copied.push(copy_file(entry.path(), dest_dir.as_ref())?);
        } else {
            debug!("Skipping non-file entry: {}", entry.path().display());
        }
    }

    Ok(copied)
}

/// Adds the execute bits in `perms` to the file's current permissions.
///
/// Existing read/write bits are left untouched. No-op on platforms without
/// Unix permission bits.
pub fn make_executable<P: AsRef<Path>>(path: P, perms: ExecPermissions) -> Result<()> {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut permissions = fs::metadata(path).map_err(Error::io(path))?.permissions();
        permissions.set_mode(permissions.mode() | perms.mode_bits());
        fs::set_permissions(path, permissions).map_err(Error::io(path))?;
        debug!("chmod +x {} ({:o})", path.display(), perms.mode_bits());
    }

    #[cfg(not(unix))]
    {
        let _ = perms;
        debug!("Execute bits not supported on this platform: {}", path.display());
    }

    Ok(())
}

/// Reads back which execute bits a file carries.
pub fn exec_permissions<P: AsRef<Path>>(path: P) -> Result<ExecPermissions> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(Error::io(path))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        Ok(ExecPermissions::from_mode(metadata.permissions().mode()))
    }

    #[cfg(not(unix))]
    {
        let _ = metadata;
        Ok(ExecPermissions::ALL)
    }
}

fn preserve_times(source: &Path, target: &Path) -> Result<()> {
    let metadata = fs::metadata(source).map_err(Error::io(source))?;
    let times = fs::FileTimes::new()
        .set_accessed(metadata.accessed().map_err(Error::io(source))?)
        .set_modified(metadata.modified().map_err(Error::io(source))?);

    // Setting explicit times only needs ownership on Unix, so a read-only
    // handle works even when the copied mode is read-only.
    #[cfg(unix)]
    let file = fs::File::open(target);
    #[cfg(not(unix))]
    let file = fs::OpenOptions::new().write(true).open(target);

    file.and_then(|f| f.set_times(times))
        .map_err(Error::io(target))
}
