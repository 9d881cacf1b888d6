use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RebaseError, Result};
use crate::parser::LineBuffer;

pub const BACKUP_SUFFIX: &str = ".rebase";

/// `<path>.rebase`, with the suffix appended to the full file name.
pub fn backup_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}

/// Copy the original file aside, then overwrite it with the buffer.
///
/// Not atomic: if the write fails part way, the backup is the only copy of
/// the original content.
pub fn persist(path: &Path, buffer: &LineBuffer) -> Result<PathBuf> {
    let backup = backup_path(path);

    tracing::info!("Backing up to {}", backup.display());
    fs::copy(path, &backup).map_err(|source| RebaseError::Backup {
        path: path.to_path_buf(),
        backup: backup.clone(),
        source,
    })?;

    tracing::info!("Writing {}", path.display());
    fs::write(path, buffer.to_text()).map_err(|source| RebaseError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(backup)
}
