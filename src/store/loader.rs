use std::fs;
use std::path::Path;

use crate::error::{RebaseError, Result};
use crate::parser::LineBuffer;

/// Read the whole file into a line buffer, keeping each line's terminator.
pub fn load_lines(path: &Path) -> Result<LineBuffer> {
    tracing::info!("Reading {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| RebaseError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let buffer = LineBuffer::from_text(&contents);
    tracing::debug!(lines = buffer.len(), "loaded");
    Ok(buffer)
}
