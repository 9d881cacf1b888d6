//! Swap `id` entry tokens into the nearest preceding `name = ...` line of a
//! text file, renaming the id line to `base`.

pub mod error;
pub mod parser;
pub mod report;
pub mod store;

use std::path::Path;

pub use error::{RebaseError, Result};
pub use report::RebaseReport;

/// Load, rewrite and (unless `dry_run`) persist a single file.
pub fn rebase_file(path: &Path, dry_run: bool) -> Result<RebaseReport> {
    let mut buffer = store::load_lines(path)?;
    let rebases = parser::rebase_lines(&mut buffer);

    let backup = if dry_run {
        tracing::info!("Dry run, {} replacement(s) not written", rebases.len());
        None
    } else {
        Some(store::persist(path, &buffer)?)
    };

    Ok(RebaseReport {
        path: path.to_path_buf(),
        backup,
        dry_run,
        rebases,
    })
}
