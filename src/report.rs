use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::parser::Rebase;

/// Summary of one run, printed with `--json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RebaseReport {
    pub path: PathBuf,
    /// `None` when nothing was written.
    pub backup: Option<PathBuf>,
    pub dry_run: bool,
    pub rebases: Vec<Rebase>,
}

impl RebaseReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
