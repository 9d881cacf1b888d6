mod patterns;
mod rewriter;
mod types;

pub use patterns::{match_id, match_name, IdMatch, NameMatch};
pub use rewriter::rebase_lines;
pub use types::{Line, LineBuffer, Rebase};
