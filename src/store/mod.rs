mod loader;
mod persister;

pub use loader::load_lines;
pub use persister::{backup_path, persist, BACKUP_SUFFIX};
