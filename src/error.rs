//! Error taxonomy.

use std::path::PathBuf;

use thiserror::Error;

/// The single failure class: the target file is missing, unreadable,
/// unwritable, or not valid UTF-8. Never recovered; callers let it propagate
/// to the process exit status.
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
