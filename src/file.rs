//! In-place file rewriting.
//!
//! Read the whole file as UTF-8, run it through a rule table, write the
//! result back over the original. A decode failure surfaces through the
//! `InvalidData` I/O error from the read, so it folds into the same
//! file-access failure as a missing or unwritable path.

use std::fs;
use std::path::Path;

use crate::error::RewriteError;
use crate::rewrite::{apply_rules, RewriteOutcome, RewriteRule};

/// Rewrite `path` in place through `rules`, overwriting unconditionally.
pub fn rewrite_in_place(
    path: &Path,
    rules: &[RewriteRule],
) -> Result<RewriteOutcome, RewriteError> {
    let text = fs::read_to_string(path).map_err(|source| RewriteError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let outcome = apply_rules(&text, rules);
    fs::write(path, &outcome.content).map_err(|source| RewriteError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(outcome)
}
