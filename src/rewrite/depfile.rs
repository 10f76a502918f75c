//! Rule table for `path-normalizer`.
//!
//! Rewrites the exported dependency file: Windows path separators become
//! forward slashes, then the in-tree `src/` segment is dropped so the
//! recorded prerequisites resolve against the flattened export layout. The
//! separator conversion runs first so backslash-style `src\` segments are
//! caught by the second rule.

use once_cell::sync::Lazy;
use regex::Regex;

use super::RewriteRule;

pub static RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule {
            name: "backslash_to_slash",
            pattern: Regex::new(r"\\").expect("valid regex"),
            replacement: "/",
        },
        RewriteRule {
            name: "strip_src_segment",
            pattern: Regex::new(r"src/").expect("valid regex"),
            replacement: "",
        },
    ]
});
