//! portmake: Rewrite IDE-exported makefiles and dependency files for
//! portable out-of-tree builds.
//!
//! IDE toolchain exports hard-wire Windows path separators, in-tree `src/`
//! prefixes, and absolute compiler install paths into the makefile and
//! dependency file they generate. The `path-normalizer` and `makefile-adapter`
//! binaries rewrite those files in place so the exported build runs outside
//! the IDE.

pub mod cli;
pub mod error;
pub mod file;
pub mod rewrite;

pub use error::RewriteError;
