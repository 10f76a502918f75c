//! makefile-adapter: Rewrite an exported makefile in place.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use portmake::cli::init_logging;
use portmake::file::rewrite_in_place;
use portmake::rewrite::makefile;

/// Strip toolchain-specific paths and names from an IDE-exported makefile
#[derive(Parser)]
#[command(name = "makefile-adapter")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Makefile to rewrite in place
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = rewrite_in_place(&cli.file, &makefile::RULES)?;
    for (rule, count) in &outcome.counts {
        debug!(rule = %rule, count, "applied substitution");
    }
    debug!(file = %cli.file.display(), "rewrote makefile");
    Ok(())
}
