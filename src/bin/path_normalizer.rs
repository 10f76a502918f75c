//! path-normalizer: Rewrite an exported dependency file in place.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use portmake::cli::init_logging;
use portmake::file::rewrite_in_place;
use portmake::rewrite::depfile;

/// Normalize path separators in an IDE-exported dependency file
#[derive(Parser)]
#[command(name = "path-normalizer")]
#[command(author, version, long_about = None)]
struct Cli {
    /// Dependency file to rewrite in place
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = rewrite_in_place(&cli.file, &depfile::RULES)?;
    for (rule, count) in &outcome.counts {
        debug!(rule = %rule, count, "applied substitution");
    }
    debug!(file = %cli.file.display(), "rewrote dependency file");
    Ok(())
}
