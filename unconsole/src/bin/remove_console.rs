// unconsole/src/bin/remove_console.rs
//! `remove-console <FILE>`: deletes console statements, including multi-line calls, in place.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use unconsole::cli::RemoveCli;
use unconsole::logger;
use unconsole::{run_rewrite, Confirmation};
use unconsole_core::MultilineRemover;

fn main() -> Result<()> {
    let args = RemoveCli::parse();
    logger::init_logger();

    // One level of nesting, matching the long-standing behavior of this tool.
    let remover = MultilineRemover::new()?;
    run_rewrite(&args.file, &remover, Confirmation::Cleaned, &mut io::stdout().lock())
        .with_context(|| format!("Failed to clean {}", args.file.display()))?;

    Ok(())
}
