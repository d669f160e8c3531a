// unconsole/src/bin/comment_console.rs
//! `comment-console <FILE>`: comments out single-line console statements in place.

use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use unconsole::cli::CommentCli;
use unconsole::logger;
use unconsole::{run_rewrite, Confirmation};
use unconsole_core::LineCommenter;

fn main() -> Result<()> {
    let args = CommentCli::parse();
    logger::init_logger();

    let commenter = LineCommenter::new()?;
    run_rewrite(&args.file, &commenter, Confirmation::Commented, &mut io::stdout().lock())
        .with_context(|| format!("Failed to comment console statements in {}", args.file.display()))?;

    Ok(())
}
