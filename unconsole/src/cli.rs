// unconsole/src/cli.rs
//! Command-line interface definitions for the two unconsole executables.
//!
//! Each executable takes exactly one positional argument, the file to
//! rewrite in place. Logging verbosity is controlled through `RUST_LOG`.
//! License: MIT OR Apache-2.0

use clap::Parser;
use std::path::PathBuf;

/// Arguments for `comment-console`.
#[derive(Parser, Debug)]
#[command(
    name = "comment-console",
    version = env!("CARGO_PKG_VERSION"),
    about = "Comment out single-line console.log/info/warn/error statements in a file",
    long_about = "Rewrites the given file in place, prefixing every line that consists of a single console.log, console.info, console.warn or console.error call with `// `. Calls that span several lines or contain nested parentheses are left untouched.",
)]
pub struct CommentCli {
    /// The file to rewrite in place.
    #[arg(value_name = "FILE", help = "The file to rewrite in place.")]
    pub file: PathBuf,
}

/// Arguments for `remove-console`.
#[derive(Parser, Debug)]
#[command(
    name = "remove-console",
    version = env!("CARGO_PKG_VERSION"),
    about = "Remove console.log/info/warn/error calls from a file, including multi-line calls",
    long_about = "Rewrites the given file in place, deleting every console.log, console.info, console.warn and console.error call together with its optional trailing `;`. Arguments may span several lines and contain one level of nested parentheses.",
)]
pub struct RemoveCli {
    /// The file to rewrite in place.
    #[arg(value_name = "FILE", help = "The file to rewrite in place.")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definitions_are_valid() {
        CommentCli::command().debug_assert();
        RemoveCli::command().debug_assert();
    }

    #[test]
    fn test_exactly_one_positional_argument() {
        assert!(CommentCli::try_parse_from(["comment-console"]).is_err());
        assert!(RemoveCli::try_parse_from(["remove-console", "a.js", "b.js"]).is_err());
        let cli = RemoveCli::try_parse_from(["remove-console", "src/app.ts"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("src/app.ts"));
    }
}
