// unconsole/src/lib.rs
//! # unconsole CLI
//!
//! Shared plumbing for the `comment-console` and `remove-console`
//! executables: argument definitions, logger setup and the in-place rewrite
//! driver. The transformations themselves live in `unconsole-core`.

pub mod cli;
pub mod commands;
pub mod logger;

pub use commands::rewrite::{rewrite_file, run_rewrite, Confirmation, RewriteError, RewriteReport};
