//! Command implementations for the unconsole executables.

pub mod rewrite;
