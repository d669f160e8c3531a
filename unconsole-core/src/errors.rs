//! errors.rs - Custom error types for the unconsole-core library.
//!
//! This module defines a structured error enum for the library. The
//! transformations themselves are total; errors only arise while building
//! a transform from an invalid `TransformConfig`.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// All error types produced by the `unconsole-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without
/// breaking downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnconsoleError {
    #[error("At least one console method must be selected")]
    NoMethodsSelected,

    #[error("Nesting depth ({0}) exceeds maximum allowed ({1})")]
    NestingDepthExceeded(usize, usize),

    #[error("Failed to compile {0} pattern: {1}")]
    PatternCompilationError(&'static str, regex::Error),

    #[error("A fatal error occurred: {0}")]
    Fatal(String),
}
