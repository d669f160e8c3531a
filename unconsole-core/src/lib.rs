// unconsole-core/src/lib.rs
//! # unconsole Core Library
//!
//! `unconsole-core` provides the platform-independent logic for neutralizing
//! `console.log`, `console.info`, `console.warn` and `console.error` debug
//! statements in source text. It is pure and stateless: text in, text out,
//! with no file I/O.
//!
//! ## Modules
//!
//! * `config`: `ConsoleMethod`, `NestingDepth` and `TransformConfig`.
//! * `patterns`: builds and caches the regular expressions.
//! * `engine`: the `ConsoleTransform` trait.
//! * `engines`: `LineCommenter` and `MultilineRemover`.
//! * `console_match`: match spans and transformation outcomes.
//! * `headless`: one-shot `comment` and `strip` helpers.
//! * `errors`: `UnconsoleError`.
//!
//! ## Usage Example
//!
//! ```rust
//! use unconsole_core::{comment, strip};
//!
//! let source = "function f(x) {\n  console.log(\"x:\", g(x));\n  return x;\n}\n";
//!
//! assert_eq!(
//!     comment("  console.log(\"hello\");"),
//!     "  // console.log(\"hello\");"
//! );
//! assert_eq!(strip(source), "function f(x) {\n  \n  return x;\n}\n");
//! ```
//!
//! ## Matching limits
//!
//! Both transformations match with patterns, not a parser. The commenter only
//! handles a call that fills a single line and has no `)` in its arguments.
//! The remover follows one level of nested parentheses by default; use
//! `NestingDepth::Unbounded` to follow any depth.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod console_match;
pub mod engine;
pub mod engines;
pub mod errors;
pub mod headless;
pub mod patterns;

pub use config::{ConsoleMethod, NestingDepth, TransformConfig, MAX_NESTING_DEPTH};

pub use errors::UnconsoleError;

pub use engine::ConsoleTransform;

pub use engines::commenter::{LineCommenter, COMMENT_MARKER};
pub use engines::remover::MultilineRemover;

pub use console_match::{ConsoleMatch, TransformOutcome};

pub use headless::{build_transform, comment, strip, transform_string, TransformKind};
