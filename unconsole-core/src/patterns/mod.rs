//! Pattern construction for the console transformations.
//!
//! Builds the regular expressions used by the commenter and the remover from
//! a `TransformConfig`, and caches the compiled results so repeated runs with
//! the same settings do not recompile.

pub mod compiler;
