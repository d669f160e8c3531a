// unconsole-core/src/engines/mod.rs
//! Concrete `ConsoleTransform` implementations.
//!
//! * `commenter`: prefixes whole-line console calls with `// `.
//! * `remover`: deletes console calls anywhere in the text.

pub mod commenter;
pub mod remover;
