// unconsole-core/src/headless.rs
//! One-shot helpers for transforming a string without managing a transform
//! instance.
//!
//! `comment` and `strip` are total: the default patterns are fixed and always
//! compile, so these never fail.

use anyhow::Result;
use lazy_static::lazy_static;
use log::error;

use crate::config::TransformConfig;
use crate::engine::ConsoleTransform;
use crate::engines::commenter::LineCommenter;
use crate::engines::remover::MultilineRemover;

/// Selects which transformation a headless call runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Comment,
    Strip,
}

lazy_static! {
    static ref DEFAULT_COMMENTER: Option<LineCommenter> = LineCommenter::new()
        .map_err(|e| error!("Default commenter failed to build: {:#}", e))
        .ok();
    static ref DEFAULT_REMOVER: Option<MultilineRemover> = MultilineRemover::new()
        .map_err(|e| error!("Default remover failed to build: {:#}", e))
        .ok();
}

/// Builds the transform for `kind` from `config` behind the trait object.
pub fn build_transform(kind: TransformKind, config: TransformConfig) -> Result<Box<dyn ConsoleTransform>> {
    let transform: Box<dyn ConsoleTransform> = match kind {
        TransformKind::Comment => Box::new(LineCommenter::with_config(config)?),
        TransformKind::Strip => Box::new(MultilineRemover::with_config(config)?),
    };
    Ok(transform)
}

/// Comments out every whole-line `console.log/info/warn/error(...)` statement.
pub fn comment(text: &str) -> String {
    match DEFAULT_COMMENTER.as_ref() {
        Some(commenter) => commenter.apply(text).content,
        None => {
            error!("No default commenter available; returning input unchanged.");
            text.to_string()
        }
    }
}

/// Deletes every `console.log/info/warn/error(...)` call, tolerating one level
/// of nested parentheses in the arguments.
pub fn strip(text: &str) -> String {
    match DEFAULT_REMOVER.as_ref() {
        Some(remover) => remover.apply(text).content,
        None => {
            error!("No default remover available; returning input unchanged.");
            text.to_string()
        }
    }
}

/// Runs the selected transformation with a custom config.
pub fn transform_string(kind: TransformKind, config: TransformConfig, text: &str) -> Result<String> {
    let transform = build_transform(kind, config)?;
    Ok(transform.apply(text).content)
}
