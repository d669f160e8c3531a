// unconsole-core/src/engine.rs
//! Defines the `ConsoleTransform` trait shared by the commenter and the remover.
//!
//! The trait decouples the rewrite driver from the specific matching
//! strategy, so a driver can be handed either transformation.
//!
//! License: MIT OR APACHE 2.0

use crate::console_match::{ConsoleMatch, TransformOutcome};

/// A pure text-to-text transformation over console statements.
///
/// Implementations are total: every input string produces an outcome, and
/// an input with no matches comes back unchanged.
pub trait ConsoleTransform: Send + Sync {
    /// Short identifier used in logs (e.g. `"commenter"`).
    fn name(&self) -> &'static str;

    /// Finds every match span without rewriting anything.
    ///
    /// Matches are sorted by start offset and never overlap.
    fn find_matches(&self, content: &str) -> Vec<ConsoleMatch>;

    /// Rewrites every match and returns the new content with the matches.
    fn apply(&self, content: &str) -> TransformOutcome;
}
