// unconsole-core/src/console_match.rs
//! Data structures describing what a transformation matched and rewrote.

use log::debug;

use crate::config::ConsoleMethod;

/// A single match span found by a transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleMatch {
    pub method: ConsoleMethod,
    /// Byte offset of the first matched byte in the input.
    pub start: usize,
    /// Byte offset one past the last matched byte in the input.
    pub end: usize,
    /// 1-based line of `start`.
    pub line_number: usize,
    pub original: String,
    pub replacement: String,
}

impl ConsoleMatch {
    /// Number of lines the match covers.
    pub fn line_span(&self) -> usize {
        self.original.matches('\n').count() + 1
    }
}

/// The result of applying a transformation to one buffer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransformOutcome {
    pub content: String,
    pub matches: Vec<ConsoleMatch>,
}

impl TransformOutcome {
    pub fn changed(&self) -> bool {
        !self.matches.is_empty()
    }

    /// Match counts per method, in pattern order, omitting methods with no matches.
    pub fn counts_by_method(&self) -> Vec<(ConsoleMethod, usize)> {
        ConsoleMethod::ALL
            .into_iter()
            .map(|method| {
                let n = self.matches.iter().filter(|m| m.method == method).count();
                (method, n)
            })
            .filter(|(_, n)| *n > 0)
            .collect()
    }
}

/// Computes 1-based line numbers for byte offsets of a single buffer.
#[derive(Debug)]
pub(crate) struct LineIndex {
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub(crate) fn new(content: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(content.match_indices('\n').map(|(i, _)| i + 1));
        Self { line_starts }
    }

    pub(crate) fn line_of(&self, offset: usize) -> usize {
        match self.line_starts.binary_search(&offset) {
            Ok(i) => i + 1,
            Err(i) => i,
        }
    }
}

/// Replaces every match span in `content` with its replacement text.
///
/// `matches` must be sorted by `start` and non-overlapping.
pub(crate) fn splice_matches(content: &str, matches: &[ConsoleMatch]) -> String {
    let mut out = String::with_capacity(content.len());
    let mut last_end = 0usize;
    for m in matches {
        out.push_str(&content[last_end..m.start]);
        out.push_str(&m.replacement);
        last_end = m.end;
        debug!(
            "Rewrote {} at line {} ({} line(s))",
            m.method,
            m.line_number,
            m.line_span()
        );
    }
    out.push_str(&content[last_end..]);
    out
}
