// unconsole-core/src/engines/remover.rs
//! A `ConsoleTransform` that deletes console calls anywhere in the text,
//! including calls whose arguments span several lines.
//!
//! Every `console.<method>(` opener is paired with the `)` that closes it,
//! using a parenthesis table built once per buffer. `NestingDepth` then
//! decides whether the call is removed:
//!
//! * `Bounded(n)` checks the call against a regular expression admitting up
//!   to `n` levels of balanced parentheses in the argument list. A call
//!   nested deeper is left intact, along with everything inside it.
//! * `Unbounded` removes every closed call regardless of depth.
//!
//! Neither strategy understands string literals or comments: a `)` inside a
//! string closes the call like any other.
//!
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use std::collections::HashMap;

use crate::config::{ConsoleMethod, NestingDepth, TransformConfig};
use crate::console_match::{splice_matches, ConsoleMatch, LineIndex, TransformOutcome};
use crate::engine::ConsoleTransform;
use crate::patterns::compiler::{get_or_compile, PatternKind, METHOD_GROUP};

#[derive(Debug, Clone)]
pub struct MultilineRemover {
    /// `console.<method>(`, the start of every candidate call.
    opener: Regex,
    /// Whole-call pattern for `Bounded`; `None` when nesting is unbounded.
    bound: Option<Regex>,
    config: TransformConfig,
}

/// Matching `)` for every `(` in a buffer, built in one pass.
///
/// A `)` with no open `(` before it is ignored, so the pair found for a
/// given `(` is the first `)` after it at which the depth returns to zero.
#[derive(Debug)]
struct ParenPairs {
    closes: HashMap<usize, usize>,
}

impl ParenPairs {
    fn new(content: &str) -> Self {
        let mut closes = HashMap::new();
        let mut open = Vec::new();
        for (offset, byte) in content.bytes().enumerate() {
            match byte {
                b'(' => open.push(offset),
                b')' => {
                    if let Some(start) = open.pop() {
                        closes.insert(start, offset);
                    }
                }
                _ => {}
            }
        }
        Self { closes }
    }

    /// Offset of the `)` closing the `(` at `open`, if the text has one.
    fn close_of(&self, open: usize) -> Option<usize> {
        self.closes.get(&open).copied()
    }
}

impl MultilineRemover {
    /// Builds a remover for all four methods with one level of nesting.
    pub fn new() -> Result<Self> {
        Self::with_config(TransformConfig::default())
    }

    pub fn with_config(config: TransformConfig) -> Result<Self> {
        let config = config.validated()?;
        let opener = get_or_compile(PatternKind::CallOpener, &config.methods)
            .context("Failed to compile call opener for MultilineRemover")?;
        let bound = match config.nesting {
            NestingDepth::Bounded(depth) => Some(
                get_or_compile(PatternKind::BoundedRemover(depth), &config.methods)
                    .context("Failed to compile pattern for MultilineRemover")?,
            ),
            NestingDepth::Unbounded => None,
        };
        Ok(Self { opener, bound, config })
    }

    /// True when the call text `console.x(...)` fits the nesting bound.
    fn within_bound(&self, call: &str) -> bool {
        self.bound.as_ref().map_or(true, |bound| bound.is_match(call))
    }
}

impl ConsoleTransform for MultilineRemover {
    fn name(&self) -> &'static str {
        "remover"
    }

    /// Walks the openers left to right. A call nested deeper than the bound
    /// is skipped as a whole, calls inside it included, so removing one
    /// call never brings an enclosing call within the bound.
    fn find_matches(&self, content: &str) -> Vec<ConsoleMatch> {
        let lines = LineIndex::new(content);
        let pairs = ParenPairs::new(content);
        let mut matches = Vec::new();
        let mut pos = 0usize;

        while let Some(caps) = self.opener.captures_at(content, pos) {
            let Some(open) = caps.get(0) else { break };
            pos = open.end();
            let Some(method) = caps
                .name(METHOD_GROUP)
                .and_then(|m| ConsoleMethod::from_name(m.as_str()))
            else {
                continue;
            };

            let Some(close) = pairs.close_of(open.end() - 1) else {
                debug!(
                    "Unclosed {} at line {}; leaving it in place",
                    method,
                    lines.line_of(open.start())
                );
                continue;
            };

            if !self.within_bound(&content[open.start()..=close]) {
                debug!(
                    "{} at line {} nests deeper than {}; leaving it in place",
                    method,
                    lines.line_of(open.start()),
                    self.config.nesting
                );
                pos = close + 1;
                continue;
            }

            let mut end = close + 1;
            if content[end..].starts_with(';') {
                end += 1;
            }
            matches.push(ConsoleMatch {
                method,
                start: open.start(),
                end,
                line_number: lines.line_of(open.start()),
                original: content[open.start()..end].to_string(),
                replacement: String::new(),
            });
            pos = end;
        }
        matches
    }

    fn apply(&self, content: &str) -> TransformOutcome {
        let matches = self.find_matches(content);
        info!(
            "Remover deleted {} console statement(s) with nesting {}.",
            matches.len(),
            self.config.nesting
        );
        TransformOutcome {
            content: splice_matches(content, &matches),
            matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remover(nesting: NestingDepth) -> MultilineRemover {
        MultilineRemover::with_config(TransformConfig::with_nesting(nesting)).unwrap()
    }

    fn strip(text: &str) -> String {
        MultilineRemover::new().unwrap().apply(text).content
    }

    #[test]
    fn test_paren_pairs() {
        let pairs = ParenPairs::new(")a(b(c)))x(");
        assert_eq!(pairs.close_of(2), Some(7));
        assert_eq!(pairs.close_of(4), Some(6));
        assert_eq!(pairs.close_of(10), None);
    }

    #[test]
    fn test_indented_statement_leaves_indentation() {
        assert_eq!(strip("  console.log(\"hello\");"), "  ");
    }

    #[test]
    fn test_one_level_of_nesting_is_removed() {
        assert_eq!(strip("console.warn(\"x: \" + f(1,2));"), "");
    }

    #[test]
    fn test_multiline_call_is_removed() {
        assert_eq!(strip("console.error(\n  \"a\",\n  \"b\"\n);"), "");
    }

    #[test]
    fn test_calls_inside_a_line_are_removed() {
        assert_eq!(
            strip("if (x) { console.log(x); return x; }"),
            "if (x) {  return x; }"
        );
    }

    #[test]
    fn test_two_levels_untouched_when_bounded_to_one() {
        let input = "console.log(a(b(c)));";
        assert_eq!(strip(input), input);
        assert!(remover(NestingDepth::Bounded(1)).find_matches(input).is_empty());
    }

    #[test]
    fn test_two_levels_removed_with_higher_bound() {
        assert_eq!(remover(NestingDepth::Bounded(2)).apply("console.log(a(b(c)));").content, "");
    }

    #[test]
    fn test_depth_zero_rejects_any_parenthesis() {
        let r = remover(NestingDepth::Bounded(0));
        assert_eq!(r.apply("console.log(f(1));").content, "console.log(f(1));");
        assert_eq!(r.apply("console.log(1);").content, "");
    }

    #[test]
    fn test_unbounded_handles_deep_nesting() {
        let input = "a();\nconsole.log(a(b(c(d(e)))));\nb();";
        assert_eq!(remover(NestingDepth::Unbounded).apply(input).content, "a();\n\nb();");
    }

    #[test]
    fn test_unclosed_call_is_left_in_place() {
        let input = "console.log(x,\n  y";
        assert_eq!(strip(input), input);
        assert_eq!(remover(NestingDepth::Unbounded).apply(input).content, input);
    }

    #[test]
    fn test_parenthesis_in_string_literal_ends_the_call() {
        assert_eq!(strip("console.log(\")\");"), "\");");
        assert_eq!(
            remover(NestingDepth::Unbounded).apply("console.log(\")\");").content,
            "\");"
        );
    }

    #[test]
    fn test_calls_inside_an_over_deep_call_are_kept() {
        let input = "console.log(f(console.log(x)));\n";
        let once = strip(input);
        assert_eq!(once, input);
        assert_eq!(strip(&once), once);
    }

    #[test]
    fn test_call_inside_an_unclosed_call_is_removed() {
        assert_eq!(strip("console.log( console.log(x);"), "console.log( ");
        assert_eq!(
            remover(NestingDepth::Unbounded).apply("console.log( console.log(x);").content,
            "console.log( "
        );
    }

    #[test]
    fn test_many_unclosed_calls() {
        let input = "console.log(\n".repeat(20_000) + "console.warn(1);";
        let output = strip(&input);
        assert_eq!(output, "console.log(\n".repeat(20_000));
    }

    #[test]
    fn test_other_identifiers_are_left_alone() {
        let input = "logger.log('a');\nconsole.debug('b');\nconsole.group('c');";
        assert_eq!(strip(input), input);
        assert_eq!(remover(NestingDepth::Unbounded).apply(input).content, input);
    }

    #[test]
    fn test_strategies_agree_within_bound() {
        let input = "x();\n  console.info({ a: f(1) });\n  console.error(\n    'e',\n    err\n  )\ny();";
        let bounded = remover(NestingDepth::Bounded(1)).apply(input);
        let unbounded = remover(NestingDepth::Unbounded).apply(input);
        assert_eq!(bounded, unbounded);
        assert_eq!(bounded.content, "x();\n  \n  \ny();");
        assert_eq!(bounded.matches.len(), 2);
        assert_eq!(bounded.matches[1].line_number, 3);
        assert_eq!(bounded.matches[1].line_span(), 4);
    }
}
