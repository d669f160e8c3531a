// unconsole-core/src/engines/commenter.rs
//! A `ConsoleTransform` that comments out single-line console statements.
//!
//! Only a line that is exactly one call (after its indentation) is touched.
//! Calls spanning several lines, calls with `)` inside their arguments and
//! lines carrying any trailing code are left as they are.
//! License: MIT OR APACHE 2.0

use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;

use crate::config::{ConsoleMethod, TransformConfig};
use crate::console_match::{splice_matches, ConsoleMatch, LineIndex, TransformOutcome};
use crate::engine::ConsoleTransform;
use crate::patterns::compiler::{get_or_compile, PatternKind, METHOD_GROUP};

/// Marker inserted between a line's indentation and the call.
pub const COMMENT_MARKER: &str = "// ";

#[derive(Debug, Clone)]
pub struct LineCommenter {
    regex: Regex,
}

impl LineCommenter {
    /// Builds a commenter for all four console methods.
    pub fn new() -> Result<Self> {
        Self::with_config(TransformConfig::default())
    }

    pub fn with_config(config: TransformConfig) -> Result<Self> {
        let config = config.validated()?;
        let regex = get_or_compile(PatternKind::Commenter, &config.methods)
            .context("Failed to compile pattern for LineCommenter")?;
        Ok(Self { regex })
    }
}

impl ConsoleTransform for LineCommenter {
    fn name(&self) -> &'static str {
        "commenter"
    }

    fn find_matches(&self, content: &str) -> Vec<ConsoleMatch> {
        let lines = LineIndex::new(content);
        let mut matches = Vec::new();

        for caps in self.regex.captures_iter(content) {
            let (Some(indent), Some(call), Some(name)) =
                (caps.name("indent"), caps.name("call"), caps.name(METHOD_GROUP))
            else {
                continue;
            };
            let Some(method) = ConsoleMethod::from_name(name.as_str()) else {
                continue;
            };
            debug!("Commenter matched {} at line {}", method, lines.line_of(call.start()));
            matches.push(ConsoleMatch {
                method,
                start: indent.start(),
                end: call.end(),
                line_number: lines.line_of(call.start()),
                original: format!("{}{}", indent.as_str(), call.as_str()),
                replacement: format!("{}{}{}", indent.as_str(), COMMENT_MARKER, call.as_str()),
            });
        }
        matches
    }

    fn apply(&self, content: &str) -> TransformOutcome {
        let matches = self.find_matches(content);
        info!("Commenter rewrote {} console statement(s).", matches.len());
        TransformOutcome {
            content: splice_matches(content, &matches),
            matches,
        }
    }
}
