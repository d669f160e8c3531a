//! compiler.rs - Builds and caches the console-statement patterns.
//!
//! Three pattern shapes exist:
//!
//! * the commenter pattern, anchored to whole lines;
//! * the bounded remover pattern, which nests one balanced-group
//!   alternative per tolerated level of parentheses and must span a whole
//!   call text;
//! * the call opener (`console.<method>(`) the remover scans for.
//!
//! Compiled patterns live in a global cache keyed by shape and method set.
//!
//! License: MIT OR APACHE 2.0

use lazy_static::lazy_static;
use log::debug;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::sync::RwLock;

use crate::config::{ConsoleMethod, MAX_NESTING_DEPTH};
use crate::errors::UnconsoleError;

/// Name of the capture group holding the method name in every pattern.
pub const METHOD_GROUP: &str = "method";

/// The pattern shapes the compiler knows how to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    /// Whole-line single-line call, captured as `indent` and `call`, followed
    /// by `\n`, `\r\n` or the end of the text.
    Commenter,
    /// A complete `console.<method>(...)` text with up to the given depth of
    /// nested parentheses.
    BoundedRemover(usize),
    /// `console.<method>(` only.
    CallOpener,
}

impl PatternKind {
    fn label(&self) -> &'static str {
        match self {
            PatternKind::Commenter => "commenter",
            PatternKind::BoundedRemover(_) => "remover",
            PatternKind::CallOpener => "call opener",
        }
    }
}

lazy_static! {
    static ref PATTERN_CACHE: RwLock<HashMap<(PatternKind, Vec<ConsoleMethod>), Regex>> =
        RwLock::new(HashMap::new());
}

/// `log|info|...` for the given methods.
fn method_alternation(methods: &[ConsoleMethod]) -> String {
    methods
        .iter()
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join("|")
}

/// Argument-list body tolerating `depth` levels of balanced parentheses.
///
/// Depth 0 admits no parentheses at all. Each further level admits either a
/// non-parenthesis character or a parenthesized group of the level below.
pub fn bounded_arguments(depth: usize) -> String {
    let mut body = String::from("[^()]*");
    for _ in 0..depth {
        body = format!(r"(?:[^()]|\({}\))*", body);
    }
    body
}

/// Returns the pattern source for a shape and method set.
pub fn pattern_source(kind: PatternKind, methods: &[ConsoleMethod]) -> String {
    let names = method_alternation(methods);
    match kind {
        PatternKind::Commenter => format!(
            r"^(?P<indent>[\s&&[^\n]]*)(?P<call>console\.(?P<{g}>{names})\([^)\n]*\);?)(?:\r?\n|\z)",
            g = METHOD_GROUP,
            names = names
        ),
        PatternKind::BoundedRemover(depth) => format!(
            r"\Aconsole\.(?P<{g}>{names})\({args}\)\z",
            g = METHOD_GROUP,
            names = names,
            args = bounded_arguments(depth)
        ),
        PatternKind::CallOpener => format!(
            r"console\.(?P<{g}>{names})\(",
            g = METHOD_GROUP,
            names = names
        ),
    }
}

/// Compiles a pattern without consulting the cache.
pub fn compile_pattern(kind: PatternKind, methods: &[ConsoleMethod]) -> Result<Regex, UnconsoleError> {
    if methods.is_empty() {
        return Err(UnconsoleError::NoMethodsSelected);
    }
    if let PatternKind::BoundedRemover(depth) = kind {
        if depth > MAX_NESTING_DEPTH {
            return Err(UnconsoleError::NestingDepthExceeded(depth, MAX_NESTING_DEPTH));
        }
    }

    let source = pattern_source(kind, methods);
    debug!("Compiling {} pattern: {:?}", kind.label(), source);

    RegexBuilder::new(&source)
        .multi_line(kind == PatternKind::Commenter)
        .size_limit(10 * (1 << 20))
        .build()
        .map_err(|e| UnconsoleError::PatternCompilationError(kind.label(), e))
}

/// Gets a compiled pattern from the cache or compiles and stores it.
pub fn get_or_compile(kind: PatternKind, methods: &[ConsoleMethod]) -> Result<Regex, UnconsoleError> {
    let key = (kind, methods.to_vec());

    {
        let cache = PATTERN_CACHE
            .read()
            .map_err(|_| UnconsoleError::Fatal("pattern cache lock poisoned".to_string()))?;
        if let Some(regex) = cache.get(&key) {
            debug!("Serving {} pattern from cache.", kind.label());
            return Ok(regex.clone());
        }
    }

    let regex = compile_pattern(kind, methods)?;
    PATTERN_CACHE
        .write()
        .map_err(|_| UnconsoleError::Fatal("pattern cache lock poisoned".to_string()))?
        .insert(key, regex.clone());
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_arguments_shapes() {
        assert_eq!(bounded_arguments(0), "[^()]*");
        assert_eq!(bounded_arguments(1), r"(?:[^()]|\([^()]*\))*");
        assert_eq!(bounded_arguments(2), r"(?:[^()]|\((?:[^()]|\([^()]*\))*\))*");
    }

    #[test]
    fn test_every_shape_compiles_for_all_methods() {
        for kind in [
            PatternKind::Commenter,
            PatternKind::BoundedRemover(0),
            PatternKind::BoundedRemover(MAX_NESTING_DEPTH),
            PatternKind::CallOpener,
        ] {
            assert!(compile_pattern(kind, &ConsoleMethod::ALL).is_ok(), "{:?}", kind);
        }
    }

    #[test]
    fn test_method_subset() {
        let regex = compile_pattern(PatternKind::CallOpener, &[ConsoleMethod::Warn]).unwrap();
        assert!(regex.is_match("console.warn("));
        assert!(!regex.is_match("console.log("));
    }

    #[test]
    fn test_bounded_remover_spans_whole_call() {
        let regex = compile_pattern(PatternKind::BoundedRemover(1), &ConsoleMethod::ALL).unwrap();
        assert!(regex.is_match("console.log(f(1), \"a\")"));
        assert!(!regex.is_match("console.log(f(g(1)))"));
        assert!(!regex.is_match("x = console.log(1)"));
    }

    #[test]
    fn test_commenter_splits_on_line_feed_only() {
        let regex = compile_pattern(PatternKind::Commenter, &ConsoleMethod::ALL).unwrap();
        assert!(regex.is_match("console.log(1);\r\n"));
        assert!(!regex.is_match("foo();\rconsole.log(1);\n"));
        assert!(!regex.is_match("console.log(1);\r"));
    }

    #[test]
    fn test_rejects_excessive_depth() {
        let result = compile_pattern(PatternKind::BoundedRemover(MAX_NESTING_DEPTH + 1), &ConsoleMethod::ALL);
        assert!(matches!(result, Err(UnconsoleError::NestingDepthExceeded(_, _))));
    }

    #[test]
    fn test_rejects_empty_methods() {
        let result = compile_pattern(PatternKind::Commenter, &[]);
        assert!(matches!(result, Err(UnconsoleError::NoMethodsSelected)));
    }

    #[test]
    fn test_cache_returns_equivalent_pattern() {
        let first = get_or_compile(PatternKind::BoundedRemover(1), &ConsoleMethod::ALL).unwrap();
        let second = get_or_compile(PatternKind::BoundedRemover(1), &ConsoleMethod::ALL).unwrap();
        assert_eq!(first.as_str(), second.as_str());
    }
}
