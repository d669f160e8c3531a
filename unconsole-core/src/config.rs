//! Configuration types for `unconsole-core`.
//!
//! There is no configuration file. `TransformConfig` is the in-process
//! description of which console methods a transform targets and how deeply
//! nested an argument list the remover will follow.
//!
//! License: MIT OR Apache-2.0

use log::debug;
use std::fmt;

use crate::errors::UnconsoleError;

/// Maximum depth accepted for `NestingDepth::Bounded`.
///
/// The bounded remover pattern nests one group per level, so its size grows
/// with the depth.
pub const MAX_NESTING_DEPTH: usize = 8;

/// One of the recognized diagnostic-output methods on `console`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ConsoleMethod {
    Log,
    Info,
    Warn,
    Error,
}

impl ConsoleMethod {
    /// All recognized methods, in pattern order.
    pub const ALL: [ConsoleMethod; 4] = [
        ConsoleMethod::Log,
        ConsoleMethod::Info,
        ConsoleMethod::Warn,
        ConsoleMethod::Error,
    ];

    /// The method name as written in source code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMethod::Log => "log",
            ConsoleMethod::Info => "info",
            ConsoleMethod::Warn => "warn",
            ConsoleMethod::Error => "error",
        }
    }

    /// Looks up a method by its source name. Only the four recognized names match.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == name)
    }
}

impl fmt::Display for ConsoleMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "console.{}", self.as_str())
    }
}

/// How deeply nested parentheses inside a call's argument list may be
/// before the remover stops recognizing the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NestingDepth {
    /// Tolerate up to `n` levels of balanced `(...)` groups. A call nested
    /// deeper is not matched and stays in the text.
    Bounded(usize),
    /// Follow any depth with an explicit bracket counter.
    Unbounded,
}

impl Default for NestingDepth {
    fn default() -> Self {
        NestingDepth::Bounded(1)
    }
}

impl fmt::Display for NestingDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NestingDepth::Bounded(n) => write!(f, "bounded({})", n),
            NestingDepth::Unbounded => write!(f, "unbounded"),
        }
    }
}

/// Settings shared by the commenter and the remover.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransformConfig {
    /// Methods to match. Order does not affect matching.
    pub methods: Vec<ConsoleMethod>,
    /// Nesting policy. Only the remover reads it; the commenter never
    /// matches nested parentheses.
    pub nesting: NestingDepth,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            methods: ConsoleMethod::ALL.to_vec(),
            nesting: NestingDepth::default(),
        }
    }
}

impl TransformConfig {
    /// Returns the default config with a different nesting policy.
    pub fn with_nesting(nesting: NestingDepth) -> Self {
        Self {
            nesting,
            ..Self::default()
        }
    }

    /// Checks the config and returns a normalized copy: methods sorted in
    /// pattern order with duplicates removed.
    pub fn validated(&self) -> Result<TransformConfig, UnconsoleError> {
        if self.methods.is_empty() {
            return Err(UnconsoleError::NoMethodsSelected);
        }
        if let NestingDepth::Bounded(n) = self.nesting {
            if n > MAX_NESTING_DEPTH {
                return Err(UnconsoleError::NestingDepthExceeded(n, MAX_NESTING_DEPTH));
            }
        }

        let mut methods = self.methods.clone();
        methods.sort();
        methods.dedup();
        debug!(
            "Validated transform config: methods={:?}, nesting={}",
            methods, self.nesting
        );
        Ok(TransformConfig {
            methods,
            nesting: self.nesting,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        let names: Vec<&str> = ConsoleMethod::ALL.iter().map(|m| m.as_str()).collect();
        assert_eq!(names, vec!["log", "info", "warn", "error"]);
        assert_eq!(ConsoleMethod::Warn.to_string(), "console.warn");
    }

    #[test]
    fn test_from_name_rejects_other_methods() {
        assert_eq!(ConsoleMethod::from_name("error"), Some(ConsoleMethod::Error));
        assert_eq!(ConsoleMethod::from_name("debug"), None);
        assert_eq!(ConsoleMethod::from_name("LOG"), None);
    }

    #[test]
    fn test_default_config() {
        let config = TransformConfig::default();
        assert_eq!(config.methods.len(), 4);
        assert_eq!(config.nesting, NestingDepth::Bounded(1));
    }

    #[test]
    fn test_validated_dedupes_and_sorts() {
        let config = TransformConfig {
            methods: vec![ConsoleMethod::Error, ConsoleMethod::Log, ConsoleMethod::Error],
            nesting: NestingDepth::Unbounded,
        };
        let validated = config.validated().unwrap();
        assert_eq!(validated.methods, vec![ConsoleMethod::Log, ConsoleMethod::Error]);
    }

    #[test]
    fn test_validated_rejects_empty_methods() {
        let config = TransformConfig {
            methods: vec![],
            nesting: NestingDepth::default(),
        };
        assert!(matches!(config.validated(), Err(UnconsoleError::NoMethodsSelected)));
    }

    #[test]
    fn test_validated_rejects_excessive_depth() {
        let config = TransformConfig::with_nesting(NestingDepth::Bounded(MAX_NESTING_DEPTH + 1));
        assert!(matches!(
            config.validated(),
            Err(UnconsoleError::NestingDepthExceeded(9, 8))
        ));
    }
}
