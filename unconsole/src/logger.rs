// unconsole/src/logger.rs
//! Logger setup shared by both executables.
//!
//! Logs go to stderr so stdout only carries the confirmation line.

use env_logger::{Builder, Env, Target};

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "warn";

/// Initializes `env_logger` once for the process.
///
/// `RUST_LOG` wins over the default filter. Repeated calls are ignored.
pub fn init_logger() {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stderr)
        .format_timestamp(None)
        .try_init()
        .ok();
}
