// clipboard-privacy/src/logger.rs
//! Logger setup for the binary.

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Default filter when neither `RUST_LOG` nor a command-line override is set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Initialises `env_logger` on stderr.
///
/// `level` overrides `RUST_LOG` when given. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or(DEFAULT_LOG_FILTER));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.target(Target::Stderr).format_timestamp(None);
    let _ = builder.try_init();
}
