// pluck/src/logger.rs
//! Logger initialization for the pluck CLI.
//!
//! Wraps `env_logger` so that main and the integration tests share one
//! idempotent entry point. An explicit level overrides `RUST_LOG`.

use log::LevelFilter;
use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger once. Subsequent calls are no-ops.
pub fn init_logger(level: Option<LevelFilter>) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::from_default_env();
        if let Some(level) = level {
            builder.filter_level(level);
        }
        builder.format_timestamp(None);
        // Another logger may already be installed (e.g. by a test harness).
        let _ = builder.try_init();
    });
}
