// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Logging initialization.
//!
//! Logs go to stderr so they never mix with command output. `RUST_LOG`
//! overrides the level chosen here.

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install the global subscriber: `warn` by default, `debug` when verbose.
///
/// Later calls are no-ops.
pub fn init_subscriber(verbose: bool) {
    INIT.call_once(|| {
        let level = if verbose { "debug" } else { "warn" };
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

        fmt()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
        tracing::debug!(verbose, "logging initialized");
    });
}
