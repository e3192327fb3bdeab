// SPDX-FileCopyrightText: 2023 Jonathan Haigh <jonathanhaigh@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, in `EnvFilter` syntax.
pub const LOG_ENV_VAR: &str = "VALROOT_LOG";

/// Install a global tracing subscriber that writes to stderr.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(default_level: &str) {
    // Only fails if a global subscriber is already set, in which case that one is kept.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(make_filter(default_level))
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init();
}

/// Build the log filter.
///
/// The filter is read from `VALROOT_LOG` and falls back to `default_level` (e.g. `"warn"` or
/// `"valroot=debug"`) when that is unset or invalid.
pub fn make_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_level))
}
