// SPDX-License-Identifier: MPL-2.0
//! Logging setup using `tracing` and `tracing-subscriber`.
//!
//! # Log Levels
//!
//! - `warn`: Unreadable settings or translation files
//! - `info`: Startup summary
//! - `debug`: Preview cycles, surface signals and overlay timers
//! - `trace`: Callbacks discarded because their cycle is over
//!
//! `RUST_LOG` takes precedence over the `--log-level` argument.

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default level when neither `RUST_LOG` nor `--log-level` is given.
pub const DEFAULT_LEVEL: Level = Level::INFO;

/// Parses a `--log-level` value (`error`, `warn`, `info`, `debug`, `trace`).
#[must_use]
pub fn parse_level(raw: &str) -> Option<Level> {
    raw.trim().parse().ok()
}

/// Builds the filter, preferring `RUST_LOG` when it is set and valid.
#[must_use]
pub fn build_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{}={level},warn",
            env!("CARGO_CRATE_NAME")
        ))
    })
}

/// Installs the global subscriber.
///
/// Returns `false` when a subscriber was already installed (e.g. by a test
/// harness); logging then goes to that subscriber.
pub fn init(level: Level) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(fmt::layer().with_target(false).compact())
        .try_init()
        .is_ok()
}
