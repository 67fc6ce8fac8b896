// SPDX-License-Identifier: MPL-2.0
//! Timing newtypes for the loading overlay.
//!
//! Each wrapper clamps its value to a sane range so a hand-edited
//! `settings.toml` cannot produce an overlay that never shows or never
//! leaves.

use std::time::Duration;

/// Default minimum time the overlay stays up, in milliseconds.
pub const DEFAULT_MIN_DISPLAY_MS: u64 = 800;
/// Default fade-out duration, in milliseconds.
pub const DEFAULT_FADE_MS: u64 = 300;
/// Default wait before the overlay is dismissed without any signal, in milliseconds.
pub const DEFAULT_MAX_WAIT_MS: u64 = 3000;

pub const MIN_MIN_DISPLAY_MS: u64 = 0;
pub const MAX_MIN_DISPLAY_MS: u64 = 5_000;
pub const MIN_FADE_MS: u64 = 0;
pub const MAX_FADE_MS: u64 = 2_000;
pub const MIN_MAX_WAIT_MS: u64 = 500;
pub const MAX_MAX_WAIT_MS: u64 = 60_000;

macro_rules! millis_newtype {
    ($(#[$meta:meta])* $name:ident, $min:expr, $max:expr, $default:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(u64);

        impl $name {
            /// Creates a new value, clamping to the valid range.
            #[must_use]
            pub fn new(millis: u64) -> Self {
                Self(millis.clamp($min, $max))
            }

            /// Returns the value in milliseconds.
            #[must_use]
            pub fn millis(self) -> u64 {
                self.0
            }

            #[must_use]
            pub fn as_duration(self) -> Duration {
                Duration::from_millis(self.0)
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self($default)
            }
        }
    };
}

millis_newtype!(
    /// Minimum time the loading overlay stays visible (0–5000 ms).
    MinDisplayTime,
    MIN_MIN_DISPLAY_MS,
    MAX_MIN_DISPLAY_MS,
    DEFAULT_MIN_DISPLAY_MS
);

millis_newtype!(
    /// Duration of the overlay fade-out (0–2000 ms).
    FadeDuration,
    MIN_FADE_MS,
    MAX_FADE_MS,
    DEFAULT_FADE_MS
);

millis_newtype!(
    /// Longest wait for a surface signal before the overlay is dismissed anyway (500–60000 ms).
    MaxWaitTime,
    MIN_MAX_WAIT_MS,
    MAX_MAX_WAIT_MS,
    DEFAULT_MAX_WAIT_MS
);

/// Timing contract of the load sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timings {
    pub min_display: MinDisplayTime,
    pub fade: FadeDuration,
    pub max_wait: MaxWaitTime,
}

impl Timings {
    /// Builds timings from raw millisecond values.
    ///
    /// The maximum wait is raised to the minimum display time when it would
    /// otherwise fire first.
    #[must_use]
    pub fn from_millis(min_display_ms: u64, fade_ms: u64, max_wait_ms: u64) -> Self {
        let min_display = MinDisplayTime::new(min_display_ms);
        let max_wait = MaxWaitTime::new(max_wait_ms.max(min_display.millis()));
        Self {
            min_display,
            fade: FadeDuration::new(fade_ms),
            max_wait,
        }
    }
}
