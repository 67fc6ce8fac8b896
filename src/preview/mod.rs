// SPDX-License-Identifier: MPL-2.0
//! Preview domain, independent of any widget toolkit.
//!
//! - [`registry`] - Component identifier → locator table
//! - [`url`] - Preview address construction
//! - [`theme`] - Effective preview theme
//! - [`sequencer`] - Loading overlay state machine
//! - [`timings`] - Clamped overlay timings
//! - [`surface`] - Desktop navigation of the preview address

pub mod registry;
pub mod sequencer;
pub mod surface;
pub mod theme;
pub mod timings;
pub mod url;

pub use registry::{ComponentRegistry, Locator, LocatorKind};
pub use sequencer::{CycleId, Effect, LoadSequencer, Phase, SurfaceSignal, Timer};
pub use theme::{AmbientTheme, PreviewTheme, ThemePreference};
pub use timings::Timings;
pub use self::url::{Endpoints, PreviewUrl};
