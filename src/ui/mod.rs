// SPDX-License-Identifier: MPL-2.0
//! User interface components and styling.
//!
//! Components follow the Elm-style "state down, messages up" pattern.
//!
//! - [`preview`] - Flutter component preview panel
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, overlay)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Color schemes and OS theme detection

pub mod design_tokens;
pub mod preview;
pub mod styles;
pub mod theming;
pub mod widgets;
