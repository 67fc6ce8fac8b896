// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the preview panel.
//!
//! Style functions close over a [`ColorScheme`](crate::ui::theming::ColorScheme)
//! rather than reading the Iced `Theme`, so the panel follows the resolved
//! preview theme even when embedded in a host with its own theme.

pub mod button;
pub mod container;
pub mod overlay;
