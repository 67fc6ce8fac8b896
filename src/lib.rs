// SPDX-License-Identifier: MPL-2.0
//! `flutter_preview` embeds a live preview of a Flutter UI component next to
//! its documentation.
//!
//! A component identifier is looked up in a registry, turned into a themed
//! preview address and loaded behind an overlay that stays up long enough
//! to avoid flicker and never longer than a bounded wait.
//!
//! - [`preview`] - Toolkit-independent domain (registry, addresses, theme, load sequencing)
//! - [`ui`] - Iced rendering of the preview panel
//! - [`app`] - Host application, configuration and paths
//! - [`i18n`] - Fluent localization

#![doc(html_root_url = "https://docs.rs/flutter_preview/0.1.0")]

pub mod app;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod preview;
pub mod ui;
