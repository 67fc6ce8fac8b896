// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Panel**: Preview frame height bounds
//! - **Overlay**: Loading overlay timings
//! - **Endpoints**: Sandbox and local preview hosts

// ==========================================================================
// Panel Defaults
// ==========================================================================

/// Default height of the preview frame in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 600;

/// Minimum preview frame height in pixels.
pub const MIN_PREVIEW_HEIGHT: u32 = 200;

/// Maximum preview frame height in pixels.
pub const MAX_PREVIEW_HEIGHT: u32 = 2000;

// ==========================================================================
// Overlay Defaults
// ==========================================================================

pub use crate::preview::timings::{
    DEFAULT_FADE_MS, DEFAULT_MAX_WAIT_MS, DEFAULT_MIN_DISPLAY_MS,
};

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

pub use crate::preview::url::{DEFAULT_LOCAL_ORIGIN, DEFAULT_SANDBOX_BASE};

const _: () = {
    assert!(MIN_PREVIEW_HEIGHT <= DEFAULT_PREVIEW_HEIGHT);
    assert!(DEFAULT_PREVIEW_HEIGHT <= MAX_PREVIEW_HEIGHT);
    assert!(DEFAULT_MIN_DISPLAY_MS <= DEFAULT_MAX_WAIT_MS);
};
