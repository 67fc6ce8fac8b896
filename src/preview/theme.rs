// SPDX-License-Identifier: MPL-2.0
//! Effective preview theme derived from the host theme provider.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Binary theme handed to the embedded preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviewTheme {
    Light,
    #[default]
    Dark,
}

impl PreviewTheme {
    /// Query parameter value understood by the preview sandbox.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewTheme::Light => "light",
            PreviewTheme::Dark => "dark",
        }
    }
}

impl fmt::Display for PreviewTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme preference stored by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    /// Returns the theme named by an explicit preference, `None` for `System`.
    #[must_use]
    pub fn explicit(self) -> Option<PreviewTheme> {
        match self {
            ThemePreference::Light => Some(PreviewTheme::Light),
            ThemePreference::Dark => Some(PreviewTheme::Dark),
            ThemePreference::System => None,
        }
    }
}

/// Read-only snapshot of the host theme provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AmbientTheme {
    /// What the user asked for.
    pub preference: ThemePreference,
    /// What the provider resolved it to, if it could.
    pub resolved: Option<PreviewTheme>,
}

impl AmbientTheme {
    #[must_use]
    pub fn new(preference: ThemePreference, resolved: Option<PreviewTheme>) -> Self {
        Self {
            preference,
            resolved,
        }
    }

    /// Snapshot whose resolution is exactly the explicit preference.
    #[must_use]
    pub fn from_preference(preference: ThemePreference) -> Self {
        Self::new(preference, preference.explicit())
    }
}

/// Computes the theme used for the preview on this render.
///
/// Before the component is mounted the answer is always dark, so the first
/// frame never flashes a theme the provider has not confirmed yet.
#[must_use]
pub fn resolve(ambient: &AmbientTheme, mounted: bool) -> PreviewTheme {
    if !mounted {
        return PreviewTheme::Dark;
    }
    ambient
        .resolved
        .or_else(|| ambient.preference.explicit())
        .unwrap_or(PreviewTheme::Dark)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unmounted_is_always_dark() {
        let ambient = AmbientTheme::new(ThemePreference::Light, Some(PreviewTheme::Light));
        assert_eq!(resolve(&ambient, false), PreviewTheme::Dark);
    }

    #[test]
    fn mounted_prefers_resolved_theme() {
        let ambient = AmbientTheme::new(ThemePreference::Dark, Some(PreviewTheme::Light));
        assert_eq!(resolve(&ambient, true), PreviewTheme::Light);
    }

    #[test]
    fn mounted_falls_back_to_preference() {
        let ambient = AmbientTheme::new(ThemePreference::Light, None);
        assert_eq!(resolve(&ambient, true), PreviewTheme::Light);
    }

    #[test]
    fn system_without_resolution_defaults_to_dark() {
        let ambient = AmbientTheme::new(ThemePreference::System, None);
        assert_eq!(resolve(&ambient, true), PreviewTheme::Dark);
    }

    #[test]
    fn display_matches_query_value() {
        assert_eq!(PreviewTheme::Light.to_string(), "light");
        assert_eq!(PreviewTheme::Dark.to_string(), "dark");
    }
}
