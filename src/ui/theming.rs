// SPDX-License-Identifier: MPL-2.0
//! Color schemes and the bridge to the operating system theme.
//!
//! This is the single place that reads ambient theme state (via
//! `dark-light`). Everything below the application root receives an
//! explicit [`AmbientTheme`] snapshot instead.

use crate::preview::{AmbientTheme, PreviewTheme, ThemePreference};
use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};

/// Color palette for the preview panel.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    // Surfaces
    pub card: Color,
    pub muted: Color,
    pub border: Color,

    // Text
    pub text_primary: Color,
    pub text_muted: Color,

    // Brand
    pub brand: Color,
    pub brand_tint: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            card: palette::WHITE,
            muted: palette::GRAY_100,
            border: palette::GRAY_200,

            text_primary: palette::GRAY_950,
            text_muted: palette::GRAY_400,

            brand: palette::FLUTTER_500,
            brand_tint: Color {
                a: opacity::TINT,
                ..palette::FLUTTER_500
            },
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            card: palette::GRAY_950,
            muted: palette::GRAY_800,
            border: palette::GRAY_800,

            text_primary: palette::GRAY_100,
            text_muted: palette::GRAY_400,

            brand: palette::FLUTTER_400,
            brand_tint: Color {
                a: opacity::TINT,
                ..palette::FLUTTER_400
            },
        }
    }

    #[must_use]
    pub fn for_theme(theme: PreviewTheme) -> Self {
        match theme {
            PreviewTheme::Light => Self::light(),
            PreviewTheme::Dark => Self::dark(),
        }
    }
}

/// Detects the operating system theme, `None` when detection fails.
#[must_use]
pub fn detect_system_theme() -> Option<PreviewTheme> {
    match dark_light::detect() {
        Ok(dark_light::Mode::Light) => Some(PreviewTheme::Light),
        Ok(dark_light::Mode::Dark) => Some(PreviewTheme::Dark),
        Ok(dark_light::Mode::Unspecified) | Err(_) => None,
    }
}

/// Builds the theme provider snapshot for `preference`.
///
/// `system` is what the OS reported for a `System` preference; it is ignored
/// for explicit preferences.
#[must_use]
pub fn ambient(preference: ThemePreference, system: Option<PreviewTheme>) -> AmbientTheme {
    match preference {
        ThemePreference::System => AmbientTheme::new(preference, system),
        explicit => AmbientTheme::from_preference(explicit),
    }
}

/// Iced theme for the host window.
#[must_use]
pub fn iced_theme(theme: PreviewTheme) -> Theme {
    match theme {
        PreviewTheme::Light => Theme::Light,
        PreviewTheme::Dark => Theme::Dark,
    }
}
