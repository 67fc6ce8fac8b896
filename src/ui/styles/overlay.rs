// SPDX-License-Identifier: MPL-2.0
//! Loading overlay styles.
//!
//! Both layers of the preview frame take an opacity in `[0, 1]` computed by
//! the load sequencer, which is how the fade is rendered.

use crate::ui::design_tokens::opacity;
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Color, Theme};

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Backdrop of the loading overlay at the given opacity.
pub fn loading(scheme: ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::OVERLAY_STRONG,
                ..scheme.muted
            },
            alpha,
        ))),
        text_color: Some(faded(scheme.text_muted, alpha)),
        ..Default::default()
    }
}

/// Surface layer beneath the overlay at the given opacity.
pub fn surface(scheme: ColorScheme, alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card)),
        text_color: Some(faded(scheme.text_primary, alpha)),
        ..Default::default()
    }
}

/// Spinner stroke color at the given opacity.
#[must_use]
pub fn spinner_color(scheme: &ColorScheme, alpha: f32) -> Color {
    faded(scheme.brand, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_backdrop_fades_with_alpha() {
        let scheme = ColorScheme::dark();
        let full = loading(scheme.clone(), 1.0)(&Theme::Dark);
        let half = loading(scheme, 0.5)(&Theme::Dark);

        let (Some(Background::Color(full)), Some(Background::Color(half))) =
            (full.background, half.background)
        else {
            panic!("Expected background colors");
        };
        assert!((full.a - opacity::OVERLAY_STRONG).abs() < f32::EPSILON);
        assert!((half.a - opacity::OVERLAY_STRONG / 2.0).abs() < 1e-6);
    }

    #[test]
    fn alpha_is_clamped() {
        let scheme = ColorScheme::light();
        assert_eq!(spinner_color(&scheme, 3.0).a, scheme.brand.a);
        assert_eq!(spinner_color(&scheme, -1.0).a, 0.0);
    }
}
