// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Theme};

/// Outer card holding the header and the preview frame.
pub fn card(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.card)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Header bar above the preview.
pub fn header(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.muted)),
        text_color: Some(scheme.text_primary),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// "Flutter" pill next to the panel title.
pub fn badge(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.brand_tint)),
        text_color: Some(scheme.brand),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Round icon holder on the setup panel.
pub fn icon_circle(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.brand_tint)),
        text_color: Some(scheme.brand),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Dashed-looking placeholder frame for unregistered components.
pub fn setup_panel(scheme: ColorScheme) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(scheme.muted)),
        text_color: Some(scheme.text_primary),
        border: Border {
            color: scheme.border,
            width: border::WIDTH_MD,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_uses_scheme_colors() {
        let scheme = ColorScheme::light();
        let style = card(scheme.clone())(&Theme::Dark);
        assert_eq!(style.background, Some(Background::Color(scheme.card)));
        assert_eq!(style.border.color, scheme.border);
    }

    #[test]
    fn badge_is_tinted_with_brand() {
        let scheme = ColorScheme::dark();
        let style = badge(scheme.clone())(&Theme::Light);
        assert_eq!(style.text_color, Some(scheme.brand));
        assert_eq!(style.background, Some(Background::Color(scheme.brand_tint)));
    }
}
