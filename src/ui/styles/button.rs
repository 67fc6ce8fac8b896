// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette::WHITE, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Filled brand button (main call to action).
pub fn primary(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered => Color {
                a: 0.85,
                ..scheme.brand
            },
            button::Status::Disabled => scheme.muted,
            button::Status::Active | button::Status::Pressed => scheme.brand,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            shadow: if matches!(status, button::Status::Hovered) {
                shadow::MD
            } else {
                shadow::SM
            },
            snap: true,
        }
    }
}

/// Bordered secondary button.
pub fn outline(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let (background, border_color) = match status {
            button::Status::Hovered => (scheme.muted, scheme.brand),
            _ => (scheme.card, scheme.border),
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: scheme.text_primary,
            border: Border {
                color: border_color,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Borderless text link in the brand color.
pub fn link(scheme: ColorScheme) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = match status {
            button::Status::Hovered | button::Status::Pressed => scheme.text_primary,
            _ => scheme.brand,
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Toggle group button; `selected` marks the active choice.
pub fn toggle(
    scheme: ColorScheme,
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        if selected {
            primary(scheme.clone())(theme, status)
        } else {
            outline(scheme.clone())(theme, status)
        }
    }
}
