// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::preview::{PreviewTheme, ThemePreference};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::preview;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, scrollable, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub preference: ThemePreference,
    pub theme: PreviewTheme,
    pub warnings: &'a [String],
    pub preview: &'a preview::State,
}

/// Renders the theme toolbar, pending warnings and the preview.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = ColorScheme::for_theme(ctx.theme);

    let mut column = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .push(theme_toolbar(ctx.i18n, ctx.preference, &scheme));

    for (index, key) in ctx.warnings.iter().enumerate() {
        column = column.push(warning_banner(ctx.i18n, index, key, &scheme));
    }

    column = column.push(ctx.preview.view(ctx.i18n).map(Message::Preview));

    Container::new(scrollable(column))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn theme_toolbar<'a>(
    i18n: &'a I18n,
    current: ThemePreference,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let choices = [
        (ThemePreference::Light, "theme-light"),
        (ThemePreference::Dark, "theme-dark"),
        (ThemePreference::System, "theme-system"),
    ];

    let mut row = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(Space::new().width(Length::Fill))
        .push(Text::new(i18n.tr("theme-label")).size(typography::CAPTION));

    for (preference, key) in choices {
        row = row.push(
            button(Text::new(i18n.tr(key)).size(typography::CAPTION))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::toggle(scheme.clone(), preference == current))
                .on_press(Message::ThemeSelected(preference)),
        );
    }

    row.into()
}

fn warning_banner<'a>(
    i18n: &'a I18n,
    index: usize,
    key: &'a str,
    scheme: &ColorScheme,
) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(i18n.tr(key)).size(typography::CAPTION))
        .push(Space::new().width(Length::Fill))
        .push(
            button(Text::new("×").size(typography::BODY))
                .padding([0.0, spacing::XS])
                .style(styles::button::link(scheme.clone()))
                .on_press(Message::DismissWarning(index)),
        );

    Container::new(row)
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::container::header(scheme.clone()))
        .into()
}
