// SPDX-License-Identifier: MPL-2.0
//! Setup panel shown for components without a registered preview.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub description: Option<&'a str>,
    pub examples_link: Option<String>,
    pub sandbox_link: String,
    pub height: u32,
}

/// One button of the setup panel.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SetupAction {
    label_key: &'static str,
    link: String,
    primary: bool,
}

/// Code examples lead when documentation is configured; the sandbox is
/// always offered.
fn setup_actions(examples_link: Option<String>, sandbox_link: String) -> Vec<SetupAction> {
    let mut actions = Vec::with_capacity(2);
    if let Some(link) = examples_link {
        actions.push(SetupAction {
            label_key: "preview-setup-view-examples",
            link,
            primary: true,
        });
    }
    actions.push(SetupAction {
        label_key: "preview-setup-try-sandbox",
        link: sandbox_link,
        primary: false,
    });
    actions
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let scheme = ctx.scheme;

    // Flutter logo stand-in
    let icon = container(Text::new("</>").size(typography::TITLE_SM))
        .width(Length::Fixed(sizing::ICON_XL))
        .height(Length::Fixed(sizing::ICON_XL))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::icon_circle(scheme.clone()));

    let title = Text::new(ctx.i18n.tr("preview-setup-title"))
        .size(typography::TITLE_SM)
        .color(scheme.text_primary);

    let description = Text::new(
        ctx.description
            .map_or_else(|| ctx.i18n.tr("preview-setup-default-description"), str::to_string),
    )
    .size(typography::BODY)
    .color(scheme.text_muted)
    .align_x(alignment::Horizontal::Center);

    let mut actions = Row::new().spacing(spacing::SM);
    for action in setup_actions(ctx.examples_link, ctx.sandbox_link) {
        let label = Text::new(ctx.i18n.tr(action.label_key)).size(typography::BODY);
        let action_button = button(label)
            .padding([spacing::XS, spacing::MD])
            .on_press(Message::OpenLink(action.link));
        let action_button = if action.primary {
            action_button.style(styles::button::primary(scheme.clone()))
        } else {
            action_button.style(styles::button::outline(scheme.clone()))
        };
        actions = actions.push(action_button);
    }

    let content = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::SETUP_TEXT_WIDTH)
        .push(icon)
        .push(title)
        .push(description)
        .push(actions);

    #[allow(clippy::cast_precision_loss)]
    let height = ctx.height as f32;

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(spacing::XL)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::setup_panel(scheme))
        .into()
}
