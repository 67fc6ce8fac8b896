// SPDX-License-Identifier: MPL-2.0
//! Preview frame: the surface with the loading overlay stacked on top.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::preview::{LoadSequencer, PreviewUrl};
use crate::ui::design_tokens::{border, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, Column, Container, Stack, Text};
use iced::{alignment, Border, Element, Length, Theme};
use std::time::Instant;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub scheme: ColorScheme,
    pub component_id: &'a str,
    pub preview: &'a PreviewUrl,
    /// Navigable form of `preview`, when it has one.
    pub target: Option<String>,
    pub sequencer: &'a LoadSequencer,
    pub now: Instant,
    pub spinner_rotation: f32,
    pub height: u32,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    #[allow(clippy::cast_precision_loss)]
    // heights are clamped to 2000
    let height = ctx.height as f32;

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(surface_layer(&ctx));

    if ctx.sequencer.show_overlay() {
        stack = stack.push(loading_overlay(&ctx));
    }

    let scheme = ctx.scheme;
    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .clip(true)
        .style(move |_theme: &Theme| iced::widget::container::Style {
            background: Some(scheme.card.into()),
            border: Border {
                color: scheme.border,
                width: border::WIDTH_SM,
                radius: radius::LG.into(),
            },
            ..Default::default()
        })
        .into()
}

/// Stand-in for the embedded document: what is shown, and a way to open it.
fn surface_layer<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let alpha = ctx.sequencer.surface_opacity(ctx.now);
    let mut content = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .max_width(sizing::SETUP_TEXT_WIDTH);

    if ctx.sequencer.surface_visible() {
        content = content
            .push(
                Text::new(
                    ctx.i18n
                        .tr_with_args("preview-frame-title", &[("component", ctx.component_id)]),
                )
                .size(typography::BODY),
            )
            .push(Text::new(ctx.i18n.tr("preview-surface-ready")).size(typography::CAPTION))
            .push(
                Text::new(ctx.preview.source())
                    .size(typography::CAPTION)
                    .color(ctx.scheme.text_muted),
            );

        let open = button(Text::new(ctx.i18n.tr("preview-surface-open")).size(typography::CAPTION))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::outline(ctx.scheme.clone()));
        content = content.push(match &ctx.target {
            Some(target) => open.on_press(Message::OpenLink(target.clone())),
            None => open,
        });
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::surface(ctx.scheme.clone(), alpha))
        .into()
}

fn loading_overlay<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let alpha = ctx.sequencer.overlay_opacity(ctx.now);

    let spinner = AnimatedSpinner::new(
        styles::overlay::spinner_color(&ctx.scheme, alpha),
        ctx.spinner_rotation,
    )
    .size(sizing::ICON_LG)
    .into_element();

    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(spinner)
        .push(Text::new(ctx.i18n.tr("preview-loading")).size(typography::BODY));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::overlay::loading(ctx.scheme.clone(), alpha))
        .into()
}
