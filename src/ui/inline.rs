// SPDX-License-Identifier: MPL-2.0
//! Inline comparison box drawn over the list behind the dimming mask.
//!
//! The box is placed at the computed inline layout; its slider bar is
//! centered in the window.

use crate::application::presenter::{BlendControls, InlineView};
use crate::domain::comparison::{blend, LayerPairing};
use crate::domain::screen::ScreenRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography, BACKDROP};
use crate::ui::layers::LayerStack;
use iced::{
    alignment::Vertical,
    widget::{
        button, checkbox, container, opaque, scrollable, slider, text, Column, Container, Row,
        Space, Text,
    },
    Element, Length, Padding, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: &'a InlineView,
    pub record: &'a ScreenRecord,
    pub controls: BlendControls,
    pub slider_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Slid(u8),
    DiffToggled(bool),
    Approve,
    Delete,
    Close,
}

/// Full-window dimming layer behind the box. It absorbs pointer input
/// so the list below stays inert.
#[must_use]
pub fn mask<'a>() -> Element<'a, Message> {
    opaque(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(iced::Background::Color(BACKDROP)),
                ..container::Style::default()
            }),
    )
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let layout = ctx.view.layout;
    let controls = ctx.controls;

    let layers = LayerStack {
        images: &ctx.view.images,
        opacities: controls.layers(LayerPairing::Inline),
        diff_opacity: controls.diff_opacity(),
        diff_size: layout.diff,
    }
    .view(ctx.i18n);

    let image_box = Container::new(layers)
        .width(Length::Fixed(layout.width))
        .height(Length::Fixed(layout.content_height))
        .style(container::bordered_box);

    let title = Text::new(ctx.record.image_name.as_str()).size(typography::BODY_LG);

    let mut actions = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    if ctx.record.has_build_image() {
        actions = actions.push(
            button(text(ctx.i18n.tr("action-approve")).size(typography::BODY_SM))
                .on_press(Message::Approve)
                .style(button::success),
        );
    }
    if ctx.record.has_approved_image() {
        actions = actions.push(
            button(text(ctx.i18n.tr("action-delete")).size(typography::BODY_SM))
                .on_press(Message::Delete)
                .style(button::danger),
        );
    }
    actions = actions.push(
        button(text(ctx.i18n.tr("action-close")).size(typography::BODY_SM))
            .on_press(Message::Close)
            .style(button::secondary),
    );

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(actions);

    let blend_bar = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(
            slider(
                blend::SLIDER_MIN..=blend::SLIDER_MAX,
                controls.slider,
                Message::Slid,
            )
            .width(Length::Fixed(ctx.slider_width)),
        )
        .push(
            checkbox(controls.diff_visible)
                .label(ctx.i18n.tr("show-diff"))
                .on_toggle(Message::DiffToggled),
        );

    let content = Column::new()
        .spacing(spacing::XS)
        .push(header.width(Length::Fixed(layout.width.max(ctx.slider_width))))
        .push(scrollable(image_box).height(Length::Fill));

    let positioned = Container::new(content)
        .padding(Padding {
            top: layout.top,
            left: layout.left,
            ..Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fixed(layout.top + layout.height));

    let slider_bar = Container::new(blend_bar).padding(Padding {
        left: layout.slider_left,
        top: spacing::XS,
        ..Padding::ZERO
    });

    Column::new().push(positioned).push(slider_bar).into()
}
