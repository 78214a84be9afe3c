// SPDX-License-Identifier: MPL-2.0
//! Full-screen comparison overlay with previous/next navigation.

use crate::application::presenter::OverlayView;
use crate::domain::comparison::{blend, LayerPairing};
use crate::domain::screen::ScreenRecord;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography, BACKDROP};
use crate::ui::layers::LayerStack;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{
        button, checkbox, container, opaque, scrollable, slider, text, Column, Container, Row,
        Space, Text,
    },
    Element, Length, Theme,
};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub view: &'a OverlayView,
    pub record: &'a ScreenRecord,
    pub total: usize,
    pub slider_width: f32,
}

#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    Close,
    Slid(u8),
    DiffToggled(bool),
    Approve,
    Delete,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let controls = ctx.view.controls;
    let current = (ctx.view.index + 1).to_string();
    let total = ctx.total.to_string();
    let position = ctx.i18n.tr_with_args(
        "overlay-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let navigation = Row::new()
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(nav_button(ctx.i18n.tr("action-previous"), Message::Previous))
        .push(Text::new(position).size(typography::BODY))
        .push(nav_button(ctx.i18n.tr("action-next"), Message::Next));

    let title = Column::new()
        .push(Text::new(ctx.record.image_name.as_str()).size(typography::TITLE_MD))
        .push(Text::new(ctx.i18n.tr(ctx.record.status_key())).size(typography::BODY_SM));

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
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill))
        .push(navigation)
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

    let layers = LayerStack {
        images: &ctx.view.images,
        opacities: controls.layers(LayerPairing::Overlay),
        diff_opacity: controls.diff_opacity(),
        diff_size: None,
    }
    .view(ctx.i18n);

    let images = scrollable(
        Container::new(layers)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let content = Column::new()
        .spacing(spacing::SM)
        .padding(spacing::MD)
        .push(header)
        .push(
            Container::new(blend_bar)
                .width(Length::Fill)
                .align_x(Horizontal::Center),
        )
        .push(images);

    backdrop(content.into())
}

fn nav_button<'a>(label: String, message: Message) -> Element<'a, Message> {
    button(text(label).size(typography::BODY))
        .on_press(message)
        .style(button::secondary)
        .into()
}

/// Full-window dark layer that absorbs pointer input.
pub(crate) fn backdrop<'a, M: 'a>(content: Element<'a, M>) -> Element<'a, M> {
    opaque(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|theme: &Theme| container::Style {
                background: Some(iced::Background::Color(BACKDROP)),
                text_color: Some(theme.extended_palette().background.base.text),
                ..container::Style::default()
            }),
    )
}
