// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: screen list, dimming mask, inline box, overlay
//! or loading indicator, toasts.

use super::Message;
use crate::application::presenter::{ComparisonPresenter, Phase};
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, Toast};
use crate::ui::theming::ColorScheme;
use crate::ui::{inline, loading, overlay, screen_list};
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub presenter: &'a ComparisonPresenter,
    pub notifications: &'a notifications::Manager,
    pub colors: &'a ColorScheme,
    pub location: Option<&'a str>,
    pub list_loading: bool,
    pub spinner_step: usize,
}

/// Renders every visible layer.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let presenter = ctx.presenter;
    let slider_width = ctx.config.layout.metrics().slider_width;

    let list = screen_list::view(screen_list::ViewContext {
        i18n: ctx.i18n,
        presenter,
        colors: ctx.colors,
        location: ctx.location,
        list_loading: ctx.list_loading,
    })
    .map(Message::ScreenList);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(list);

    if presenter.mask().is_visible() {
        layers = layers.push(inline::mask().map(Message::Inline));
    }

    if let Phase::Open(view) = presenter.inline() {
        if let Some(record) = presenter.list().get(view.index) {
            layers = layers.push(
                inline::view(inline::ViewContext {
                    i18n: ctx.i18n,
                    view,
                    record,
                    controls: presenter.controls_for(view.index),
                    slider_width,
                })
                .map(Message::Inline),
            );
        }
    }

    if presenter.overlay_region().is_visible() {
        if let Phase::Open(view) = presenter.overlay() {
            if let Some(record) = presenter.list().get(view.index) {
                layers = layers.push(
                    overlay::view(overlay::ViewContext {
                        i18n: ctx.i18n,
                        view,
                        record,
                        total: presenter.list().len(),
                        slider_width,
                    })
                    .map(Message::Overlay),
                );
            }
        }
    }

    if presenter.loading_indicator().is_visible() {
        layers = layers.push(loading::view(ctx.i18n, ctx.spinner_step));
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
