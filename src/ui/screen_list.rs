// SPDX-License-Identifier: MPL-2.0
//! Report header and the list of compared screens.
//!
//! Each row opens its comparison inline (the "compare" button) or in the
//! full-screen overlay (the screen name). The row of the most recently
//! shown overlay record is highlighted.

use crate::application::presenter::{ComparisonPresenter, RowView};
use crate::domain::screen::ScreenSummary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, container, scrollable, text, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the list.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub presenter: &'a ComparisonPresenter,
    pub colors: &'a ColorScheme,
    /// Report location shown in the header, if one is configured.
    pub location: Option<&'a str>,
    pub list_loading: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenInline(usize),
    OpenOverlay(usize),
    DeleteAll,
    Reload,
}

#[must_use]
#[allow(clippy::needless_pass_by_value)] // ViewContext is small and consumed
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header = build_header(&ctx);

    let body: Element<'_, Message> = if ctx.location.is_none() {
        empty_state(ctx.i18n.tr("report-none"))
    } else if ctx.list_loading && ctx.presenter.list().is_empty() {
        empty_state(ctx.i18n.tr("report-loading"))
    } else if ctx.presenter.list().is_empty() {
        empty_state(ctx.i18n.tr("report-empty"))
    } else {
        let rows = ctx
            .presenter
            .rows()
            .into_iter()
            .map(|row| build_row(ctx.i18n, ctx.colors, row));
        scrollable(
            Column::with_children(rows)
                .spacing(spacing::XXS)
                .padding(spacing::MD)
                .width(Length::Fill),
        )
        .height(Length::Fill)
        .into()
    };

    Column::new()
        .push(header)
        .push(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn build_header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_MD);
    let location = Text::new(ctx.location.unwrap_or_default().to_string())
        .size(typography::CAPTION)
        .style(muted_text);

    let mut actions = Row::new().spacing(spacing::XS);
    if ctx.location.is_some() {
        actions = actions.push(
            button(text(ctx.i18n.tr("action-reload")).size(typography::BODY))
                .on_press(Message::Reload)
                .style(button::secondary),
        );
        let delete_all = button(text(ctx.i18n.tr("action-delete-all")).size(typography::BODY))
            .style(button::danger);
        actions = actions.push(if ctx.presenter.list().is_empty() {
            delete_all
        } else {
            delete_all.on_press(Message::DeleteAll)
        });
    }

    let top = Row::new()
        .align_y(Vertical::Center)
        .push(Column::new().push(title).push(location))
        .push(Space::new().width(Length::Fill))
        .push(actions);

    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .push(top)
            .push(summary_line(ctx.i18n, ctx.presenter.summary())),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(container::rounded_box)
    .into()
}

/// One line of category counts, skipping empty categories.
fn summary_line<'a>(i18n: &I18n, summary: ScreenSummary) -> Element<'a, Message> {
    let entries = [
        ("summary-total", summary.total),
        ("summary-above-threshold", summary.above_threshold),
        ("summary-below-threshold", summary.below_threshold),
        ("summary-equal", summary.equal),
        ("summary-new-unapproved", summary.new_unapproved),
        ("summary-new-auto-approved", summary.new_auto_approved),
        ("summary-inactive", summary.inactive),
    ];

    let mut row = Row::new().spacing(spacing::MD);
    for (key, count) in entries {
        if count == 0 && key != "summary-total" {
            continue;
        }
        let count = count.to_string();
        row = row.push(
            Text::new(i18n.tr_with_args(key, &[("count", count.as_str())]))
                .size(typography::BODY_SM),
        );
    }
    row.into()
}

fn build_row<'a>(i18n: &I18n, colors: &ColorScheme, row: RowView<'a>) -> Element<'a, Message> {
    let index = row.record.index;
    let status_color = colors.status_color(row.record);
    let highlight = colors.row_highlight;

    let name = button(Text::new(row.record.image_name.as_str()).size(typography::BODY))
        .on_press(Message::OpenOverlay(index))
        .style(button::text)
        .width(Length::Fill);

    let status = Text::new(i18n.tr(row.status_key))
        .size(typography::BODY_SM)
        .width(Length::Fixed(sizing::STATUS_COLUMN_WIDTH))
        .style(move |_theme: &Theme| text::Style {
            color: Some(status_color),
        });

    let compare = button(text(i18n.tr("action-compare")).size(typography::BODY_SM))
        .style(if row.inline_open {
            button::primary
        } else {
            button::secondary
        })
        .on_press(Message::OpenInline(index));

    let mut content = Row::new()
        .spacing(spacing::SM)
        .align_y(Vertical::Center)
        .push(name)
        .push(status);
    if let Some(key) = row.approval_key {
        let approved_color = colors.status_equal;
        content = content.push(
            Container::new(Text::new(i18n.tr(key)).size(typography::CAPTION).style(
                move |_theme: &Theme| text::Style {
                    color: Some(approved_color),
                },
            ))
            .padding([0.0, spacing::XXS])
            .style(container::bordered_box),
        );
    }
    for (key, value) in &row.record.extra {
        content = content.push(
            Text::new(format!("{key}: {value}"))
                .size(typography::CAPTION)
                .style(muted_text),
        );
    }
    content = content.push(compare);

    let highlighted = row.highlighted;
    Container::new(content)
        .padding([spacing::XXS, spacing::XS])
        .width(Length::Fill)
        .style(move |_theme: &Theme| container::Style {
            background: highlighted.then_some(iced::Background::Color(highlight)),
            border: Border {
                radius: radius::SM.into(),
                ..Border::default()
            },
            ..container::Style::default()
        })
        .into()
}

fn empty_state<'a>(message: String) -> Element<'a, Message> {
    Container::new(Text::new(message).size(typography::BODY_LG))
        .width(Length::Fill)
        .height(Length::Fill)
        .center(Length::Fill)
        .into()
}

fn muted_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.color),
    }
}
