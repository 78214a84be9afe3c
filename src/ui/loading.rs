// SPDX-License-Identifier: MPL-2.0
//! Loading indicator shown while the overlay waits for its images.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::overlay::backdrop;
use iced::widget::{Column, Container, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Spinner glyph frames, advanced by the tick subscription.
const FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

#[must_use]
pub fn frame(step: usize) -> &'static str {
    FRAMES[step % FRAMES.len()]
}

#[must_use]
pub fn view<'a, M: 'a>(i18n: &I18n, step: usize) -> Element<'a, M> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(frame(step)).size(sizing::SPINNER))
        .push(Text::new(i18n.tr("loading")).size(typography::BODY_LG));

    backdrop(
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center(Length::Fill)
            .into(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_cycle() {
        assert_eq!(frame(0), frame(FRAMES.len()));
        assert_ne!(frame(0), frame(1));
    }
}
