// SPDX-License-Identifier: MPL-2.0
//! Stacked build, approved and difference images of one comparison.

use crate::domain::comparison::{ImageRole, ImageSet, LayerOpacities, Size};
use crate::i18n::fluent::I18n;
use crate::media::Settled;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::{image::Image, text, Container, Stack, Text};
use iced::{Element, Length, Theme};

pub struct LayerStack<'a> {
    pub images: &'a ImageSet<Settled>,
    pub opacities: LayerOpacities,
    pub diff_opacity: f64,
    /// Box the difference mask is drawn in; its intrinsic size when `None`.
    pub diff_size: Option<Size>,
}

impl<'a> LayerStack<'a> {
    /// Approved at the bottom, build above it and the mask on top.
    pub fn view<M: 'a>(self, i18n: &I18n) -> Element<'a, M> {
        let mut stack = Stack::new();
        let mut failures = Vec::new();

        for role in [ImageRole::Approved, ImageRole::Build, ImageRole::Diff] {
            let Some(settled) = self.images.get(role) else {
                continue;
            };
            let opacity = match role {
                ImageRole::Approved => self.opacities.approved,
                ImageRole::Build => self.opacities.build,
                ImageRole::Diff => self.diff_opacity,
            };
            match settled {
                Settled::Ready(data) => {
                    let size = match (role, self.diff_size) {
                        (ImageRole::Diff, Some(size)) => size,
                        _ => data.size(),
                    };
                    stack = stack.push(
                        Image::new(data.handle.clone())
                            .width(Length::Fixed(size.width))
                            .height(Length::Fixed(size.height))
                            .opacity(opacity as f32),
                    );
                }
                Settled::Failed(reason) => {
                    tracing::debug!(?role, %reason, "comparison layer failed to load");
                    failures.push(role);
                }
            }
        }

        if !failures.is_empty() {
            let labels: Vec<String> = failures
                .iter()
                .map(|role| i18n.tr(role_key(*role)))
                .collect();
            let images = labels.join(", ");
            let notice = i18n.tr_with_args("image-load-failed", &[("images", images.as_str())]);
            stack = stack.push(
                Container::new(Text::new(notice).size(typography::CAPTION).style(
                    |theme: &Theme| text::Style {
                        color: Some(theme.extended_palette().danger.base.color),
                    },
                ))
                .padding(spacing::XS),
            );
        }

        stack.into()
    }
}

fn role_key(role: ImageRole) -> &'static str {
    match role {
        ImageRole::Build => "image-role-build",
        ImageRole::Approved => "image-role-approved",
        ImageRole::Diff => "image-role-diff",
    }
}
