// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! View messages are translated into presenter messages; the presenter's
//! [`Effect`] is then turned into an iced [`Task`] by [`run_effect`].

use super::{Message, Shortcut};
use crate::application::port::{
    FetchError, ImageFetcher, RemoteAction, RemoteActionBridge, ScreenSource,
};
use crate::application::presenter::{self, ComparisonPresenter, Effect, LoadTarget, Phase};
use crate::config::Config;
use crate::domain::screen::ScreenList;
use crate::i18n::fluent::I18n;
use crate::infrastructure::Report;
use crate::media::{load_image_set, ImageLoadWaiter};
use crate::ui::notifications::{self, Notification};
use crate::ui::{inline, overlay, screen_list};
use iced::Task;
use std::sync::Arc;

/// Context for update operations containing references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub report: Option<&'a Arc<Report>>,
    pub presenter: &'a mut ComparisonPresenter,
    pub notifications: &'a mut notifications::Manager,
    pub list_loading: &'a mut bool,
}

// =============================================================================
// View messages
// =============================================================================

pub fn handle_screen_list_message(
    ctx: &mut UpdateContext<'_>,
    message: screen_list::Message,
) -> Task<Message> {
    let forwarded = match message {
        screen_list::Message::OpenInline(index) => presenter::Message::OpenInline(index),
        screen_list::Message::OpenOverlay(index) => presenter::Message::OpenOverlay(index),
        screen_list::Message::DeleteAll => {
            presenter::Message::RequestAction(RemoteAction::DeleteAll)
        }
        screen_list::Message::Reload => return load_list(ctx),
    };
    forward(ctx, forwarded)
}

pub fn handle_inline_message(
    ctx: &mut UpdateContext<'_>,
    message: inline::Message,
) -> Task<Message> {
    let forwarded = match message {
        inline::Message::Slid(value) => presenter::Message::InlineSlid(value),
        inline::Message::DiffToggled(checked) => presenter::Message::InlineDiffToggled(checked),
        inline::Message::Close => presenter::Message::CloseInline,
        inline::Message::Approve => {
            let Some(name) = open_inline_name(ctx.presenter) else {
                return Task::none();
            };
            presenter::Message::RequestAction(RemoteAction::Approve(name))
        }
        inline::Message::Delete => {
            let Some(name) = open_inline_name(ctx.presenter) else {
                return Task::none();
            };
            presenter::Message::RequestAction(RemoteAction::Delete(name))
        }
    };
    forward(ctx, forwarded)
}

pub fn handle_overlay_message(
    ctx: &mut UpdateContext<'_>,
    message: overlay::Message,
) -> Task<Message> {
    let forwarded = match message {
        overlay::Message::Previous => presenter::Message::Previous,
        overlay::Message::Next => presenter::Message::Next,
        overlay::Message::Close => presenter::Message::CloseOverlay,
        overlay::Message::Slid(value) => presenter::Message::OverlaySlid(value),
        overlay::Message::DiffToggled(checked) => presenter::Message::OverlayDiffToggled(checked),
        overlay::Message::Approve => {
            let Some(name) = open_overlay_name(ctx.presenter) else {
                return Task::none();
            };
            presenter::Message::RequestAction(RemoteAction::Approve(name))
        }
        overlay::Message::Delete => {
            let Some(name) = open_overlay_name(ctx.presenter) else {
                return Task::none();
            };
            presenter::Message::RequestAction(RemoteAction::Delete(name))
        }
    };
    forward(ctx, forwarded)
}

/// Arrows navigate the overlay; Escape closes the topmost comparison.
pub fn handle_shortcut(ctx: &mut UpdateContext<'_>, shortcut: Shortcut) -> Task<Message> {
    let overlay_active = !matches!(ctx.presenter.overlay(), Phase::Closed);
    let forwarded = match shortcut {
        Shortcut::Next if overlay_active => presenter::Message::Next,
        Shortcut::Previous if overlay_active => presenter::Message::Previous,
        Shortcut::Escape if overlay_active => presenter::Message::CloseOverlay,
        Shortcut::Escape if !matches!(ctx.presenter.inline(), Phase::Closed) => {
            presenter::Message::CloseInline
        }
        Shortcut::Next | Shortcut::Previous | Shortcut::Escape => return Task::none(),
    };
    forward(ctx, forwarded)
}

fn open_inline_name(presenter: &ComparisonPresenter) -> Option<String> {
    let index = presenter.inline().open()?.index;
    presenter.list().get(index).map(|r| r.image_name.clone())
}

fn open_overlay_name(presenter: &ComparisonPresenter) -> Option<String> {
    let index = presenter.overlay().open()?.index;
    presenter.list().get(index).map(|r| r.image_name.clone())
}

/// Hands a message to the presenter and runs the resulting effect.
pub fn forward(ctx: &mut UpdateContext<'_>, message: presenter::Message) -> Task<Message> {
    let effect = ctx.presenter.handle(message);
    run_effect(ctx, effect)
}

// =============================================================================
// Screen list
// =============================================================================

/// Fetches the screen list from the current report.
pub fn load_list(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(report) = ctx.report else {
        return Task::none();
    };
    *ctx.list_loading = true;
    let report = Arc::clone(report);
    Task::perform(
        async move { report.load_screens().await },
        Message::ListLoaded,
    )
}

pub fn handle_list_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<ScreenList, FetchError>,
) -> Task<Message> {
    *ctx.list_loading = false;
    match result {
        Ok(list) => {
            tracing::info!(screens = list.len(), "screen list loaded");
            forward(ctx, presenter::Message::ListLoaded(list))
        }
        Err(err) => {
            tracing::warn!(error = %err, "screen list failed to load");
            ctx.notifications.push(
                Notification::error("notification-list-load-error")
                    .with_arg("reason", err.to_string()),
            );
            Task::none()
        }
    }
}

// =============================================================================
// Effects
// =============================================================================

/// Turns a presenter effect into the task that performs it.
pub fn run_effect(ctx: &mut UpdateContext<'_>, effect: Effect) -> Task<Message> {
    match effect {
        Effect::None => Task::none(),
        Effect::LoadImages {
            ticket,
            target,
            paths,
        } => {
            let Some(report) = ctx.report else {
                return Task::none();
            };
            let interval = match target {
                LoadTarget::Inline => ctx.config.loading.inline_interval(),
                LoadTarget::Overlay => ctx.config.loading.overlay_interval(),
            };
            let fetcher: Arc<dyn ImageFetcher> = report.clone();
            Task::perform(
                load_image_set(fetcher, paths, ImageLoadWaiter::new(interval)),
                move |loaded| Message::ImagesSettled { ticket, loaded },
            )
        }
        Effect::Confirm(action) => {
            let Some(key) = action.confirm_key() else {
                return forward(
                    ctx,
                    presenter::Message::ConfirmationResolved {
                        action,
                        confirmed: true,
                    },
                );
            };
            let title = ctx.i18n.tr("confirm-title");
            let description = ctx.i18n.tr(key);
            Task::perform(confirm(title, description), move |confirmed| {
                Message::ConfirmationResolved { action, confirmed }
            })
        }
        Effect::Dispatch(action) => {
            let Some(report) = ctx.report else {
                return Task::none();
            };
            let report = Arc::clone(report);
            let request = action.clone();
            Task::perform(
                async move { report.dispatch(&request).await },
                move |result| Message::RemoteCompleted { action, result },
            )
        }
        Effect::Reload => load_list(ctx),
        Effect::NotifyFailure { action, reason } => {
            tracing::warn!(%action, %reason, "remote action failed");
            ctx.notifications.push(
                Notification::error(action.failure_key())
                    .with_arg("name", action.image_name().unwrap_or_default())
                    .with_arg("reason", reason),
            );
            Task::none()
        }
    }
}

/// Shows a yes/no warning dialog.
async fn confirm(title: String, description: String) -> bool {
    let answer = rfd::AsyncMessageDialog::new()
        .set_level(rfd::MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(rfd::MessageButtons::YesNo)
        .show()
        .await;
    matches!(answer, rfd::MessageDialogResult::Yes)
}
