// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::port::{FetchError, RemoteAction, RemoteError};
use crate::application::presenter::Ticket;
use crate::domain::screen::ScreenList;
use crate::media::LoadedSet;
use crate::ui::{inline, notifications, overlay, screen_list};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level view messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ScreenList(screen_list::Message),
    Inline(inline::Message),
    Overlay(overlay::Message),
    Notification(notifications::NotificationMessage),
    Shortcut(Shortcut),
    /// The screen list finished loading.
    ListLoaded(Result<ScreenList, FetchError>),
    /// Every image of a comparison settled.
    ImagesSettled {
        ticket: Ticket,
        loaded: LoadedSet,
    },
    /// The user answered a confirmation dialog.
    ConfirmationResolved {
        action: RemoteAction,
        confirmed: bool,
    },
    RemoteCompleted {
        action: RemoteAction,
        result: Result<(), RemoteError>,
    },
    WindowResized(iced::Size),
    Tick(Instant),
}

/// Keyboard shortcuts routed from the event subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Previous,
    Next,
    Escape,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Report base overriding `[report] base` from the settings file.
    pub base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `VDIFF_VIEWER_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
