// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the report backend, the comparison
//! presenter, localization and notifications, and translates messages into
//! side effects like list loading, image fetching or remote actions.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Shortcut};

use crate::application::presenter::ComparisonPresenter;
use crate::config::{self, Config};
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::comparison::Viewport;
use crate::i18n::fluent::I18n;
use crate::infrastructure::Report;
use crate::ui::notifications;
use crate::ui::theming::{ColorScheme, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::sync::Arc;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    report: Option<Arc<Report>>,
    presenter: ComparisonPresenter,
    theme_mode: ThemeMode,
    colors: ColorScheme,
    /// Whether a screen list request is in flight.
    list_loading: bool,
    /// Loading indicator animation frame.
    spinner_step: usize,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("report", &self.report.as_ref().map(|r| r.location()))
            .field("screens", &self.presenter.list().len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1200;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot function; flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        let mut presenter = ComparisonPresenter::new(
            config.layout.metrics(),
            config.actions.notify_failures,
        );
        presenter.set_viewport(Viewport::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));
        Self {
            i18n: I18n::default(),
            config,
            report: None,
            presenter,
            theme_mode: ThemeMode::System,
            colors: ColorScheme::dark(),
            list_loading: false,
            spinner_step: 0,
            notifications: notifications::Manager::new(),
            diagnostics: DiagnosticsCollector::default(),
        }
    }
}

impl App {
    /// Initializes application state and kicks off the screen list load
    /// when a report base is known.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (mut config, config_warning) = config::load();
        if let Some(base) = flags.base {
            config.report.base = Some(base);
        }

        let mut app = App {
            i18n: I18n::new(flags.lang, &config),
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.colors = ColorScheme::for_mode(app.theme_mode);
        app.presenter = ComparisonPresenter::new(
            config.layout.metrics(),
            config.actions.notify_failures,
        );
        app.presenter.set_viewport(Viewport::new(
            WINDOW_DEFAULT_WIDTH as f32,
            WINDOW_DEFAULT_HEIGHT as f32,
        ));
        app.presenter.set_diagnostics(app.diagnostics.handle());
        app.notifications.set_diagnostics(app.diagnostics.handle());

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(&key));
        }

        if let Some(base) = config.report.base.as_deref() {
            match Report::from_base(base, &config.report.list_path) {
                Ok(report) => {
                    tracing::info!(location = %report.location(), "opening report");
                    app.report = Some(Arc::new(report));
                }
                Err(err) => {
                    tracing::warn!(%base, error = %err, "invalid report base");
                    app.notifications.push(
                        notifications::Notification::error("notification-report-invalid")
                            .with_arg("base", base),
                    );
                }
            }
        }
        app.config = config;

        let task = update::load_list(&mut app.update_context());
        (app, task)
    }

    fn update_context(&mut self) -> update::UpdateContext<'_> {
        update::UpdateContext {
            i18n: &self.i18n,
            config: &self.config,
            report: self.report.as_ref(),
            presenter: &mut self.presenter,
            notifications: &mut self.notifications,
            list_loading: &mut self.list_loading,
        }
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match &self.report {
            Some(report) => format!("{} - {app_name}", report.location()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(
            self.presenter.loading_indicator().is_visible(),
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        self.diagnostics.process_pending();
        let mut ctx = self.update_context();

        match message {
            Message::ScreenList(list_message) => {
                update::handle_screen_list_message(&mut ctx, list_message)
            }
            Message::Inline(inline_message) => {
                update::handle_inline_message(&mut ctx, inline_message)
            }
            Message::Overlay(overlay_message) => {
                update::handle_overlay_message(&mut ctx, overlay_message)
            }
            Message::Shortcut(shortcut) => update::handle_shortcut(&mut ctx, shortcut),
            Message::ListLoaded(result) => update::handle_list_loaded(&mut ctx, result),
            Message::ImagesSettled { ticket, loaded } => update::forward(
                &mut ctx,
                crate::application::presenter::Message::ImagesSettled { ticket, loaded },
            ),
            Message::ConfirmationResolved { action, confirmed } => update::forward(
                &mut ctx,
                crate::application::presenter::Message::ConfirmationResolved { action, confirmed },
            ),
            Message::RemoteCompleted { action, result } => update::forward(
                &mut ctx,
                crate::application::presenter::Message::RemoteCompleted { action, result },
            ),
            Message::WindowResized(size) => update::forward(
                &mut ctx,
                crate::application::presenter::Message::ViewportResized(Viewport::new(
                    size.width,
                    size.height,
                )),
            ),
            Message::Notification(notification_message) => {
                self.notifications.handle_message(&notification_message);
                Task::none()
            }
            Message::Tick(_instant) => {
                self.notifications.tick();
                if self.presenter.loading_indicator().is_visible() {
                    self.spinner_step = self.spinner_step.wrapping_add(1);
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            config: &self.config,
            presenter: &self.presenter,
            notifications: &self.notifications,
            colors: &self.colors,
            location: self.config.report.base.as_deref(),
            list_loading: self.list_loading,
            spinner_step: self.spinner_step,
        })
    }
}
