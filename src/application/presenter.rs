// SPDX-License-Identifier: MPL-2.0
//! Comparison presenter: opens, closes and navigates comparisons.
//!
//! Every comparison moves `Closed -> Loading -> Open -> Closed`. The
//! presenter never performs I/O itself; it returns an [`Effect`] and the
//! application runs it, feeding results back as messages.
//!
//! The dimming mask, the overlay region and the loading indicator are
//! single regions owned here. While any comparison is loading, new open
//! requests are ignored. Each load carries a ticket and a settle whose
//! ticket is not the pending one is discarded.

use crate::application::port::{RemoteAction, RemoteError};
use crate::diagnostics::{AppOperation, DiagnosticsHandle, UserAction};
use crate::domain::comparison::{
    blend, layout, BlendState, DerivedPaths, ImageSet, InlineLayout, LayerOpacities, LayerPairing,
    LayoutMetrics, ScreenCursor, Size, Viewport,
};
use crate::domain::screen::{ScreenList, ScreenRecord, ScreenSummary};
use crate::media::{LoadedSet, Settled};

/// Identifies one load sequence.
pub type Ticket = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadTarget {
    Inline,
    Overlay,
}

/// A shared UI region that is either shown or hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    visible: bool,
}

impl Region {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}

/// Slider and difference-checkbox state of one comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlendControls {
    pub slider: u8,
    pub diff_visible: bool,
}

impl Default for BlendControls {
    fn default() -> Self {
        Self {
            slider: blend::SLIDER_DEFAULT,
            diff_visible: true,
        }
    }
}

impl BlendControls {
    #[must_use]
    pub fn blend(&self) -> BlendState {
        blend::on_slide(self.slider)
    }

    #[must_use]
    pub fn layers(&self, pairing: LayerPairing) -> LayerOpacities {
        self.blend().layers(pairing)
    }

    #[must_use]
    pub fn diff_opacity(&self) -> f64 {
        blend::on_toggle(self.diff_visible)
    }
}

/// A revealed inline comparison.
#[derive(Debug, Clone)]
pub struct InlineView {
    pub index: usize,
    pub images: ImageSet<Settled>,
    pub layout: InlineLayout,
}

/// A revealed overlay comparison.
#[derive(Debug, Clone)]
pub struct OverlayView {
    pub index: usize,
    pub images: ImageSet<Settled>,
    pub controls: BlendControls,
}

#[derive(Debug, Clone, Default)]
pub enum Phase<V> {
    #[default]
    Closed,
    Loading {
        ticket: Ticket,
        index: usize,
    },
    Open(V),
}

impl<V> Phase<V> {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading { .. })
    }

    #[must_use]
    pub fn open(&self) -> Option<&V> {
        match self {
            Phase::Open(view) => Some(view),
            Phase::Closed | Phase::Loading { .. } => None,
        }
    }

    fn pending_ticket(&self) -> Option<(Ticket, usize)> {
        match self {
            Phase::Loading { ticket, index } => Some((*ticket, *index)),
            Phase::Closed | Phase::Open(_) => None,
        }
    }
}

/// One row of the screen list, ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct RowView<'a> {
    pub record: &'a ScreenRecord,
    pub status_key: &'static str,
    pub approval_key: Option<&'static str>,
    pub highlighted: bool,
    pub inline_open: bool,
    pub controls: BlendControls,
}

#[derive(Debug, Clone)]
pub enum Message {
    OpenInline(usize),
    CloseInline,
    OpenOverlay(usize),
    Next,
    Previous,
    CloseOverlay,
    ImagesSettled {
        ticket: Ticket,
        loaded: LoadedSet,
    },
    InlineSlid(u8),
    InlineDiffToggled(bool),
    OverlaySlid(u8),
    OverlayDiffToggled(bool),
    ViewportResized(Viewport),
    RequestAction(RemoteAction),
    ConfirmationResolved {
        action: RemoteAction,
        confirmed: bool,
    },
    RemoteCompleted {
        action: RemoteAction,
        result: Result<(), RemoteError>,
    },
    ListLoaded(ScreenList),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Fetch these images and report back with `ImagesSettled`.
    LoadImages {
        ticket: Ticket,
        target: LoadTarget,
        paths: ImageSet<String>,
    },
    /// Ask the user, then report back with `ConfirmationResolved`.
    Confirm(RemoteAction),
    /// Run the action, then report back with `RemoteCompleted`.
    Dispatch(RemoteAction),
    /// Re-fetch the screen list.
    Reload,
    /// Tell the user a remote action failed.
    NotifyFailure {
        action: RemoteAction,
        reason: String,
    },
}

#[derive(Debug, Default)]
pub struct ComparisonPresenter {
    list: ScreenList,
    cursor: ScreenCursor,
    inline: Phase<InlineView>,
    overlay: Phase<OverlayView>,
    /// Per-row controls; inline boxes keep their slider across opens.
    inline_controls: Vec<BlendControls>,
    mask: Region,
    overlay_region: Region,
    loading_indicator: Region,
    viewport: Option<Viewport>,
    metrics: LayoutMetrics,
    last_ticket: Ticket,
    notify_failures: bool,
    diagnostics: Option<DiagnosticsHandle>,
}

impl ComparisonPresenter {
    #[must_use]
    pub fn new(metrics: LayoutMetrics, notify_failures: bool) -> Self {
        Self {
            metrics,
            notify_failures,
            ..Self::default()
        }
    }

    pub fn set_diagnostics(&mut self, handle: DiagnosticsHandle) {
        self.diagnostics = Some(handle);
    }

    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::OpenInline(index) => self.open_inline(index),
            Message::CloseInline => {
                self.close_inline();
                Effect::None
            }
            Message::OpenOverlay(index) => self.open_overlay(index),
            Message::Next => self.navigate(true),
            Message::Previous => self.navigate(false),
            Message::CloseOverlay => {
                self.close_overlay();
                Effect::None
            }
            Message::ImagesSettled { ticket, loaded } => {
                self.images_settled(ticket, loaded);
                Effect::None
            }
            Message::InlineSlid(value) => {
                if let Some(controls) = self.open_inline_controls_mut() {
                    controls.slider = value.min(blend::SLIDER_MAX);
                }
                Effect::None
            }
            Message::InlineDiffToggled(checked) => {
                if let Some(controls) = self.open_inline_controls_mut() {
                    controls.diff_visible = checked;
                }
                self.log_action(UserAction::ToggleDiff { visible: checked });
                Effect::None
            }
            Message::OverlaySlid(value) => {
                if let Phase::Open(view) = &mut self.overlay {
                    view.controls.slider = value.min(blend::SLIDER_MAX);
                }
                Effect::None
            }
            Message::OverlayDiffToggled(checked) => {
                if let Phase::Open(view) = &mut self.overlay {
                    view.controls.diff_visible = checked;
                }
                self.log_action(UserAction::ToggleDiff { visible: checked });
                Effect::None
            }
            Message::ViewportResized(viewport) => {
                self.set_viewport(viewport);
                Effect::None
            }
            Message::RequestAction(action) => self.request_action(action),
            Message::ConfirmationResolved { action, confirmed } => {
                self.confirmation_resolved(action, confirmed)
            }
            Message::RemoteCompleted { action, result } => self.remote_completed(action, result),
            Message::ListLoaded(list) => {
                self.set_list(list);
                Effect::None
            }
        }
    }

    // =========================================================================
    // Open / close
    // =========================================================================

    /// True while any comparison waits for its images.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inline.is_loading() || self.overlay.is_loading()
    }

    fn next_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        self.last_ticket
    }

    fn open_inline(&mut self, index: usize) -> Effect {
        if self.is_loading() {
            self.log_action(UserAction::OpenIgnored);
            return Effect::None;
        }
        let Some(record) = self.list.get(index) else {
            return Effect::None;
        };
        let paths = DerivedPaths::for_image(&record.image_name).present_for(record);
        self.log_action(UserAction::OpenInline {
            image_name: record.image_name.clone(),
        });

        let ticket = self.next_ticket();
        self.inline = Phase::Loading { ticket, index };
        self.mask.show();
        Effect::LoadImages {
            ticket,
            target: LoadTarget::Inline,
            paths,
        }
    }

    fn close_inline(&mut self) {
        if matches!(self.inline, Phase::Closed) {
            return;
        }
        self.inline = Phase::Closed;
        self.mask.hide();
        self.log_action(UserAction::CloseInline);
    }

    fn open_overlay(&mut self, index: usize) -> Effect {
        if self.is_loading() {
            self.log_action(UserAction::OpenIgnored);
            return Effect::None;
        }
        let Ok(record) = self.cursor.resolve(&self.list, index) else {
            return Effect::None;
        };
        let paths = DerivedPaths::for_image(&record.image_name).all();
        self.log_action(UserAction::OpenOverlay { index });

        let ticket = self.next_ticket();
        self.overlay = Phase::Loading { ticket, index };
        self.overlay_region.hide();
        self.loading_indicator.show();
        Effect::LoadImages {
            ticket,
            target: LoadTarget::Overlay,
            paths,
        }
    }

    /// Moves to the neighbour of the most recently shown record.
    fn navigate(&mut self, forward: bool) -> Effect {
        if self.overlay.open().is_none() || !self.cursor.can_navigate() {
            return Effect::None;
        }
        let target = if forward {
            self.cursor.next_index()
        } else {
            self.cursor.previous_index()
        };
        let Some(index) = target else {
            return Effect::None;
        };
        self.log_action(if forward {
            UserAction::NavigateNext
        } else {
            UserAction::NavigatePrevious
        });
        self.open_overlay(index)
    }

    fn close_overlay(&mut self) {
        if matches!(self.overlay, Phase::Closed) {
            return;
        }
        self.overlay = Phase::Closed;
        self.overlay_region.hide();
        self.loading_indicator.hide();
        self.log_action(UserAction::CloseOverlay);
    }

    /// Reveals the comparison whose load just finished.
    fn images_settled(&mut self, ticket: Ticket, loaded: LoadedSet) {
        self.log_operation(AppOperation::ImagesSettled {
            images: loaded.images.len(),
            checks: loaded.checks,
        });

        if let Some((pending, index)) = self.inline.pending_ticket() {
            if pending == ticket {
                let layout = self.compute_layout(&loaded.images);
                self.inline = Phase::Open(InlineView {
                    index,
                    images: loaded.images,
                    layout,
                });
                self.log_operation(AppOperation::Revealed {
                    target: "inline".to_string(),
                });
                return;
            }
        }

        if let Some((pending, index)) = self.overlay.pending_ticket() {
            if pending == ticket {
                if self.cursor.go_to(index).is_err() {
                    self.close_overlay();
                    return;
                }
                self.overlay = Phase::Open(OverlayView {
                    index,
                    images: loaded.images,
                    controls: BlendControls::default(),
                });
                self.loading_indicator.hide();
                self.overlay_region.show();
                self.log_operation(AppOperation::Revealed {
                    target: "overlay".to_string(),
                });
                return;
            }
        }

        self.log_operation(AppOperation::StaleSettleDiscarded { ticket });
    }

    // =========================================================================
    // Layout
    // =========================================================================

    fn compute_layout(&self, images: &ImageSet<Settled>) -> InlineLayout {
        let size_of = |settled: Option<&Settled>| settled.map(|s| s.size().unwrap_or_default());
        layout::inline_layout(
            self.viewport.unwrap_or(Viewport::new(0.0, 0.0)),
            size_of(images.build.as_ref()),
            size_of(images.approved.as_ref()),
            images.diff.is_some(),
            self.metrics,
        )
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = Some(viewport);
        if let Phase::Open(view) = &self.inline {
            let layout = self.compute_layout(&view.images);
            if let Phase::Open(view) = &mut self.inline {
                view.layout = layout;
            }
        }
    }

    // =========================================================================
    // Remote actions
    // =========================================================================

    fn request_action(&mut self, action: RemoteAction) -> Effect {
        if action.requires_confirmation() {
            Effect::Confirm(action)
        } else {
            self.dispatch(action)
        }
    }

    fn confirmation_resolved(&mut self, action: RemoteAction, confirmed: bool) -> Effect {
        if confirmed {
            self.dispatch(action)
        } else {
            self.log_action(UserAction::ConfirmationDeclined {
                remote_action: action.to_string(),
            });
            Effect::None
        }
    }

    fn dispatch(&mut self, action: RemoteAction) -> Effect {
        self.log_operation(AppOperation::RemoteDispatched {
            action: action.to_string(),
        });
        Effect::Dispatch(action)
    }

    fn remote_completed(&mut self, action: RemoteAction, result: Result<(), RemoteError>) -> Effect {
        match result {
            Ok(()) => {
                self.log_operation(AppOperation::RemoteCompleted {
                    action: action.to_string(),
                });
                Effect::Reload
            }
            Err(err) => {
                self.log_operation(AppOperation::RemoteFailed {
                    action: action.to_string(),
                    reason: err.to_string(),
                });
                if self.notify_failures {
                    Effect::NotifyFailure {
                        action,
                        reason: err.to_string(),
                    }
                } else {
                    Effect::None
                }
            }
        }
    }

    // =========================================================================
    // List
    // =========================================================================

    /// Replaces the list and resets every comparison.
    pub fn set_list(&mut self, list: ScreenList) {
        self.log_operation(AppOperation::ScreenListLoaded { count: list.len() });
        self.cursor = ScreenCursor::new(list.len());
        self.inline_controls = vec![BlendControls::default(); list.len()];
        self.list = list;
        self.inline = Phase::Closed;
        self.overlay = Phase::Closed;
        self.mask.hide();
        self.overlay_region.hide();
        self.loading_indicator.hide();
    }

    /// Projects the list into rows. The row of the most recently shown
    /// overlay record is highlighted.
    #[must_use]
    pub fn rows(&self) -> Vec<RowView<'_>> {
        let highlighted = self.cursor.current();
        let inline_index = match &self.inline {
            Phase::Loading { index, .. } => Some(*index),
            Phase::Open(view) => Some(view.index),
            Phase::Closed => None,
        };
        self.list
            .iter()
            .map(|record| RowView {
                record,
                status_key: record.status_key(),
                approval_key: record.approval_key(),
                highlighted: highlighted == Some(record.index),
                inline_open: inline_index == Some(record.index),
                controls: self.controls_for(record.index),
            })
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn list(&self) -> &ScreenList {
        &self.list
    }

    #[must_use]
    pub fn summary(&self) -> ScreenSummary {
        self.list.summary()
    }

    #[must_use]
    pub fn cursor(&self) -> &ScreenCursor {
        &self.cursor
    }

    #[must_use]
    pub fn inline(&self) -> &Phase<InlineView> {
        &self.inline
    }

    #[must_use]
    pub fn overlay(&self) -> &Phase<OverlayView> {
        &self.overlay
    }

    #[must_use]
    pub fn mask(&self) -> Region {
        self.mask
    }

    #[must_use]
    pub fn overlay_region(&self) -> Region {
        self.overlay_region
    }

    #[must_use]
    pub fn loading_indicator(&self) -> Region {
        self.loading_indicator
    }

    #[must_use]
    pub fn controls_for(&self, index: usize) -> BlendControls {
        self.inline_controls.get(index).copied().unwrap_or_default()
    }

    /// Size the difference mask is drawn at in the open inline box.
    #[must_use]
    pub fn inline_diff_size(&self) -> Option<Size> {
        self.inline.open().and_then(|view| view.layout.diff)
    }

    fn open_inline_controls_mut(&mut self) -> Option<&mut BlendControls> {
        let index = self.inline.open()?.index;
        self.inline_controls.get_mut(index)
    }

    fn log_action(&self, action: UserAction) {
        if let Some(handle) = &self.diagnostics {
            handle.log_action(action);
        }
    }

    fn log_operation(&self, operation: AppOperation) {
        if let Some(handle) = &self.diagnostics {
            handle.log_operation(operation);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::domain::comparison::ImageRole;
    use crate::domain::screen::ExistingState;
    use crate::media::ImageData;

    fn list_of(n: usize) -> ScreenList {
        ScreenList::new(
            (0..n)
                .map(|i| {
                    let mut record = ScreenRecord::new(format!("screen-{i}.png"));
                    record.existing = ExistingState::AboveThreshold;
                    record
                })
                .collect(),
        )
    }

    fn presenter(n: usize) -> ComparisonPresenter {
        let mut presenter = ComparisonPresenter::new(LayoutMetrics::default(), false);
        presenter.set_list(list_of(n));
        presenter.set_viewport(Viewport::new(1200.0, 800.0));
        presenter
    }

    fn png(width: u32, height: u32) -> Settled {
        let mut bytes = Vec::new();
        image_rs::RgbaImage::new(width, height)
            .write_to(
                &mut std::io::Cursor::new(&mut bytes),
                image_rs::ImageFormat::Png,
            )
            .expect("encode");
        Settled::Ready(ImageData::from_encoded(bytes).expect("decode"))
    }

    fn settle_all(paths: &ImageSet<String>, size: (u32, u32)) -> LoadedSet {
        let mut images = ImageSet::default();
        for (role, _) in paths.iter() {
            images.set(role, png(size.0, size.1));
        }
        LoadedSet { images, checks: 1 }
    }

    /// Runs an open effect to completion.
    fn complete(presenter: &mut ComparisonPresenter, effect: Effect) {
        match effect {
            Effect::LoadImages { ticket, paths, .. } => {
                let loaded = settle_all(&paths, (10, 10));
                presenter.handle(Message::ImagesSettled { ticket, loaded });
            }
            other => panic!("expected LoadImages, got {other:?}"),
        }
    }

    #[test]
    fn overlay_next_three_times_wraps_to_start() {
        let mut presenter = presenter(5);
        let effect = presenter.handle(Message::OpenOverlay(2));
        complete(&mut presenter, effect);
        assert_eq!(presenter.cursor().current(), Some(2));

        let mut seen = Vec::new();
        for _ in 0..3 {
            let effect = presenter.handle(Message::Next);
            complete(&mut presenter, effect);
            seen.push(presenter.cursor().current());
        }
        assert_eq!(seen, vec![Some(3), Some(4), Some(0)]);
    }

    #[test]
    fn previous_wraps_before_first() {
        let mut presenter = presenter(3);
        let effect = presenter.handle(Message::OpenOverlay(0));
        complete(&mut presenter, effect);
        let effect = presenter.handle(Message::Previous);
        complete(&mut presenter, effect);
        assert_eq!(presenter.cursor().current(), Some(2));
    }

    #[test]
    fn overlay_loads_all_three_derived_paths() {
        let mut presenter = presenter(1);
        match presenter.handle(Message::OpenOverlay(0)) {
            Effect::LoadImages { target, paths, .. } => {
                assert_eq!(target, LoadTarget::Overlay);
                assert_eq!(
                    paths.get(ImageRole::Approved).map(String::as_str),
                    Some("approvedScreens/screen-0.png")
                );
                assert_eq!(
                    paths.get(ImageRole::Diff).map(String::as_str),
                    Some("buildDiffs/screen-0.png")
                );
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn loading_indicator_and_overlay_body_are_exclusive() {
        let mut presenter = presenter(2);
        let effect = presenter.handle(Message::OpenOverlay(1));
        assert!(presenter.loading_indicator().is_visible());
        assert!(!presenter.overlay_region().is_visible());

        complete(&mut presenter, effect);
        assert!(!presenter.loading_indicator().is_visible());
        assert!(presenter.overlay_region().is_visible());
    }

    #[test]
    fn cursor_follows_shown_record_not_clicked_one() {
        let mut presenter = presenter(4);
        let effect = presenter.handle(Message::OpenOverlay(1));
        complete(&mut presenter, effect);

        // Pending load of index 2 has not settled yet.
        let _pending = presenter.handle(Message::Next);
        assert_eq!(presenter.cursor().current(), Some(1));
        assert!(presenter.rows()[1].highlighted);
    }

    #[test]
    fn opens_are_ignored_while_loading() {
        let mut presenter = presenter(3);
        let first = presenter.handle(Message::OpenOverlay(0));
        assert!(matches!(first, Effect::LoadImages { .. }));

        assert_eq!(presenter.handle(Message::OpenOverlay(1)), Effect::None);
        assert_eq!(presenter.handle(Message::OpenInline(2)), Effect::None);

        complete(&mut presenter, first);
        assert_eq!(presenter.cursor().current(), Some(0));
    }

    #[test]
    fn stale_settle_is_discarded() {
        let mut presenter = presenter(2);
        let Effect::LoadImages { ticket, paths, .. } = presenter.handle(Message::OpenOverlay(0))
        else {
            panic!("expected load");
        };
        presenter.handle(Message::CloseOverlay);

        presenter.handle(Message::ImagesSettled {
            ticket,
            loaded: settle_all(&paths, (10, 10)),
        });
        assert!(matches!(presenter.overlay(), Phase::Closed));
        assert!(!presenter.overlay_region().is_visible());
        assert_eq!(presenter.cursor().current(), None);
    }

    #[test]
    fn out_of_range_overlay_open_is_ignored() {
        let mut presenter = presenter(2);
        assert_eq!(presenter.handle(Message::OpenOverlay(7)), Effect::None);
        assert!(matches!(presenter.overlay(), Phase::Closed));
    }

    #[test]
    fn navigation_needs_an_open_overlay() {
        let mut presenter = presenter(3);
        assert_eq!(presenter.handle(Message::Next), Effect::None);

        let mut empty = presenter_with_list(ScreenList::default());
        assert_eq!(empty.handle(Message::Next), Effect::None);
        assert_eq!(empty.handle(Message::OpenOverlay(0)), Effect::None);
    }

    fn presenter_with_list(list: ScreenList) -> ComparisonPresenter {
        let mut presenter = ComparisonPresenter::default();
        presenter.set_list(list);
        presenter
    }

    #[test]
    fn inline_reveal_sizes_box_from_widest_image() {
        let mut presenter = presenter(1);
        let Effect::LoadImages { ticket, target, paths } = presenter.handle(Message::OpenInline(0))
        else {
            panic!("expected load");
        };
        assert_eq!(target, LoadTarget::Inline);
        assert_eq!(paths.len(), 3);
        assert!(presenter.mask().is_visible());

        let loaded = LoadedSet {
            images: ImageSet {
                build: Some(png(640, 480)),
                approved: Some(png(800, 300)),
                diff: Some(png(640, 480)),
            },
            checks: 1,
        };
        presenter.handle(Message::ImagesSettled { ticket, loaded });

        let view = presenter.inline().open().expect("inline open");
        assert_eq!(view.layout.width, 800.0);
        assert_eq!(
            presenter.inline_diff_size(),
            Some(Size::new(640.0, 480.0))
        );
    }

    #[test]
    fn failed_images_count_as_zero_size() {
        let mut presenter = presenter(1);
        let Effect::LoadImages { ticket, .. } = presenter.handle(Message::OpenInline(0)) else {
            panic!("expected load");
        };
        let loaded = LoadedSet {
            images: ImageSet {
                build: Some(Settled::Failed("404".into())),
                approved: Some(png(300, 200)),
                diff: None,
            },
            checks: 4,
        };
        presenter.handle(Message::ImagesSettled { ticket, loaded });
        let view = presenter.inline().open().expect("inline open");
        assert_eq!(view.layout.width, 300.0);
        assert_eq!(view.layout.diff, None);
    }

    #[test]
    fn close_inline_hides_mask() {
        let mut presenter = presenter(1);
        let effect = presenter.handle(Message::OpenInline(0));
        complete(&mut presenter, effect);
        presenter.handle(Message::CloseInline);
        assert!(!presenter.mask().is_visible());
        assert!(matches!(presenter.inline(), Phase::Closed));
    }

    #[test]
    fn reopening_inline_loads_again_and_keeps_slider() {
        let mut presenter = presenter(1);
        let effect = presenter.handle(Message::OpenInline(0));
        complete(&mut presenter, effect);
        presenter.handle(Message::InlineSlid(80));
        presenter.handle(Message::CloseInline);

        let again = presenter.handle(Message::OpenInline(0));
        assert!(matches!(again, Effect::LoadImages { .. }));
        assert_eq!(presenter.controls_for(0).slider, 80);
    }

    #[test]
    fn overlay_controls_reset_on_each_reveal() {
        let mut presenter = presenter(2);
        let effect = presenter.handle(Message::OpenOverlay(0));
        complete(&mut presenter, effect);
        presenter.handle(Message::OverlaySlid(10));
        presenter.handle(Message::OverlayDiffToggled(false));
        let view = presenter.overlay().open().expect("open");
        assert_eq!(view.controls.diff_opacity(), blend::DIFF_HIDDEN_OPACITY);

        let effect = presenter.handle(Message::Next);
        complete(&mut presenter, effect);
        let view = presenter.overlay().open().expect("open");
        assert_eq!(view.controls, BlendControls::default());
    }

    #[test]
    fn resize_recomputes_open_inline_layout() {
        let mut presenter = presenter(1);
        let effect = presenter.handle(Message::OpenInline(0));
        complete(&mut presenter, effect);
        presenter.handle(Message::ViewportResized(Viewport::new(400.0, 600.0)));
        let view = presenter.inline().open().expect("open");
        assert_eq!(view.layout.height, 600.0 - 140.0 - 25.0);
    }

    #[test]
    fn declined_delete_dispatches_nothing() {
        let mut presenter = presenter(3);
        let effect = presenter.handle(Message::OpenOverlay(1));
        complete(&mut presenter, effect);

        let action = RemoteAction::Delete("screen-1.png".into());
        let effect = presenter.handle(Message::RequestAction(action.clone()));
        assert_eq!(effect, Effect::Confirm(action.clone()));

        let effect = presenter.handle(Message::ConfirmationResolved {
            action,
            confirmed: false,
        });
        assert_eq!(effect, Effect::None);
        assert_eq!(presenter.cursor().current(), Some(1));
        assert!(presenter.overlay().open().is_some());
        assert_eq!(presenter.list().len(), 3);
    }

    #[test]
    fn confirmed_delete_all_dispatches() {
        let mut presenter = presenter(1);
        let effect = presenter.handle(Message::ConfirmationResolved {
            action: RemoteAction::DeleteAll,
            confirmed: true,
        });
        assert_eq!(effect, Effect::Dispatch(RemoteAction::DeleteAll));
    }

    #[test]
    fn approve_dispatches_without_confirmation() {
        let mut presenter = presenter(1);
        let action = RemoteAction::Approve("screen-0.png".into());
        assert_eq!(
            presenter.handle(Message::RequestAction(action.clone())),
            Effect::Dispatch(action)
        );
    }

    #[test]
    fn successful_remote_action_reloads() {
        let mut presenter = presenter(1);
        let effect = presenter.handle(Message::RemoteCompleted {
            action: RemoteAction::DeleteAll,
            result: Ok(()),
        });
        assert_eq!(effect, Effect::Reload);
    }

    #[test]
    fn failed_remote_action_is_silent_by_default() {
        let mut presenter = presenter(1);
        let effect = presenter.handle(Message::RemoteCompleted {
            action: RemoteAction::DeleteAll,
            result: Err(RemoteError::Rejected { status: 500 }),
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn failed_remote_action_notifies_when_enabled() {
        let mut presenter = ComparisonPresenter::new(LayoutMetrics::default(), true);
        presenter.set_list(list_of(1));
        let effect = presenter.handle(Message::RemoteCompleted {
            action: RemoteAction::Approve("screen-0.png".into()),
            result: Err(RemoteError::Transport("refused".into())),
        });
        assert!(matches!(effect, Effect::NotifyFailure { .. }));
    }

    #[test]
    fn list_reload_resets_comparisons() {
        let mut presenter = presenter(3);
        let effect = presenter.handle(Message::OpenOverlay(2));
        complete(&mut presenter, effect);
        let _ = presenter.handle(Message::OpenInline(0));

        presenter.handle(Message::ListLoaded(list_of(2)));
        assert!(matches!(presenter.overlay(), Phase::Closed));
        assert!(matches!(presenter.inline(), Phase::Closed));
        assert!(!presenter.mask().is_visible());
        assert_eq!(presenter.cursor().current(), None);
        assert_eq!(presenter.rows().len(), 2);
    }

    #[test]
    fn rows_carry_approval_badge() {
        let mut approved = ScreenRecord::new("a.png");
        approved.approved = true;
        let mut presenter = ComparisonPresenter::default();
        presenter.set_list(ScreenList::new(vec![approved, ScreenRecord::new("b.png")]));
        let rows = presenter.rows();
        assert_eq!(rows[0].approval_key, Some("screen-approved"));
        assert_eq!(rows[1].approval_key, None);
    }

    #[test]
    fn rows_project_list_with_flags() {
        let presenter = presenter(3);
        let rows = presenter.rows();
        assert!(rows[0].record.first);
        assert!(rows[2].record.last);
        assert!(rows.iter().all(|r| !r.highlighted && !r.inline_open));
        assert_eq!(rows[1].status_key, "screen-status-above-threshold");
    }

    #[test]
    fn lifecycle_is_recorded_in_diagnostics() {
        let mut collector = DiagnosticsCollector::default();
        let mut presenter = presenter(2);
        presenter.set_diagnostics(collector.handle());

        let effect = presenter.handle(Message::OpenOverlay(0));
        complete(&mut presenter, effect);
        presenter.handle(Message::ConfirmationResolved {
            action: RemoteAction::DeleteAll,
            confirmed: false,
        });
        collector.process_pending();

        let kinds: Vec<DiagnosticEventKind> = collector.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::OpenOverlay { index: 0 }
        }));
        assert!(kinds.contains(&DiagnosticEventKind::Operation {
            operation: AppOperation::ImagesSettled {
                images: 3,
                checks: 1
            }
        }));
        assert!(kinds.contains(&DiagnosticEventKind::UserAction {
            action: UserAction::ConfirmationDeclined {
                remote_action: "deleteAll".to_string()
            }
        }));
    }
}
