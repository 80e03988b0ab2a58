// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyState};
use ui_events::pointer::PointerType;
use vantage_event_state::drag::DragEnd;
use vantage_view2d::{
    ContentBounds, TransformApplier, TransformSink, Viewport, ViewportConfig, ZoomDirection,
};

use crate::ViewIntent;
use crate::tracker::{HitTarget, InputTracker};

/// Owns a viewport, its transform applier and an input tracker, and runs the
/// intent → viewport → clamp → applier chain for each input.
///
/// Every mutation ends with exactly one write to the sink. Scale changes and
/// resets also report the new zoom level. Eased transitions are suppressed for
/// the lifetime of a drag session.
#[derive(Debug)]
pub struct ViewController<S> {
    viewport: Viewport,
    applier: TransformApplier<S>,
    tracker: InputTracker,
}

impl<S: TransformSink> ViewController<S> {
    /// Creates a controller writing to `sink`.
    pub fn new(config: &ViewportConfig, sink: S) -> Self {
        Self {
            viewport: Viewport::new(config),
            applier: TransformApplier::new(sink, config.settle_transition),
            tracker: InputTracker::new(config.drag_threshold),
        }
    }

    /// The viewport.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The transform applier.
    pub fn applier(&self) -> &TransformApplier<S> {
        &self.applier
    }

    /// The input tracker.
    pub fn tracker(&self) -> &InputTracker {
        &self.tracker
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        self.applier.sink()
    }

    /// Mutably borrow the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        self.applier.sink_mut()
    }

    /// Applies `intent` and writes the result.
    pub fn apply(&mut self, intent: ViewIntent) {
        #[cfg(feature = "tracing")]
        tracing::trace!(?intent, "view.intent");
        intent.apply_to(&mut self.viewport);
        if intent.changes_scale() {
            self.applier.write_with_zoom(&self.viewport.state());
        } else {
            self.applier.write(&self.viewport.state());
        }
    }

    /// Zoom-in control.
    pub fn zoom_in(&mut self) {
        self.apply(ViewIntent::ZoomStep(ZoomDirection::In));
    }

    /// Zoom-out control.
    pub fn zoom_out(&mut self) {
        self.apply(ViewIntent::ZoomStep(ZoomDirection::Out));
    }

    /// Reset-view control.
    pub fn reset(&mut self) {
        self.apply(ViewIntent::Reset);
    }

    /// The container was resized: re-clamp and write.
    pub fn resize(&mut self, container: Size) {
        self.viewport.set_container(container);
        self.applier.write(&self.viewport.state());
    }

    /// The content was (re)measured: re-clamp and write.
    pub fn set_content(&mut self, content: ContentBounds) {
        self.viewport.set_content(content);
        self.applier.write(&self.viewport.state());
    }

    /// New content finished loading: remeasure, then reset with one write.
    pub fn load_content(&mut self, content: ContentBounds) {
        self.viewport.set_content(content);
        self.apply(ViewIntent::Reset);
    }

    /// Pointer-down or touch-start. Returns `true` if a drag started, in which
    /// case the platform's default action should be prevented.
    pub fn pointer_down(
        &mut self,
        position: Point,
        target: HitTarget,
        pointer_type: PointerType,
    ) -> bool {
        let started = self.tracker.pointer_down(position, target, pointer_type);
        if started {
            self.applier.suppress_transitions();
        }
        started
    }

    /// Pointer-move or touch-move. Returns `true` if the view panned.
    pub fn pointer_move(&mut self, position: Point, pointer_type: PointerType) -> bool {
        match self.tracker.pointer_move(position, pointer_type) {
            Some(intent) => {
                self.apply(intent);
                true
            }
            None => false,
        }
    }

    /// Pointer-up or touch-end.
    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        let end = self.tracker.pointer_up();
        self.end_drag(end)
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) -> Option<DragEnd> {
        let end = self.tracker.pointer_leave();
        self.end_drag(end)
    }

    /// Wheel event at `position`. The platform's default scrolling is always
    /// prevented on the surface, so there is nothing to return.
    pub fn wheel(&mut self, delta: &ScrollDelta, position: Point) {
        if let Some(intent) = self.tracker.wheel(delta, position) {
            self.apply(intent);
        }
    }

    /// Key event. Returns `true` if the key was handled and its default action
    /// must be prevented.
    pub fn key(&mut self, key: &Key, state: KeyState) -> bool {
        match self.tracker.key(key, state) {
            Some(intent) => {
                self.apply(intent);
                true
            }
            None => false,
        }
    }

    /// A click arrived. Returns `true` if it should activate its target.
    pub fn click(&mut self) -> bool {
        self.tracker.click()
    }

    /// A context menu was requested on the surface. Always handled (suppressed).
    pub fn context_menu(&self) -> bool {
        true
    }

    fn end_drag(&mut self, end: Option<DragEnd>) -> Option<DragEnd> {
        if end.is_some() {
            self.applier.restore_transitions();
        }
        end
    }
}
