// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A pan/zoom viewer for one embedded graphic.

use kurbo::{Point, Size};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyState};
use ui_events::pointer::PointerType;
use vantage_transform_encoder::{HitTarget, ViewController};
use vantage_view2d::{ContentBounds, TransformSink, ViewportConfig};

use crate::controls::Control;

/// Help lines shown over a freshly opened viewer.
pub const INSTRUCTIONS: [&str; 5] = [
    "Click and drag to pan",
    "Mouse wheel to zoom",
    "+ / - buttons to zoom",
    "Reset button to center",
    "Keyboard: +/- to zoom, arrows to pan, 0 to reset",
];

/// How long [`INSTRUCTIONS`] stay up before fading, in milliseconds.
pub const INSTRUCTIONS_DISPLAY_MS: u32 = 5_000;

/// Pan/zoom over a single graphic with no interactive parts.
///
/// The whole surface is background: every press may start a drag.
#[derive(Debug)]
pub struct ImageViewer<S> {
    view: ViewController<S>,
}

impl<S: TransformSink> ImageViewer<S> {
    /// Creates a viewer over content of the given size and resets the view.
    pub fn new(content: ContentBounds, config: &ViewportConfig, sink: S) -> Self {
        let mut viewer = Self {
            view: ViewController::new(config, sink),
        };
        viewer.content_loaded(content);
        viewer
    }

    /// The graphic finished loading, or was replaced: remeasure and reset.
    pub fn content_loaded(&mut self, content: ContentBounds) {
        tracing::debug!(width = content.width, height = content.height, "widgets.image_loaded");
        self.view.load_content(content);
    }

    /// Remeasures from the graphic's own attributes, then the host element,
    /// then the fallback size, and resets.
    pub fn measure(&mut self, intrinsic: Option<ContentBounds>, element: Option<Size>) {
        self.content_loaded(ContentBounds::resolve(intrinsic, element));
    }

    /// The view controller.
    pub fn view(&self) -> &ViewController<S> {
        &self.view
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        self.view.sink()
    }

    /// Runs a view control. Returns `false` for controls this viewer does not offer.
    pub fn control(&mut self, control: Control) -> bool {
        match control {
            Control::ZoomIn => self.view.zoom_in(),
            Control::ZoomOut => self.view.zoom_out(),
            Control::ResetView => self.view.reset(),
            _ => return false,
        }
        true
    }

    /// The container was resized.
    pub fn resize(&mut self, container: Size) {
        self.view.resize(container);
    }

    /// Pointer-down. Returns `true` if a drag started.
    pub fn pointer_down(&mut self, position: Point, pointer_type: PointerType) -> bool {
        self.view
            .pointer_down(position, HitTarget::Background, pointer_type)
    }

    /// Pointer-move. Returns `true` if the view panned.
    pub fn pointer_move(&mut self, position: Point, pointer_type: PointerType) -> bool {
        self.view.pointer_move(position, pointer_type)
    }

    /// Pointer-up.
    pub fn pointer_up(&mut self) {
        self.view.pointer_up();
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.view.pointer_leave();
    }

    /// Wheel event at `position`, in container coordinates.
    pub fn wheel(&mut self, delta: &ScrollDelta, position: Point) {
        self.view.wheel(delta, position);
    }

    /// Key event. Returns `true` if handled.
    pub fn key(&mut self, key: &Key, state: KeyState) -> bool {
        self.view.key(key, state)
    }

    /// Context menu request. Always suppressed.
    pub fn context_menu(&self) -> bool {
        self.view.context_menu()
    }
}
