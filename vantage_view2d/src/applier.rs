// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Writing viewport state onto a visual layer.
//!
//! Interpolation is the visual layer's business. The applier only decides the
//! target transform and whether it should be reached immediately (while the
//! user is dragging, so content tracks the pointer 1:1) or through the
//! configured settle transition. A new write supersedes any transition still
//! in flight.

use kurbo::Affine;

use crate::state::{ViewTransform, ViewportState};

/// Easing curve requested from the visual layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// CSS `ease`.
    #[default]
    Ease,
    /// Circular ease-out, used for entering tree nodes.
    CircleOut,
    /// Circular ease-in, used for exiting tree nodes.
    CircleIn,
}

/// How the visual layer should reach a newly written transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum Transition {
    /// Jump straight to the target.
    Immediate,
    /// Tween toward the target.
    Eased {
        /// Duration in milliseconds.
        duration_ms: u32,
        /// Easing curve.
        easing: Easing,
    },
}

impl Transition {
    /// `transform 0.3s ease`.
    pub const SETTLE: Self = Self::Eased {
        duration_ms: 300,
        easing: Easing::Ease,
    };
}

impl Default for Transition {
    fn default() -> Self {
        Self::SETTLE
    }
}

/// Receiver of combined transforms.
pub trait TransformSink {
    /// Write `transform` to the visual layer, reaching it via `transition`.
    fn write_transform(&mut self, transform: ViewTransform, transition: Transition);

    /// The zoom level changed; `percent` is the rounded scale in percent.
    ///
    /// Called after scale changes and resets, not after pans.
    fn zoom_level_changed(&mut self, percent: u32) {
        let _ = percent;
    }
}

impl TransformSink for Affine {
    fn write_transform(&mut self, transform: ViewTransform, _transition: Transition) {
        *self = transform.to_affine();
    }
}

impl<S: TransformSink + ?Sized> TransformSink for &mut S {
    fn write_transform(&mut self, transform: ViewTransform, transition: Transition) {
        (**self).write_transform(transform, transition);
    }

    fn zoom_level_changed(&mut self, percent: u32) {
        (**self).zoom_level_changed(percent);
    }
}

/// Writes viewport state to a [`TransformSink`], suppressing eased
/// transitions while a drag is in progress.
#[derive(Debug)]
pub struct TransformApplier<S> {
    sink: S,
    settle: Transition,
    suppressed: bool,
    last: Option<ViewTransform>,
}

impl<S: TransformSink> TransformApplier<S> {
    /// Creates an applier that settles with `settle` when not suppressed.
    pub fn new(sink: S, settle: Transition) -> Self {
        Self {
            sink,
            settle,
            suppressed: false,
            last: None,
        }
    }

    /// Switch to immediate writes (drag started).
    pub fn suppress_transitions(&mut self) {
        self.suppressed = true;
    }

    /// Switch back to the settle transition (drag ended).
    pub fn restore_transitions(&mut self) {
        self.suppressed = false;
    }

    /// Returns `true` while transitions are suppressed.
    #[must_use]
    pub fn transitions_suppressed(&self) -> bool {
        self.suppressed
    }

    /// The transition the next write will request.
    #[must_use]
    pub fn current_transition(&self) -> Transition {
        if self.suppressed {
            Transition::Immediate
        } else {
            self.settle
        }
    }

    /// Writes the combined transform for `state`.
    pub fn write(&mut self, state: &ViewportState) {
        let transform = state.transform();
        self.last = Some(transform);
        let transition = self.current_transition();
        self.sink.write_transform(transform, transition);
    }

    /// Writes the transform for `state` and reports the new zoom level.
    pub fn write_with_zoom(&mut self, state: &ViewportState) {
        self.write(state);
        self.sink.zoom_level_changed(zoom_percent(state.scale));
    }

    /// The last transform written, if any.
    #[must_use]
    pub fn last_written(&self) -> Option<ViewTransform> {
        self.last
    }

    /// Borrow the sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Mutably borrow the sink.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Consume the applier, returning the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }
}

/// Rounds `scale` to a whole percentage for display.
#[must_use]
pub fn zoom_percent(scale: f64) -> u32 {
    if !scale.is_finite() || scale <= 0.0 {
        return 0;
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "scale is bounded by the zoom limits, far below u32::MAX / 100"
    )]
    let percent = (scale * 100.0 + 0.5) as u32;
    percent
}
