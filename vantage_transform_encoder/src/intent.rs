// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use vantage_view2d::{PanDirection, Viewport, ZoomDirection};

/// A viewport change requested by the user, independent of the input that produced it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ViewIntent {
    /// Translate by a pointer delta (drag).
    PanBy(Vec2),
    /// Pan one fixed step (arrow keys).
    PanStep(PanDirection),
    /// Zoom one step about the content center (buttons and keys).
    ZoomStep(ZoomDirection),
    /// Zoom one step for a wheel event at `pointer`, in container coordinates.
    ZoomAt {
        /// Zoom direction.
        direction: ZoomDirection,
        /// Pointer position relative to the container's top left.
        pointer: Point,
    },
    /// Return to unit scale and no translation.
    Reset,
}

impl ViewIntent {
    /// Returns `true` if applying this intent may change the scale.
    #[must_use]
    pub fn changes_scale(&self) -> bool {
        matches!(self, Self::ZoomStep(_) | Self::ZoomAt { .. } | Self::Reset)
    }

    /// Applies the intent to `viewport`. Clamping happens inside the viewport.
    pub fn apply_to(self, viewport: &mut Viewport) {
        match self {
            Self::PanBy(delta) => viewport.apply_delta(delta),
            Self::PanStep(direction) => viewport.pan_by_fixed_step(direction),
            Self::ZoomStep(direction) => viewport.zoom_by_step(direction),
            Self::ZoomAt { direction, pointer } => viewport.zoom_at(direction, pointer),
            Self::Reset => viewport.reset(),
        }
    }
}
