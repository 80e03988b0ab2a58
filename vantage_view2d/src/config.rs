// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::applier::Transition;
use crate::clamp::ClampConfig;

/// How a wheel step moves the translation alongside the scale change.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(tag = "mode", rename_all = "snake_case")
)]
pub enum WheelZoom {
    /// Scale only; the translation is left as is.
    #[default]
    Centered,
    /// Nudge the translation toward the pointer by a fraction of its offset
    /// from the container center, then scale.
    Biased {
        /// Fraction of the pointer's offset from center applied per step.
        factor: f64,
    },
    /// Exact zoom-to-point: the content under the pointer stays put.
    Anchored,
}

/// Configuration for a [`Viewport`](crate::Viewport) and its controller.
///
/// The defaults are those of the tree view; [`ViewportConfig::image`] gives
/// the embedded-image viewer's tuning.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ViewportConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Scale change per zoom step (buttons, keys and wheel notches).
    pub scale_step: f64,
    /// Translation change per arrow-key press.
    pub pan_step: f64,
    /// Cumulative pointer travel after which a press counts as a drag.
    pub drag_threshold: f64,
    /// Boundary clamp tuning.
    pub clamp: ClampConfig,
    /// Wheel zoom behavior.
    pub wheel_zoom: WheelZoom,
    /// Transition used for writes outside an active drag.
    pub settle_transition: Transition,
}

impl ViewportConfig {
    /// Tuning for hierarchy views.
    #[must_use]
    pub const fn tree() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            scale_step: 0.1,
            pan_step: 50.0,
            drag_threshold: 3.0,
            clamp: ClampConfig::TREE,
            wheel_zoom: WheelZoom::Centered,
            settle_transition: Transition::SETTLE,
        }
    }

    /// Tuning for the embedded-image viewer.
    #[must_use]
    pub const fn image() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 5.0,
            scale_step: 0.2,
            pan_step: 50.0,
            drag_threshold: 3.0,
            clamp: ClampConfig::IMAGE,
            wheel_zoom: WheelZoom::Biased { factor: 0.1 },
            settle_transition: Transition::SETTLE,
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::tree()
    }
}
