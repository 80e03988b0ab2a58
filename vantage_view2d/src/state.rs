// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Vec2};

/// Scale and translation of the pannable content.
///
/// The translation is measured in container units from the centered resting
/// position, and the scale is applied about the content center. This is the
/// model of a wrapper element styled with `translate(..) scale(..)` and a
/// centered transform origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Uniform scale factor.
    pub scale: f64,
    /// Translation in container units.
    pub translate: Vec2,
}

impl ViewportState {
    /// The resting state: unit scale, no translation.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        translate: Vec2::ZERO,
    };

    /// Returns the combined transform for this state.
    #[must_use]
    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            translate: self.translate,
            scale: self.scale,
        }
    }
}

impl Default for ViewportState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A single combined `translate(tx, ty) scale(s)` transform.
///
/// This is the value handed to the visual layer after every mutation. Its
/// [`Display`](fmt::Display) output is a CSS transform string:
///
/// ```rust
/// use kurbo::Vec2;
/// use vantage_view2d::ViewTransform;
///
/// let t = ViewTransform { translate: Vec2::new(12.5, -4.0), scale: 1.5 };
/// assert_eq!(t.to_string(), "translate(12.5px, -4px) scale(1.5)");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    /// Translation in container units.
    pub translate: Vec2,
    /// Uniform scale factor.
    pub scale: f64,
}

impl ViewTransform {
    /// Converts the transform into an affine map (translation applied after scale).
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }
}

impl fmt::Display for ViewTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding zero folds `-0.0` into `0.0` so resets print as `0px`.
        write!(
            f,
            "translate({}px, {}px) scale({})",
            self.translate.x + 0.0,
            self.translate.y + 0.0,
            self.scale
        )
    }
}
