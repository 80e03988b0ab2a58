// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Boundary clamping: the legal translation range for a given scale.

use kurbo::{Size, Vec2};

use crate::bounds::ContentBounds;

/// Tuning for the boundary clamper.
///
/// Both values are in container units. The defaults match the tree view;
/// [`ClampConfig::IMAGE`] holds the embedded-image viewer's values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(default))]
pub struct ClampConfig {
    /// How much content must stay visible at either extreme when the scaled
    /// content overflows the container.
    pub margin: f64,
    /// Symmetric repositioning room when the scaled content already fits.
    pub fit_allowance: f64,
}

impl ClampConfig {
    /// Clamp tuning used by hierarchy views.
    pub const TREE: Self = Self {
        margin: 200.0,
        fit_allowance: 300.0,
    };

    /// Clamp tuning used by the embedded-image viewer.
    pub const IMAGE: Self = Self {
        margin: 100.0,
        fit_allowance: 200.0,
    };

    /// Computes the legal translation interval along one axis.
    ///
    /// Returns `None` when the inputs are not usable measurements or when the
    /// resulting interval would be inverted or non-finite.
    #[must_use]
    pub fn axis_range(&self, content: f64, container: f64, scale: f64) -> Option<AxisRange> {
        if !is_measurement(content) || !is_measurement(container) || !is_measurement(scale) {
            return None;
        }
        let scaled = content * scale;
        let range = if scaled > container {
            let half_excess = (scaled - container) / 2.0;
            AxisRange {
                min: -half_excess - self.margin,
                max: half_excess + self.margin,
            }
        } else {
            AxisRange {
                min: -self.fit_allowance,
                max: self.fit_allowance,
            }
        };
        range.is_valid().then_some(range)
    }

    /// Computes the legal translation ranges for both axes.
    ///
    /// Returns `None` when any measurement is missing (zero, negative or
    /// non-finite), which happens routinely before the first layout.
    #[must_use]
    pub fn translate_range(
        &self,
        scale: f64,
        content: ContentBounds,
        container: Size,
    ) -> Option<TranslateRange> {
        if !is_measurement(scale)
            || !content.is_measurable()
            || !is_measurement(container.width)
            || !is_measurement(container.height)
        {
            return None;
        }
        Some(TranslateRange {
            x: self.axis_range(content.width, container.width, scale),
            y: self.axis_range(content.height, container.height, scale),
        })
    }

    /// Clamps `translate` into the legal range.
    ///
    /// Axes without a usable range are left untouched.
    #[must_use]
    pub fn clamp_translate(
        &self,
        translate: Vec2,
        scale: f64,
        content: ContentBounds,
        container: Size,
    ) -> Vec2 {
        match self.translate_range(scale, content, container) {
            Some(range) => range.clamp(translate),
            None => translate,
        }
    }
}

impl Default for ClampConfig {
    fn default() -> Self {
        Self::TREE
    }
}

/// Closed interval of legal translation along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
}

impl AxisRange {
    /// Returns `true` when both ends are finite and `min <= max`.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    /// Clamps `value` into the interval.
    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    /// Returns `true` if `value` lies within the interval.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Per-axis translation ranges. An axis without a range is not clamped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateRange {
    /// Horizontal range.
    pub x: Option<AxisRange>,
    /// Vertical range.
    pub y: Option<AxisRange>,
}

impl TranslateRange {
    /// Clamps both components of `translate`.
    #[must_use]
    pub fn clamp(&self, translate: Vec2) -> Vec2 {
        Vec2::new(
            self.x.map_or(translate.x, |r| r.clamp(translate.x)),
            self.y.map_or(translate.y, |r| r.clamp(translate.y)),
        )
    }
}

fn is_measurement(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use kurbo::{Size, Vec2};

    use super::{AxisRange, ClampConfig};
    use crate::bounds::ContentBounds;

    #[test]
    fn overflowing_axis_allows_half_excess_plus_margin() {
        let cfg = ClampConfig::IMAGE;
        // 1000 * 2 - 800 = 1200 excess, half is 600.
        let r = cfg.axis_range(1000.0, 800.0, 2.0).unwrap();
        assert_eq!(
            r,
            AxisRange {
                min: -700.0,
                max: 700.0
            }
        );
    }

    #[test]
    fn fitting_axis_uses_fixed_allowance() {
        let cfg = ClampConfig::TREE;
        let r = cfg.axis_range(400.0, 800.0, 1.0).unwrap();
        assert_eq!(
            r,
            AxisRange {
                min: -300.0,
                max: 300.0
            }
        );
    }

    #[test]
    fn unmeasured_container_is_a_no_op() {
        let cfg = ClampConfig::default();
        let t = Vec2::new(5_000.0, -5_000.0);
        let content = ContentBounds::new(800.0, 600.0);
        assert_eq!(cfg.clamp_translate(t, 1.0, content, Size::ZERO), t);
        assert_eq!(
            cfg.clamp_translate(t, 1.0, content, Size::new(f64::NAN, 300.0)),
            t
        );
        assert_eq!(
            cfg.clamp_translate(t, 1.0, ContentBounds::new(0.0, 0.0), Size::new(800.0, 600.0)),
            t
        );
    }

    #[test]
    fn inverted_range_skips_only_that_axis() {
        // A negative allowance would invert the range for fitting content.
        let cfg = ClampConfig {
            margin: 100.0,
            fit_allowance: -50.0,
        };
        let content = ContentBounds::new(2_000.0, 100.0);
        let container = Size::new(800.0, 600.0);
        let range = cfg.translate_range(1.0, content, container).unwrap();
        assert!(range.x.is_some());
        assert!(range.y.is_none());

        let clamped = cfg.clamp_translate(Vec2::new(9_000.0, 9_000.0), 1.0, content, container);
        assert_eq!(clamped, Vec2::new(700.0, 9_000.0));
    }

    #[test]
    fn clamp_pulls_translation_inside() {
        let cfg = ClampConfig::TREE;
        let content = ContentBounds::new(1_600.0, 1_200.0);
        let container = Size::new(800.0, 600.0);
        let clamped = cfg.clamp_translate(Vec2::new(-10_000.0, 10_000.0), 1.0, content, container);
        assert_eq!(clamped, Vec2::new(-600.0, 500.0));
    }
}
