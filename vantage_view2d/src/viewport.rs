// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::bounds::ContentBounds;
use crate::clamp::{ClampConfig, TranslateRange};
use crate::config::{ViewportConfig, WheelZoom};
use crate::state::ViewportState;

/// Direction of a zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Increase the scale.
    In,
    /// Decrease the scale.
    Out,
}

impl ZoomDirection {
    fn sign(self) -> f64 {
        match self {
            Self::In => 1.0,
            Self::Out => -1.0,
        }
    }
}

/// Direction of a fixed-step pan, named after the arrow key that triggers it.
///
/// The view moves toward the named direction, so the content shifts the
/// opposite way: `Left` increases the horizontal translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanDirection {
    /// Reveal content to the left.
    Left,
    /// Reveal content to the right.
    Right,
    /// Reveal content above.
    Up,
    /// Reveal content below.
    Down,
}

impl PanDirection {
    fn unit(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(1.0, 0.0),
            Self::Right => Vec2::new(-1.0, 0.0),
            Self::Up => Vec2::new(0.0, 1.0),
            Self::Down => Vec2::new(0.0, -1.0),
        }
    }
}

/// Pan/zoom state over a container, clamped against measured content.
///
/// `Viewport` owns the [`ViewportState`] and the measurements the boundary
/// clamper needs. Every mutating method leaves the state inside its
/// invariants: the scale lies within the zoom limits and the translation lies
/// within the clamp range whenever that range is computable.
///
/// Writing the result to a visual layer is left to a
/// [`TransformApplier`](crate::TransformApplier).
#[derive(Clone, Debug)]
pub struct Viewport {
    state: ViewportState,
    min_scale: f64,
    max_scale: f64,
    scale_step: f64,
    pan_step: f64,
    clamp: ClampConfig,
    wheel_zoom: WheelZoom,
    content: ContentBounds,
    container: Size,
}

impl Viewport {
    /// Creates a viewport at unit scale with no measurements yet.
    ///
    /// Until [`set_container`](Self::set_container) and
    /// [`set_content`](Self::set_content) provide real sizes, clamping is a
    /// no-op.
    #[must_use]
    pub fn new(config: &ViewportConfig) -> Self {
        let mut vp = Self {
            state: ViewportState::IDENTITY,
            min_scale: 1.0,
            max_scale: 1.0,
            scale_step: config.scale_step,
            pan_step: config.pan_step,
            clamp: config.clamp,
            wheel_zoom: config.wheel_zoom,
            content: ContentBounds::new(0.0, 0.0),
            container: Size::ZERO,
        };
        vp.set_zoom_limits(config.min_scale, config.max_scale);
        vp
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> ViewportState {
        self.state
    }

    /// Current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.state.scale
    }

    /// Current translation.
    #[must_use]
    pub fn translate(&self) -> Vec2 {
        self.state.translate
    }

    /// Zoom limits as `(min, max)`.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_scale, self.max_scale)
    }

    /// Current content measurement.
    #[must_use]
    pub fn content(&self) -> ContentBounds {
        self.content
    }

    /// Current container size.
    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    /// Wheel zoom behavior.
    #[must_use]
    pub fn wheel_zoom(&self) -> WheelZoom {
        self.wheel_zoom
    }

    /// Legal translation range for the current scale, if measurable.
    #[must_use]
    pub fn translate_range(&self) -> Option<TranslateRange> {
        self.clamp
            .translate_range(self.state.scale, self.content, self.container)
    }

    /// Sets the zoom limits. The pair is normalized so that `min <= max` and
    /// the current scale is clamped into it. Non-finite or non-positive limits
    /// are ignored.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) {
        if !(min_scale.is_finite() && max_scale.is_finite()) || min_scale <= 0.0 || max_scale <= 0.0
        {
            return;
        }
        let (min_scale, max_scale) = if min_scale <= max_scale {
            (min_scale, max_scale)
        } else {
            (max_scale, min_scale)
        };
        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.set_scale(self.state.scale);
    }

    /// Updates the container size (for example after a window resize) and re-clamps.
    pub fn set_container(&mut self, container: Size) {
        self.container = container;
        self.clamp_to_bounds();
    }

    /// Updates the content measurement (after load, expand/collapse or reload) and re-clamps.
    pub fn set_content(&mut self, content: ContentBounds) {
        self.content = content;
        self.clamp_to_bounds();
    }

    /// Adds `delta` to the translation, then clamps.
    pub fn apply_delta(&mut self, delta: Vec2) {
        if !(delta.x.is_finite() && delta.y.is_finite()) {
            return;
        }
        self.state.translate += delta;
        self.clamp_to_bounds();
    }

    /// Sets the scale, clamped into the zoom limits, then re-clamps the translation.
    ///
    /// A non-finite `scale` is ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        #[cfg(feature = "tracing")]
        Self::log_scale(self.state.scale, clamped);
        self.state.scale = clamped;
        self.clamp_to_bounds();
    }

    /// Increases the scale by one step.
    pub fn zoom_in(&mut self) {
        self.zoom_by_step(ZoomDirection::In);
    }

    /// Decreases the scale by one step.
    pub fn zoom_out(&mut self) {
        self.zoom_by_step(ZoomDirection::Out);
    }

    /// Changes the scale by one step in `direction`.
    pub fn zoom_by_step(&mut self, direction: ZoomDirection) {
        self.set_scale(self.state.scale + direction.sign() * self.scale_step);
    }

    /// Zooms one step in `direction` for a wheel event at `pointer`.
    ///
    /// `pointer` is in container coordinates (origin at the container's top
    /// left). How the translation follows depends on [`WheelZoom`].
    pub fn zoom_at(&mut self, direction: ZoomDirection, pointer: Point) {
        let target = self.state.scale + direction.sign() * self.scale_step;
        let center = Point::new(self.container.width / 2.0, self.container.height / 2.0);
        let offset = pointer - center;
        match self.wheel_zoom {
            WheelZoom::Centered => {}
            WheelZoom::Biased { factor } => {
                if offset.x.is_finite() && offset.y.is_finite() {
                    self.state.translate -= offset * factor * direction.sign();
                }
            }
            WheelZoom::Anchored => {
                let old = self.state.scale;
                let new = target.clamp(self.min_scale, self.max_scale);
                if offset.x.is_finite() && offset.y.is_finite() && old > 0.0 {
                    // Keep the content point under `offset` fixed:
                    // t' = p - (s' / s) * (p - t).
                    let ratio = new / old;
                    self.state.translate = offset - (offset - self.state.translate) * ratio;
                }
            }
        }
        self.set_scale(target);
    }

    /// Pans one fixed step in `direction`, then clamps.
    pub fn pan_by_fixed_step(&mut self, direction: PanDirection) {
        self.apply_delta(direction.unit() * self.pan_step);
    }

    /// Returns to unit scale and no translation, then clamps.
    pub fn reset(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            scale = self.state.scale,
            tx = self.state.translate.x,
            ty = self.state.translate.y,
            "viewport.reset"
        );
        self.state = ViewportState {
            scale: 1.0_f64.clamp(self.min_scale, self.max_scale),
            translate: Vec2::ZERO,
        };
        self.clamp_to_bounds();
    }

    /// Snapshot of the current viewport for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            state: self.state,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            content: self.content,
            container: self.container,
            range: self.translate_range(),
        }
    }

    #[cfg(feature = "tracing")]
    fn log_scale(from: f64, to: f64) {
        if from != to {
            tracing::debug!(from, to, "viewport.scale");
        }
    }

    fn clamp_to_bounds(&mut self) {
        self.state.translate = self.clamp.clamp_translate(
            self.state.translate,
            self.state.scale,
            self.content,
            self.container,
        );
    }
}

/// Debug snapshot of a [`Viewport`].
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Current state.
    pub state: ViewportState,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Content measurement used for clamping.
    pub content: ContentBounds,
    /// Container size used for clamping.
    pub container: Size,
    /// Translation range in effect, if measurable.
    pub range: Option<TranslateRange>,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size, Vec2};

    use super::{PanDirection, Viewport, ZoomDirection};
    use crate::bounds::ContentBounds;
    use crate::config::{ViewportConfig, WheelZoom};

    fn measured(config: &ViewportConfig) -> Viewport {
        let mut vp = Viewport::new(config);
        vp.set_container(Size::new(800.0, 600.0));
        vp.set_content(ContentBounds::new(1_600.0, 1_200.0));
        vp
    }

    #[test]
    fn zoom_steps_respect_limits() {
        let mut vp = measured(&ViewportConfig::tree());
        for _ in 0..100 {
            vp.zoom_in();
        }
        assert_eq!(vp.scale(), 3.0);
        for _ in 0..100 {
            vp.zoom_out();
        }
        assert_eq!(vp.scale(), 0.5);
    }

    #[test]
    fn set_scale_ignores_nan() {
        let mut vp = measured(&ViewportConfig::tree());
        vp.set_scale(2.0);
        vp.set_scale(f64::NAN);
        assert_eq!(vp.scale(), 2.0);
    }

    #[test]
    fn zooming_out_re_clamps_translation() {
        let mut vp = measured(&ViewportConfig::tree());
        vp.set_scale(3.0);
        // Excess at 3x is (4800 - 800) / 2 + 200 = 2200 horizontally.
        vp.apply_delta(Vec2::new(10_000.0, 0.0));
        assert_eq!(vp.translate().x, 2_200.0);
        vp.set_scale(1.0);
        assert_eq!(vp.translate().x, 600.0);
    }

    #[test]
    fn arrow_steps_move_opposite_to_content() {
        let mut vp = measured(&ViewportConfig::image());
        vp.pan_by_fixed_step(PanDirection::Left);
        assert_eq!(vp.translate(), Vec2::new(50.0, 0.0));
        vp.pan_by_fixed_step(PanDirection::Down);
        assert_eq!(vp.translate(), Vec2::new(50.0, -50.0));
    }

    #[test]
    fn reset_returns_to_identity() {
        let mut vp = measured(&ViewportConfig::image());
        vp.set_scale(4.2);
        vp.apply_delta(Vec2::new(-321.0, 77.0));
        vp.reset();
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.translate(), Vec2::ZERO);
    }

    #[test]
    fn biased_wheel_moves_toward_pointer() {
        let mut vp = measured(&ViewportConfig::image());
        // Pointer 100px right of and 50px below center.
        vp.zoom_at(ZoomDirection::In, Point::new(500.0, 350.0));
        assert!((vp.scale() - 1.2).abs() < 1e-12);
        assert!((vp.translate().x + 10.0).abs() < 1e-12);
        assert!((vp.translate().y + 5.0).abs() < 1e-12);
    }

    #[test]
    fn anchored_wheel_keeps_point_under_pointer() {
        let config = ViewportConfig {
            wheel_zoom: WheelZoom::Anchored,
            ..ViewportConfig::image()
        };
        let mut vp = measured(&config);
        let pointer = Point::new(600.0, 200.0);
        let center = Point::new(400.0, 300.0);
        let offset = pointer - center;
        let content_before = (offset - vp.translate()) / vp.scale();

        vp.zoom_at(ZoomDirection::In, pointer);

        let content_after = (offset - vp.translate()) / vp.scale();
        assert!((content_after - content_before).hypot() < 1e-9);
    }

    #[test]
    fn centered_wheel_leaves_translation() {
        let mut vp = measured(&ViewportConfig::tree());
        vp.apply_delta(Vec2::new(20.0, 20.0));
        vp.zoom_at(ZoomDirection::Out, Point::new(0.0, 0.0));
        assert_eq!(vp.translate(), Vec2::new(20.0, 20.0));
        assert!((vp.scale() - 0.9).abs() < 1e-12);
    }

    #[test]
    fn unmeasured_viewport_does_not_clamp() {
        let mut vp = Viewport::new(&ViewportConfig::tree());
        vp.apply_delta(Vec2::new(99_999.0, -99_999.0));
        assert_eq!(vp.translate(), Vec2::new(99_999.0, -99_999.0));
        assert!(vp.translate_range().is_none());
    }

    #[test]
    fn zoom_limits_are_normalized() {
        let mut vp = Viewport::new(&ViewportConfig::tree());
        vp.set_zoom_limits(4.0, 2.0);
        assert_eq!(vp.zoom_limits(), (2.0, 4.0));
        assert_eq!(vp.scale(), 2.0);
        vp.set_zoom_limits(f64::INFINITY, 1.0);
        assert_eq!(vp.zoom_limits(), (2.0, 4.0));
    }
}
