// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Content measurement.

use kurbo::{Rect, Size};

/// Extent of the pannable content at scale 1.
///
/// Content bounds are either inspected from the rendered content (for
/// example an embedded SVG's intrinsic size) or derived from a laid-out
/// hierarchy. Recompute them whenever the content changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContentBounds {
    /// Width in content units.
    pub width: f64,
    /// Height in content units.
    pub height: f64,
}

impl ContentBounds {
    /// Size assumed for embedded graphics that report nothing usable.
    pub const FALLBACK: Self = Self::new(800.0, 600.0);

    /// Creates bounds from a width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Bounds covering the extent of a laid-out rectangle.
    #[must_use]
    pub fn from_extent(extent: Rect) -> Self {
        Self::new(extent.width(), extent.height())
    }

    /// Returns the bounds as a [`Size`].
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns `true` if both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    /// Reads intrinsic dimensions from an SVG root element's attributes.
    ///
    /// The `viewBox` wins when it carries a non-zero width and height.
    /// Otherwise the `width` and `height` attributes are read, accepting unit
    /// suffixes such as `"640px"`.
    ///
    /// ```rust
    /// use vantage_view2d::ContentBounds;
    ///
    /// let b = ContentBounds::from_svg_attributes(Some("0 0 1200 900"), None, None);
    /// assert_eq!(b, Some(ContentBounds::new(1200.0, 900.0)));
    ///
    /// let b = ContentBounds::from_svg_attributes(None, Some("640px"), Some("480"));
    /// assert_eq!(b, Some(ContentBounds::new(640.0, 480.0)));
    /// ```
    #[must_use]
    pub fn from_svg_attributes(
        view_box: Option<&str>,
        width: Option<&str>,
        height: Option<&str>,
    ) -> Option<Self> {
        if let Some(view_box) = view_box {
            let mut parts = view_box
                .split(|c: char| c.is_ascii_whitespace() || c == ',')
                .filter(|p| !p.is_empty())
                .map(|p| p.parse::<f64>().ok());
            let _x = parts.next();
            let _y = parts.next();
            let w = parts.next().flatten();
            let h = parts.next().flatten();
            if let (Some(w), Some(h)) = (w, h)
                && is_nonzero(w)
                && is_nonzero(h)
            {
                return Some(Self::new(w, h));
            }
            // A viewBox without usable dimensions does not fall through to
            // the width/height attributes.
            return None;
        }
        let w = width.and_then(parse_leading_float)?;
        let h = height.and_then(parse_leading_float)?;
        (is_nonzero(w) && is_nonzero(h)).then(|| Self::new(w, h))
    }

    /// Resolves the best available measurement.
    ///
    /// Preference order: intrinsic size, then the measured size of the host
    /// element, then [`ContentBounds::FALLBACK`].
    #[must_use]
    pub fn resolve(intrinsic: Option<Self>, element: Option<Size>) -> Self {
        if let Some(b) = intrinsic {
            return b;
        }
        match element {
            Some(size) if size.width > 0.0 && size.height > 0.0 => {
                Self::new(size.width, size.height)
            }
            _ => Self::FALLBACK,
        }
    }
}

impl From<Size> for ContentBounds {
    fn from(size: Size) -> Self {
        Self::new(size.width, size.height)
    }
}

fn is_nonzero(v: f64) -> bool {
    v.is_finite() && v != 0.0
}

/// Parses the longest numeric prefix of `s`, ignoring leading whitespace.
fn parse_leading_float(s: &str) -> Option<f64> {
    let s = s.trim_start();
    let end = s
        .char_indices()
        .find(|&(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(s.len(), |(i, _)| i);
    let mut candidate = &s[..end];
    while !candidate.is_empty() {
        if let Ok(v) = candidate.parse::<f64>() {
            return Some(v);
        }
        candidate = &candidate[..candidate.len() - 1];
    }
    None
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Size};

    use super::{ContentBounds, parse_leading_float};

    #[test]
    fn view_box_accepts_commas() {
        assert_eq!(
            ContentBounds::from_svg_attributes(Some("0,0,300,150"), Some("10"), Some("10")),
            Some(ContentBounds::new(300.0, 150.0))
        );
    }

    #[test]
    fn degenerate_view_box_yields_none() {
        assert_eq!(
            ContentBounds::from_svg_attributes(Some("0 0 0 150"), None, None),
            None
        );
        assert_eq!(
            ContentBounds::from_svg_attributes(Some("garbage"), None, None),
            None
        );
    }

    #[test]
    fn leading_float_parsing() {
        assert_eq!(parse_leading_float("640px"), Some(640.0));
        assert_eq!(parse_leading_float("  12.5em"), Some(12.5));
        assert_eq!(parse_leading_float("1e3"), Some(1000.0));
        assert_eq!(parse_leading_float("3e"), Some(3.0));
        assert_eq!(parse_leading_float("auto"), None);
        assert_eq!(parse_leading_float(""), None);
    }

    #[test]
    fn resolve_prefers_intrinsic_then_element_then_fallback() {
        let intrinsic = Some(ContentBounds::new(10.0, 20.0));
        assert_eq!(
            ContentBounds::resolve(intrinsic, Some(Size::new(1.0, 1.0))),
            ContentBounds::new(10.0, 20.0)
        );
        assert_eq!(
            ContentBounds::resolve(None, Some(Size::new(30.0, 40.0))),
            ContentBounds::new(30.0, 40.0)
        );
        assert_eq!(
            ContentBounds::resolve(None, Some(Size::ZERO)),
            ContentBounds::FALLBACK
        );
        assert_eq!(ContentBounds::resolve(None, None), ContentBounds::FALLBACK);
    }

    #[test]
    fn extent_bounds() {
        let b = ContentBounds::from_extent(Rect::new(-50.0, 10.0, 150.0, 60.0));
        assert_eq!(b, ContentBounds::new(200.0, 50.0));
        assert!(b.is_measurable());
        assert!(!ContentBounds::new(0.0, 10.0).is_measurable());
    }
}
