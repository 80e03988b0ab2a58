// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage View 2D: headless pan/zoom viewport state.
//!
//! This crate models the visible window onto a larger canvas the way a
//! transformed wrapper element does: a uniform scale about the content center
//! plus a translation in container units. It provides:
//! - [`ViewportState`] and the combined [`ViewTransform`] written to the visual layer.
//! - [`Viewport`]: scale limits, zoom steps, wheel zoom, fixed-step panning and reset.
//! - [`ClampConfig`]: the boundary clamper, which keeps some content visible
//!   at either extreme while allowing limited slack when the content fits.
//! - [`ContentBounds`]: content measurement, including SVG intrinsic size.
//! - [`TransformApplier`]: writes transforms to a [`TransformSink`], immediately
//!   while dragging and through the settle [`Transition`] otherwise.
//!
//! It does **not** interpret input events; see `vantage_transform_encoder`
//! for the input tracker and controller built on top of this crate.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use vantage_view2d::{ContentBounds, Transition, TransformApplier, Viewport, ViewportConfig};
//!
//! let config = ViewportConfig::image();
//! let mut viewport = Viewport::new(&config);
//! viewport.set_container(Size::new(800.0, 600.0));
//! viewport.set_content(ContentBounds::new(1200.0, 900.0));
//!
//! // Pan far to the right; the clamper keeps 100 units of content visible.
//! viewport.apply_delta(Vec2::new(10_000.0, 0.0));
//! assert_eq!(viewport.translate().x, 300.0);
//!
//! // Write the result to a visual layer; here the sink is a plain affine.
//! let mut applier = TransformApplier::new(kurbo::Affine::IDENTITY, Transition::SETTLE);
//! applier.write(&viewport.state());
//! ```
//!
//! ## Clamping rules
//!
//! For each axis, with `scaled = content * scale`:
//! - if `scaled > container`, the translation may range over
//!   `±((scaled - container) / 2 + margin)`;
//! - otherwise it may range over `±fit_allowance`.
//!
//! Clamping is skipped entirely while any measurement is zero or non-finite
//! (the container is usually unsized before the first layout), and per axis
//! when the computed range would be inverted.
//!
//! This crate is `no_std`.

#![no_std]

mod applier;
mod bounds;
mod clamp;
mod config;
mod state;
mod viewport;

pub use applier::{Easing, TransformApplier, TransformSink, Transition, zoom_percent};
pub use bounds::ContentBounds;
pub use clamp::{AxisRange, ClampConfig, TranslateRange};
pub use config::{ViewportConfig, WheelZoom};
pub use state::{ViewTransform, ViewportState};
pub use viewport::{PanDirection, Viewport, ViewportDebugInfo, ZoomDirection};
