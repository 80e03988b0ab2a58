// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Transform Encoder: from user input to viewport changes.
//!
//! This crate is the input side of a pan/zoom surface. Raw pointer, touch,
//! wheel and keyboard samples are interpreted by an [`InputTracker`] into
//! [`ViewIntent`]s; a [`ViewController`] applies them to a
//! [`vantage_view2d::Viewport`], which clamps the result, and writes the combined
//! transform through a [`vantage_view2d::TransformApplier`].
//!
//! ## Interaction model
//!
//! - Pressing on the background starts a drag; pressing on an interactive
//!   target (a node) does not. While dragging, moves pan 1:1 and eased
//!   transitions are suppressed.
//! - A drag that moved past the threshold swallows the click that follows
//!   its release, so a pan never also activates a node.
//! - The wheel zooms one step per event, in or out by the sign of the
//!   vertical delta.
//! - `+`/`=` zoom in, `-` zooms out, `0` resets and arrows pan by a fixed step.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Point, Size};
//! use ui_events::pointer::PointerType;
//! use vantage_transform_encoder::{HitTarget, ViewController};
//! use vantage_view2d::{ContentBounds, ViewportConfig};
//!
//! let mut view = ViewController::new(&ViewportConfig::tree(), Affine::IDENTITY);
//! view.resize(Size::new(800.0, 600.0));
//! view.set_content(ContentBounds::new(2_000.0, 1_000.0));
//!
//! view.pointer_down(Point::new(100.0, 100.0), HitTarget::Background, PointerType::Mouse);
//! view.pointer_move(Point::new(140.0, 100.0), PointerType::Mouse);
//! view.pointer_up();
//!
//! assert_eq!(*view.sink(), Affine::translate((40.0, 0.0)));
//! // The release followed a real drag, so its click is swallowed.
//! assert!(!view.click());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
mod intent;
pub mod keys;
mod tracker;

pub use controller::ViewController;
pub use intent::ViewIntent;
pub use tracker::{HitTarget, InputTracker};
