// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Event State: interaction state machines for pan/zoom surfaces.
//!
//! This crate provides the small stateful pieces that sit between raw pointer
//! events and a viewport:
//!
//! - [`drag`]: a [`drag::DragSession`] tracks one press-move-release interaction,
//!   reports per-sample deltas, and decides whether the interaction moved far
//!   enough to count as a drag rather than a click.
//! - [`click`]: [`click::Activation`] separates single from double activations,
//!   [`click::ClickCounter`] derives click counts for platforms that do not
//!   report them, and [`click::ClickSuppressor`] swallows the click a browser-style
//!   platform synthesizes after a drag ends.
//!
//! Nothing here knows about viewports or hierarchies. The controller in
//! `vantage_transform_encoder` composes these pieces with `vantage_view2d`.
//!
//! ## Drag then click
//!
//! ```rust
//! # #[cfg(all(feature = "drag", feature = "click"))]
//! # fn example() {
//! use kurbo::Point;
//! use vantage_event_state::click::ClickSuppressor;
//! use vantage_event_state::drag::DragSession;
//!
//! let mut drag = DragSession::default();
//! let mut suppress = ClickSuppressor::default();
//!
//! drag.start(Point::new(0.0, 0.0));
//! drag.update(Point::new(40.0, 0.0));
//! if drag.end().is_some_and(|end| end.moved) {
//!     suppress.arm();
//! }
//!
//! // The click that follows the release is swallowed exactly once.
//! assert!(suppress.take());
//! assert!(!suppress.take());
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: drag sessions (requires `kurbo`).
//! - `click`: click discrimination (requires `kurbo`).
//! - `tracing`: emit `tracing` events as sessions start moving.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "click")]
pub mod click;

#[cfg(feature = "drag")]
pub mod drag;
