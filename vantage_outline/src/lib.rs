// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Outline: expansion state for hierarchy views.
//!
//! An [`Outline`] holds a hierarchy loaded from [`NodeData`] and tracks which
//! nodes show their children. Each node's children are either all shown or all
//! hidden behind one collapsed marker ([`Children`]); there is no partial state.
//!
//! - [`Outline::collapse`] hides a node's subtree, giving every descendant its
//!   own collapsed marker first, so expanding again reveals one level.
//! - [`Outline::expand`] reveals one level, [`Outline::expand_all`] a whole subtree.
//! - [`Outline::collapse_all`] reaches the canonical fully collapsed state from
//!   any prior state.
//! - [`Outline::toggle`] is the double-activation swap; descendants keep their state.
//!
//! Layout is delegated: after a change, [`Outline::relayout`] asks a
//! [`LayoutHost`] for positions of the visible nodes, anchored at the node the
//! user touched, and caches them as [`NodePosition`]s. [`Outline::layout_extent`]
//! then gives the content bounds for a viewport.
//!
//! ## Minimal example
//!
//! ```rust
//! use vantage_outline::{NodeData, Outline, RowLayout};
//!
//! let data = NodeData::branch(
//!     "Languages",
//!     [
//!         NodeData::branch("Systems", [NodeData::leaf("Rust"), NodeData::leaf("C")]),
//!         NodeData::leaf("Scripting"),
//!     ],
//! );
//! let mut outline = Outline::with_first_level(data);
//! let mut layout = RowLayout::default();
//! let root = outline.root();
//! outline.relayout(&mut layout, root);
//! assert_eq!(outline.visible_nodes().len(), 3);
//!
//! // Double activation on "Systems".
//! let systems = outline.children(root).unwrap().ids()[0];
//! assert!(outline.toggle(systems));
//! outline.relayout(&mut layout, systems);
//! assert_eq!(outline.visible_nodes().len(), 5);
//!
//! let detail = outline.detail(systems).unwrap();
//! assert_eq!(detail.lines()[..3], ["Node: Systems", "Depth: 1", "Child nodes: 2"]);
//! ```
//!
//! This crate is `no_std` + `alloc`.

#![no_std]

extern crate alloc;

mod data;
mod detail;
pub mod label;
mod layout;
mod outline;
mod types;

pub use data::NodeData;
pub use detail::NodeDetail;
pub use layout::{DEPTH_SPACING, LayoutHost, RelayoutRequest, RowLayout, TRANSITION_DURATION_MS};
pub use outline::Outline;
pub use types::{Children, NodeFlags, NodeId, NodePosition, VisibleNode};
