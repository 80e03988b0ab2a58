// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vantage Widgets: pan/zoom widget assemblies.
//!
//! Two widgets built from the other Vantage crates, with no dependency on a
//! particular UI toolkit. The host feeds in pointer, wheel and key events and
//! receives transforms through a [`vantage_view2d::TransformSink`].
//!
//! - [`TreeView`]: a hierarchy loaded with [`load_hierarchy_path`], shown one
//!   level deep, expanded and collapsed by double activation, with a detail
//!   popup on single activation.
//! - [`ImageViewer`]: a single embedded graphic, reset to the center once its
//!   size is known.
//!
//! Failing to load a hierarchy is fatal to the tree view
//! ([`HierarchyLoadError`]); there is nothing to fall back to.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Affine, Size};
//! use vantage_outline::RowLayout;
//! use vantage_view2d::ViewportConfig;
//! use vantage_widgets::{Activated, Control, TreeView, load_hierarchy_str};
//!
//! let data = load_hierarchy_str(
//!     r#"{ "name": "Root", "children": [ { "name": "A", "children": [ { "name": "A1" } ] } ] }"#,
//! )?;
//! let mut tree = TreeView::new(data, &ViewportConfig::tree(), Affine::IDENTITY, RowLayout::default());
//! tree.resize(Size::new(1_024.0, 768.0));
//!
//! let root = tree.outline().root();
//! let a = tree.outline().children(root).unwrap().ids()[0];
//! assert_eq!(tree.activate(a, 2), Activated::Toggled(a, true));
//!
//! tree.control(Control::CollapseAll);
//! assert_eq!(tree.outline().visible_nodes().len(), 1);
//! # Ok::<(), vantage_widgets::HierarchyLoadError>(())
//! ```

mod controls;
mod image_viewer;
mod loader;
mod tree_view;

pub use controls::{Control, Theme};
pub use image_viewer::{INSTRUCTIONS, INSTRUCTIONS_DISPLAY_MS, ImageViewer};
pub use loader::{
    HierarchyLoadError, load_hierarchy_path, load_hierarchy_str, load_viewport_config,
};
pub use tree_view::{Activated, TREE_MARGIN, TreeView};
