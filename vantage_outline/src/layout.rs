// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The seam to the layout collaborator.
//!
//! Laying out nodes and drawing links belongs to the rendering library. After
//! each expansion change the outline asks a [`LayoutHost`] for fresh positions
//! of the visible nodes, naming the node the user interacted with so entering
//! nodes can animate out of its last known position.

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Point;

use crate::outline::Outline;
use crate::types::NodeId;

/// Horizontal distance between depth levels.
pub const DEPTH_SPACING: f64 = 180.0;

/// Duration of node enter, update and exit transitions, in milliseconds.
pub const TRANSITION_DURATION_MS: u32 = 750;

/// A request to lay out the visible tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RelayoutRequest {
    /// The node that anchors the transition.
    pub anchor: NodeId,
    /// Where the anchor was before this relayout; `None` on first layout.
    pub anchor_position: Option<Point>,
}

/// Lays out an outline's visible nodes.
pub trait LayoutHost {
    /// Returns the new position of every visible node.
    fn relayout(&mut self, outline: &Outline, request: &RelayoutRequest) -> Vec<(NodeId, Point)>;
}

impl<H: LayoutHost + ?Sized> LayoutHost for &mut H {
    fn relayout(&mut self, outline: &Outline, request: &RelayoutRequest) -> Vec<(NodeId, Point)> {
        (**self).relayout(outline, request)
    }
}

/// A simple left-to-right tree layout.
///
/// Depth runs along `x` at [`depth_spacing`](Self::depth_spacing) per level.
/// Visible leaves take consecutive rows along `y`, and each parent is centered
/// between its first and last visible child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RowLayout {
    /// Distance between leaf rows.
    pub row_height: f64,
    /// Distance between depth levels.
    pub depth_spacing: f64,
}

impl RowLayout {
    /// Creates a layout with the given row height and [`DEPTH_SPACING`].
    #[must_use]
    pub const fn new(row_height: f64) -> Self {
        Self {
            row_height,
            depth_spacing: DEPTH_SPACING,
        }
    }
}

fn visible_children(outline: &Outline, id: NodeId) -> &[NodeId] {
    outline.children(id).map(|c| c.visible()).unwrap_or(&[])
}

impl Default for RowLayout {
    fn default() -> Self {
        Self::new(40.0)
    }
}

impl LayoutHost for RowLayout {
    fn relayout(&mut self, outline: &Outline, _request: &RelayoutRequest) -> Vec<(NodeId, Point)> {
        let visible = outline.visible_nodes();
        let slots: HashMap<NodeId, usize> = visible
            .iter()
            .enumerate()
            .map(|(slot, node)| (node.id, slot))
            .collect();

        let mut out = Vec::with_capacity(visible.len());
        let mut next_row = 0.0;
        for node in &visible {
            let x = f64::from(node.depth) * self.depth_spacing;
            let mut y = 0.0;
            if visible_children(outline, node.id).is_empty() {
                y = next_row * self.row_height;
                next_row += 1.0;
            }
            out.push((node.id, Point::new(x, y)));
        }

        // Pre-order puts children after their parent, so walking backwards
        // settles every child before the parent that centers on it.
        for slot in (0..out.len()).rev() {
            let children = visible_children(outline, out[slot].0);
            let row = |id: &NodeId| slots.get(id).map(|&s| out[s].1.y);
            let centered = match (children.first(), children.last()) {
                (Some(first), Some(last)) => row(first).zip(row(last)).map(|(a, b)| (a + b) / 2.0),
                _ => None,
            };
            if let Some(y) = centered {
                out[slot].1.y = y;
            }
        }
        out
    }
}
