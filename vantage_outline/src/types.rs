// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the outline: node identifiers, child lists, flags, and positions.

use alloc::vec::Vec;

use kurbo::Point;

/// Identifier for a node in an [`Outline`](crate::Outline).
///
/// Nodes are never removed, so an id stays valid for the lifetime of the
/// outline that issued it. Ids from one outline are meaningless in another.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    /// Position of the node in creation order (the root is `0`).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// A node's children, either shown or hidden behind a single collapsed marker.
///
/// A leaf is `Expanded` with no children.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children {
    /// Children are visible.
    Expanded(Vec<NodeId>),
    /// Children are hidden.
    Collapsed(Vec<NodeId>),
}

impl Children {
    /// The child ids in order, regardless of visibility.
    #[must_use]
    pub fn ids(&self) -> &[NodeId] {
        match self {
            Self::Expanded(ids) | Self::Collapsed(ids) => ids,
        }
    }

    /// The visible child ids (empty when collapsed).
    #[must_use]
    pub fn visible(&self) -> &[NodeId] {
        match self {
            Self::Expanded(ids) => ids,
            Self::Collapsed(_) => &[],
        }
    }

    /// Returns `true` if the children are hidden.
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed(_))
    }

    /// Number of children, shown or hidden.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids().len()
    }

    /// Returns `true` for a leaf.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids().is_empty()
    }

    pub(crate) fn push(&mut self, id: NodeId) {
        match self {
            Self::Expanded(ids) | Self::Collapsed(ids) => ids.push(id),
        }
    }

    /// Flips to `Collapsed` if expanded with children. Returns `true` on change.
    pub(crate) fn hide(&mut self) -> bool {
        match self {
            Self::Expanded(ids) if !ids.is_empty() => {
                *self = Self::Collapsed(core::mem::take(ids));
                true
            }
            _ => false,
        }
    }

    /// Flips to `Expanded` if collapsed. Returns `true` on change.
    pub(crate) fn show(&mut self) -> bool {
        match self {
            Self::Collapsed(ids) => {
                *self = Self::Expanded(core::mem::take(ids));
                true
            }
            Self::Expanded(_) => false,
        }
    }
}

impl Default for Children {
    fn default() -> Self {
        Self::Expanded(Vec::new())
    }
}

bitflags::bitflags! {
    /// Presentation flags for a node, mirroring the classes a renderer applies.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The node is the root.
        const ROOT       = 0b0000_0001;
        /// The node has children, shown or hidden.
        const EXPANDABLE = 0b0000_0010;
        /// The node's children are hidden.
        const COLLAPSED  = 0b0000_0100;
    }
}

impl NodeFlags {
    /// The expand/collapse indicator drawn next to the label.
    ///
    /// `+` for collapsed nodes, `-` for expanded ones with children, none for leaves.
    #[must_use]
    pub fn indicator(self) -> Option<char> {
        if !self.contains(Self::EXPANDABLE) {
            None
        } else if self.contains(Self::COLLAPSED) {
            Some('+')
        } else {
            Some('-')
        }
    }
}

/// Cached layout position of a node, with the position it is transitioning from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NodePosition {
    /// Current horizontal position (depth axis).
    pub x: f64,
    /// Current vertical position (breadth axis).
    pub y: f64,
    /// Horizontal position before the last relayout.
    pub previous_x: f64,
    /// Vertical position before the last relayout.
    pub previous_y: f64,
}

impl NodePosition {
    /// A position that has not moved.
    #[must_use]
    pub const fn at(point: Point) -> Self {
        Self {
            x: point.x,
            y: point.y,
            previous_x: point.x,
            previous_y: point.y,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn current(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Position before the last relayout.
    #[must_use]
    pub const fn previous(&self) -> Point {
        Point::new(self.previous_x, self.previous_y)
    }
}

/// A node in a depth-first walk of the visible tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VisibleNode {
    /// The node.
    pub id: NodeId,
    /// Its depth (the root is `0`).
    pub depth: u32,
}
