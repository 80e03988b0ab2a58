// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

/// Hierarchy source data: a named node with optional description and children.
///
/// With the `serde` feature this deserializes from documents such as
///
/// ```json
/// { "name": "Root", "children": [ { "name": "Leaf", "description": "..." } ] }
/// ```
///
/// `children` may be omitted for leaves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub struct NodeData {
    /// Display name.
    pub name: String,
    /// Free text shown in the node's detail view.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: Option<String>,
    /// Ordered children.
    #[cfg_attr(feature = "serde", serde(default))]
    pub children: Vec<NodeData>,
}

impl NodeData {
    /// A leaf with the given name.
    pub fn leaf(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            children: Vec::new(),
        }
    }

    /// A node with the given name and children.
    pub fn branch(name: impl Into<String>, children: impl IntoIterator<Item = Self>) -> Self {
        Self {
            name: name.into(),
            description: None,
            children: children.into_iter().collect(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Number of nodes in this subtree, including itself.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = alloc::vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(&node.children);
        }
        count
    }
}
