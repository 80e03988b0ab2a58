// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

/// Content of a node's detail popup, shown on single activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeDetail {
    /// Node name, also the popup title.
    pub name: String,
    /// Depth in the hierarchy (the root is `0`).
    pub depth: u32,
    /// Number of children, shown or hidden; `None` for leaves.
    pub child_count: Option<usize>,
    /// Parent name; `None` for the root.
    pub parent: Option<String>,
    /// Free text from the source data.
    pub description: Option<String>,
}

impl NodeDetail {
    /// The popup body as lines.
    ///
    /// `Node: <name>` first, then `Depth`, `Child nodes` and `Parent` when
    /// they apply (depth only below the root), then an empty line and the
    /// description when there is one.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = alloc::vec![format!("Node: {}", self.name)];
        if self.depth > 0 {
            lines.push(format!("Depth: {}", self.depth));
        }
        if let Some(count) = self.child_count {
            lines.push(format!("Child nodes: {count}"));
        }
        if let Some(parent) = &self.parent {
            lines.push(format!("Parent: {parent}"));
        }
        if let Some(description) = &self.description {
            lines.push(String::new());
            lines.push(description.clone());
        }
        lines
    }
}

impl fmt::Display for NodeDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines().iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::{String, ToString};

    use super::NodeDetail;

    #[test]
    fn root_detail_omits_depth_and_parent() {
        let d = NodeDetail {
            name: "Root".to_string(),
            depth: 0,
            child_count: Some(3),
            parent: None,
            description: None,
        };
        assert_eq!(d.to_string(), "Node: Root\nChild nodes: 3");
    }

    #[test]
    fn leaf_detail_with_description() {
        let d = NodeDetail {
            name: "Leaf".to_string(),
            depth: 2,
            child_count: None,
            parent: Some(String::from("Branch")),
            description: Some("About the leaf.".to_string()),
        };
        assert_eq!(
            d.lines(),
            ["Node: Leaf", "Depth: 2", "Parent: Branch", "", "About the leaf."]
        );
    }
}
