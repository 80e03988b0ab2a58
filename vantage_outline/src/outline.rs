// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Rect};

use crate::data::NodeData;
use crate::detail::NodeDetail;
use crate::layout::{LayoutHost, RelayoutRequest};
use crate::types::{Children, NodeFlags, NodeId, NodePosition, VisibleNode};

#[derive(Clone, Debug)]
struct Node {
    name: String,
    description: Option<String>,
    parent: Option<NodeId>,
    depth: u32,
    children: Children,
}

/// Expansion state of a hierarchy, stored as an arena of nodes.
///
/// Every node's children are either all shown or all hidden
/// ([`Children`]). Mutations report whether anything changed and bump
/// [`revision`](Self::revision) when it did; callers follow a change with a
/// [`relayout`](Self::relayout) anchored at the node the user interacted with.
#[derive(Clone, Debug)]
pub struct Outline {
    nodes: Vec<Node>,
    positions: HashMap<NodeId, NodePosition>,
    revision: u64,
}

impl Outline {
    /// Builds an outline with every node expanded.
    #[must_use]
    pub fn from_data(data: NodeData) -> Self {
        let mut outline = Self {
            nodes: Vec::with_capacity(data.node_count()),
            positions: HashMap::new(),
            revision: 0,
        };
        outline.insert(data);
        outline
    }

    /// Builds an outline showing only the root and its direct children.
    ///
    /// This is the initial state of a tree view: every child of the root is
    /// collapsed (recursively), so the first level is visible.
    #[must_use]
    pub fn with_first_level(data: NodeData) -> Self {
        let mut outline = Self::from_data(data);
        for child in outline.child_ids(outline.root()) {
            outline.collapse(child);
        }
        outline.revision = 0;
        outline
    }

    /// Appends `data` in pre-order, so the first node inserted gets id `0`.
    fn insert(&mut self, data: NodeData) {
        let mut stack = alloc::vec![(data, None, 0_u32)];
        while let Some((data, parent, depth)) = stack.pop() {
            let id = self.next_id();
            self.nodes.push(Node {
                name: data.name,
                description: data.description,
                parent,
                depth,
                children: Children::default(),
            });
            if let Some(parent) = parent {
                self.nodes[parent.index()].children.push(id);
            }
            stack.extend(
                data.children
                    .into_iter()
                    .rev()
                    .map(|child| (child, Some(id), depth + 1)),
            );
        }
    }

    fn next_id(&self) -> NodeId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "hierarchies are far smaller than u32::MAX nodes"
        )]
        NodeId(self.nodes.len() as u32)
    }

    fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    fn child_ids(&self, id: NodeId) -> Vec<NodeId> {
        self.node(id)
            .map(|n| n.children.ids().to_vec())
            .unwrap_or_default()
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// The root node.
    #[must_use]
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Number of nodes, shown or hidden.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: an outline has at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns `true` if `id` belongs to this outline.
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    /// Counter bumped by every state change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// The node's name.
    #[must_use]
    pub fn name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|n| n.name.as_str())
    }

    /// The node's description.
    #[must_use]
    pub fn description(&self, id: NodeId) -> Option<&str> {
        self.node(id).and_then(|n| n.description.as_deref())
    }

    /// The node's parent (`None` for the root).
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// The node's depth (the root is `0`).
    #[must_use]
    pub fn depth(&self, id: NodeId) -> Option<u32> {
        self.node(id).map(|n| n.depth)
    }

    /// The node's children.
    #[must_use]
    pub fn children(&self, id: NodeId) -> Option<&Children> {
        self.node(id).map(|n| &n.children)
    }

    /// Returns `true` if the node's children are hidden.
    #[must_use]
    pub fn is_collapsed(&self, id: NodeId) -> bool {
        self.node(id).is_some_and(|n| n.children.is_collapsed())
    }

    /// Presentation flags for the node.
    #[must_use]
    pub fn flags(&self, id: NodeId) -> NodeFlags {
        let Some(node) = self.node(id) else {
            return NodeFlags::empty();
        };
        let mut flags = NodeFlags::empty();
        flags.set(NodeFlags::ROOT, node.depth == 0);
        flags.set(NodeFlags::EXPANDABLE, !node.children.is_empty());
        flags.set(NodeFlags::COLLAPSED, node.children.is_collapsed());
        flags
    }

    /// Collapses `id` and, first, every descendant.
    ///
    /// Descendants get their own collapsed markers, so expanding `id` again
    /// reveals one level only. Collapsing an already collapsed node or a leaf
    /// changes nothing. Returns `true` if anything changed.
    pub fn collapse(&mut self, id: NodeId) -> bool {
        let changed = self.collapse_inner(id);
        if changed {
            self.touch();
        }
        changed
    }

    /// Hides every expanded subtree under and including `id`. Subtrees that
    /// are already collapsed keep their inner state.
    fn collapse_inner(&mut self, id: NodeId) -> bool {
        let mut changed = false;
        let mut stack = alloc::vec![id];
        while let Some(next) = stack.pop() {
            let Some(node) = self.nodes.get_mut(next.index()) else {
                continue;
            };
            if node.children.is_collapsed() || node.children.is_empty() {
                continue;
            }
            stack.extend(node.children.ids().iter().copied());
            let hidden = node.children.hide();
            changed |= hidden && next == id;
        }
        changed
    }

    /// Shows the children of `id`, one level. Returns `true` if anything changed.
    pub fn expand(&mut self, id: NodeId) -> bool {
        let changed = self
            .nodes
            .get_mut(id.index())
            .is_some_and(|n| n.children.show());
        if changed {
            self.touch();
        }
        changed
    }

    /// Shows `id` and every descendant. Returns `true` if anything changed.
    pub fn expand_all(&mut self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut changed = false;
        let mut stack = alloc::vec![id];
        while let Some(next) = stack.pop() {
            let node = &mut self.nodes[next.index()];
            changed |= node.children.show();
            stack.extend(node.children.ids().iter().rev().copied());
        }
        if changed {
            self.touch();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(node = id.index(), changed, "outline.expand_all");
        changed
    }

    /// Brings the whole tree to its canonical fully collapsed state.
    ///
    /// The root is expanded first so its children are reachable, each child
    /// is collapsed recursively, then the root itself is collapsed.
    pub fn collapse_all(&mut self) -> bool {
        let root = self.root();
        let was_collapsed = self.nodes[root.index()].children.is_collapsed();
        self.nodes[root.index()].children.show();
        let mut changed = false;
        for child in self.child_ids(root) {
            changed |= self.collapse_inner(child);
        }
        let hidden = self.nodes[root.index()].children.hide();
        changed |= hidden && !was_collapsed;
        if changed {
            self.touch();
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(changed, "outline.collapse_all");
        changed
    }

    /// Double-activation toggle: swaps the node between shown and hidden
    /// children without touching descendants. Leaves are unaffected.
    pub fn toggle(&mut self, id: NodeId) -> bool {
        let Some(node) = self.nodes.get_mut(id.index()) else {
            return false;
        };
        let changed = if node.children.is_collapsed() {
            node.children.show()
        } else {
            node.children.hide()
        };
        if changed {
            self.touch();
        }
        changed
    }

    /// Appends a new leaf named `name` under `parent`.
    ///
    /// A collapsed parent is expanded (one level) so the new node is visible.
    /// Returns `None` if `parent` is not in this outline.
    pub fn add_child(&mut self, parent: NodeId, name: impl Into<String>) -> Option<NodeId> {
        let depth = self.node(parent)?.depth + 1;
        let id = self.next_id();
        self.nodes.push(Node {
            name: name.into(),
            description: None,
            parent: Some(parent),
            depth,
            children: Children::default(),
        });
        let children = &mut self.nodes[parent.index()].children;
        children.push(id);
        children.show();
        self.touch();
        Some(id)
    }

    /// Depth-first, pre-order walk of the nodes currently shown.
    #[must_use]
    pub fn visible_nodes(&self) -> Vec<VisibleNode> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![self.root()];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.index()];
            out.push(VisibleNode {
                id,
                depth: node.depth,
            });
            stack.extend(node.children.visible().iter().rev().copied());
        }
        out
    }

    /// The node's detail view.
    #[must_use]
    pub fn detail(&self, id: NodeId) -> Option<NodeDetail> {
        let node = self.node(id)?;
        Some(NodeDetail {
            name: node.name.clone(),
            depth: node.depth,
            child_count: (!node.children.is_empty()).then(|| node.children.len()),
            parent: node
                .parent
                .and_then(|p| self.name(p))
                .map(String::from),
            description: node.description.clone(),
        })
    }

    /// The node's cached position, if it has been laid out.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<NodePosition> {
        self.positions.get(&id).copied()
    }

    /// Records new positions from the layout collaborator.
    ///
    /// Each node's current position becomes its previous one. Nodes placed
    /// for the first time start from `origin` (normally the anchor's last
    /// known position) or, without one, from where they land.
    pub fn apply_layout(
        &mut self,
        placed: impl IntoIterator<Item = (NodeId, Point)>,
        origin: Option<Point>,
    ) {
        for (id, point) in placed {
            let from = self
                .positions
                .get(&id)
                .map(NodePosition::current)
                .or(origin)
                .unwrap_or(point);
            self.positions.insert(
                id,
                NodePosition {
                    x: point.x,
                    y: point.y,
                    previous_x: from.x,
                    previous_y: from.y,
                },
            );
        }
    }

    /// Asks `host` to lay out the visible tree, anchoring the transition at
    /// `anchor`, and records the result.
    pub fn relayout<H: LayoutHost + ?Sized>(&mut self, host: &mut H, anchor: NodeId) {
        let request = RelayoutRequest {
            anchor,
            anchor_position: self.position(anchor).map(|p| p.current()),
        };
        let placed = host.relayout(self, &request);
        self.apply_layout(placed, request.anchor_position);
    }

    /// Bounding box of the visible nodes' current positions.
    ///
    /// Returns `None` until the visible nodes have been laid out.
    #[must_use]
    pub fn layout_extent(&self) -> Option<Rect> {
        let mut extent: Option<Rect> = None;
        for visible in self.visible_nodes() {
            let p = self.positions.get(&visible.id)?.current();
            extent = Some(match extent {
                Some(r) => r.union_pt(p),
                None => Rect::from_points(p, p),
            });
        }
        extent
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;
    use alloc::vec::Vec;

    use kurbo::{Point, Rect};

    use super::Outline;
    use crate::data::NodeData;
    use crate::types::{Children, NodeFlags, NodeId};

    // root
    // ├── a
    // │   ├── a1
    // │   │   └── a1x
    // │   └── a2
    // └── b
    fn sample() -> NodeData {
        NodeData::branch(
            "root",
            [
                NodeData::branch(
                    "a",
                    [
                        NodeData::branch("a1", [NodeData::leaf("a1x")]),
                        NodeData::leaf("a2"),
                    ],
                ),
                NodeData::leaf("b").with_description("bee"),
            ],
        )
    }

    fn id(outline: &Outline, name: &str) -> NodeId {
        (0..outline.len())
            .map(|i| NodeId(i as u32))
            .find(|&i| outline.name(i) == Some(name))
            .unwrap()
    }

    fn visible_names(outline: &Outline) -> Vec<&str> {
        outline
            .visible_nodes()
            .iter()
            .map(|v| outline.name(v.id).unwrap())
            .collect()
    }

    #[test]
    fn first_level_is_initially_visible() {
        let outline = Outline::with_first_level(sample());
        assert_eq!(visible_names(&outline), ["root", "a", "b"]);
        assert!(outline.is_collapsed(id(&outline, "a")));
        assert!(outline.is_collapsed(id(&outline, "a1")));
        assert!(!outline.is_collapsed(id(&outline, "b")));
        assert_eq!(outline.revision(), 0);
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut outline = Outline::from_data(sample());
        let a = id(&outline, "a");
        assert!(outline.collapse(a));
        let rev = outline.revision();
        assert!(!outline.collapse(a));
        assert_eq!(outline.revision(), rev);
        assert!(!outline.collapse(id(&outline, "b")));
    }

    #[test]
    fn expand_reveals_one_level() {
        let mut outline = Outline::from_data(sample());
        let a = id(&outline, "a");
        outline.collapse(a);
        outline.expand(a);
        assert_eq!(visible_names(&outline), ["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn collapse_all_then_expand_all_round_trips() {
        let mut outline = Outline::with_first_level(sample());
        let before: Vec<Vec<NodeId>> = (0..outline.len())
            .map(|i| outline.children(NodeId(i as u32)).unwrap().ids().to_vec())
            .collect();

        outline.collapse_all();
        assert_eq!(visible_names(&outline), ["root"]);
        assert!(outline.is_collapsed(outline.root()));

        outline.expand_all(outline.root());
        for (i, ids) in before.into_iter().enumerate() {
            assert_eq!(
                outline.children(NodeId(i as u32)),
                Some(&Children::Expanded(ids))
            );
        }
    }

    #[test]
    fn collapse_all_from_collapsed_root() {
        let mut outline = Outline::from_data(sample());
        outline.collapse(outline.root());
        outline.expand(outline.root());
        // Collapsing the root collapsed its descendants too.
        assert!(outline.is_collapsed(id(&outline, "a")));
        outline.collapse(outline.root());
        assert!(!outline.collapse_all());
    }

    #[test]
    fn toggle_keeps_descendant_state() {
        let mut outline = Outline::from_data(sample());
        let a = id(&outline, "a");
        let a1 = id(&outline, "a1");
        outline.collapse(a1);
        assert!(outline.toggle(a));
        assert!(outline.toggle(a));
        assert!(outline.is_collapsed(a1));
        assert!(!outline.toggle(id(&outline, "a2")));
    }

    #[test]
    fn add_child_expands_collapsed_parent() {
        let mut outline = Outline::with_first_level(sample());
        let a = id(&outline, "a");
        let new = outline.add_child(a, "a3").unwrap();
        assert!(!outline.is_collapsed(a));
        assert_eq!(outline.depth(new), Some(2));
        assert_eq!(outline.parent(new), Some(a));
        assert_eq!(
            visible_names(&outline),
            ["root", "a", "a1", "a2", "a3", "b"]
        );
        assert_eq!(outline.add_child(NodeId(999), "x"), None);
    }

    fn chain(len: usize) -> (Outline, NodeId) {
        let mut outline = Outline::from_data(NodeData::leaf("root"));
        let mut tip = outline.root();
        for i in 0..len {
            tip = outline.add_child(tip, alloc::format!("n{i}")).unwrap();
        }
        (outline, tip)
    }

    #[test]
    fn deep_chains_collapse_and_expand() {
        let (mut outline, tip) = chain(200_000);
        assert_eq!(outline.depth(tip), Some(200_000));
        assert_eq!(outline.visible_nodes().len(), 200_001);

        assert!(outline.collapse_all());
        assert_eq!(outline.visible_nodes().len(), 1);
        assert!(outline.expand_all(outline.root()));
        assert_eq!(outline.visible_nodes().len(), 200_001);
        assert!(outline.collapse(outline.root()));
        assert!(outline.is_collapsed(outline.parent(tip).unwrap()));
    }

    #[test]
    fn insertion_is_pre_order() {
        let outline = Outline::from_data(sample());
        let names: Vec<_> = (0..outline.len())
            .map(|i| outline.name(NodeId(i as u32)).unwrap())
            .collect();
        assert_eq!(names, ["root", "a", "a1", "a1x", "a2", "b"]);
        assert_eq!(sample().node_count(), 6);
        let a = id(&outline, "a");
        assert_eq!(outline.parent(id(&outline, "a2")), Some(a));
        assert_eq!(outline.depth(id(&outline, "a1x")), Some(3));
    }

    #[test]
    fn flags_and_indicators() {
        let outline = Outline::with_first_level(sample());
        let root = outline.flags(outline.root());
        assert_eq!(root, NodeFlags::ROOT | NodeFlags::EXPANDABLE);
        assert_eq!(root.indicator(), Some('-'));
        let a = outline.flags(id(&outline, "a"));
        assert_eq!(a, NodeFlags::EXPANDABLE | NodeFlags::COLLAPSED);
        assert_eq!(a.indicator(), Some('+'));
        assert_eq!(outline.flags(id(&outline, "b")).indicator(), None);
    }

    #[test]
    fn detail_counts_hidden_children() {
        let outline = Outline::with_first_level(sample());
        let a = outline.detail(id(&outline, "a")).unwrap();
        assert_eq!(a.child_count, Some(2));
        assert_eq!(a.parent.as_deref(), Some("root"));
        let b = outline.detail(id(&outline, "b")).unwrap();
        assert_eq!(b.child_count, None);
        assert_eq!(b.description.as_deref(), Some("bee"));
    }

    #[test]
    fn layout_positions_track_previous() {
        let mut outline = Outline::from_data(sample());
        let root = outline.root();
        outline.apply_layout(vec![(root, Point::new(0.0, 10.0))], None);
        outline.apply_layout(vec![(root, Point::new(0.0, 30.0))], None);
        let p = outline.position(root).unwrap();
        assert_eq!(p.previous(), Point::new(0.0, 10.0));
        assert_eq!(p.current(), Point::new(0.0, 30.0));

        let b = id(&outline, "b");
        outline.apply_layout(vec![(b, Point::new(180.0, 50.0))], Some(Point::new(0.0, 30.0)));
        assert_eq!(
            outline.position(b).unwrap().previous(),
            Point::new(0.0, 30.0)
        );
    }

    #[test]
    fn extent_requires_all_visible_positions() {
        let mut outline = Outline::with_first_level(sample());
        assert_eq!(outline.layout_extent(), None);
        let a = id(&outline, "a");
        let b = id(&outline, "b");
        outline.apply_layout(
            vec![
                (outline.root(), Point::new(0.0, 50.0)),
                (a, Point::new(180.0, 0.0)),
            ],
            None,
        );
        assert_eq!(outline.layout_extent(), None);
        outline.apply_layout(vec![(b, Point::new(180.0, 100.0))], None);
        assert_eq!(
            outline.layout_extent(),
            Some(Rect::new(0.0, 0.0, 180.0, 100.0))
        );
    }
}
