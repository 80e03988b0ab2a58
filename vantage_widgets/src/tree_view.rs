// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An expandable hierarchy on a pan/zoom surface.

use kurbo::{Insets, Point, Rect, Size};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyState, NamedKey};
use ui_events::pointer::PointerType;
use vantage_event_state::click::Activation;
use vantage_outline::{LayoutHost, NodeData, NodeDetail, NodeId, Outline};
use vantage_transform_encoder::{HitTarget, ViewController};
use vantage_view2d::{ContentBounds, TransformSink, ViewportConfig};

use crate::controls::{Control, Theme};

/// Space kept around the laid-out nodes: room for root labels on the left and
/// leaf labels on the right.
pub const TREE_MARGIN: Insets = Insets::new(250.0, 50.0, 150.0, 50.0);

/// What an activation on a node did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activated {
    /// The click ended a drag and was swallowed.
    Suppressed,
    /// The node's detail popup opened.
    Opened(NodeId),
    /// The node's children were shown (`true`) or hidden (`false`).
    Toggled(NodeId, bool),
    /// Nothing happened (unknown node, or a double activation on a leaf).
    Ignored,
}

/// A hierarchy view: expansion state, layout, viewport and detail popup.
///
/// Starts with the root's children visible and everything below them
/// collapsed. Every expansion change relays the tree out through the
/// [`LayoutHost`], anchored at the node involved, and recomputes the content
/// bounds from the new layout extent.
#[derive(Debug)]
pub struct TreeView<S, H> {
    outline: Outline,
    host: H,
    view: ViewController<S>,
    popup: Option<(NodeId, NodeDetail)>,
    theme: Theme,
}

impl<S: TransformSink, H: LayoutHost> TreeView<S, H> {
    /// Builds the view and performs the initial layout, anchored at the root.
    pub fn new(data: NodeData, config: &ViewportConfig, sink: S, host: H) -> Self {
        let mut tree = Self {
            outline: Outline::with_first_level(data),
            host,
            view: ViewController::new(config, sink),
            popup: None,
            theme: Theme::default(),
        };
        let root = tree.outline.root();
        tree.relayout(root);
        tracing::info!(
            nodes = tree.outline.len(),
            visible = tree.outline.visible_nodes().len(),
            "widgets.tree_ready"
        );
        tree
    }

    /// The expansion state.
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// The view controller.
    pub fn view(&self) -> &ViewController<S> {
        &self.view
    }

    /// The layout collaborator.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Current content bounds, margins included.
    pub fn content_bounds(&self) -> ContentBounds {
        self.view.viewport().content()
    }

    /// The open detail popup, if any.
    pub fn popup(&self) -> Option<&NodeDetail> {
        self.popup.as_ref().map(|(_, detail)| detail)
    }

    /// The node whose popup is open.
    pub fn popup_node(&self) -> Option<NodeId> {
        self.popup.as_ref().map(|(id, _)| *id)
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Closes the popup. Returns `true` if one was open.
    pub fn close_popup(&mut self) -> bool {
        self.popup.take().is_some()
    }

    /// Runs a control. Returns `false` for controls this view does not offer.
    pub fn control(&mut self, control: Control) -> bool {
        match control {
            Control::ZoomIn => self.view.zoom_in(),
            Control::ZoomOut => self.view.zoom_out(),
            Control::ResetView => self.view.reset(),
            Control::ExpandAll => self.expand_all(),
            Control::CollapseAll => self.collapse_all(),
            Control::ToggleTheme => self.theme = self.theme.toggled(),
            Control::Defang | Control::Undefang | Control::Clear | Control::CopyToClipboard => {
                return false;
            }
        }
        true
    }

    /// Shows every node.
    pub fn expand_all(&mut self) {
        let root = self.outline.root();
        if self.outline.expand_all(root) {
            self.relayout(root);
        }
    }

    /// Hides everything below the root.
    pub fn collapse_all(&mut self) {
        let root = self.outline.root();
        if self.outline.collapse_all() {
            self.relayout(root);
        }
    }

    /// Appends a leaf under `parent`, expanding it if needed.
    pub fn add_node(&mut self, parent: NodeId, name: impl Into<String>) -> Option<NodeId> {
        let id = self.outline.add_child(parent, name)?;
        self.relayout(parent);
        Some(id)
    }

    /// The container was resized.
    pub fn resize(&mut self, container: Size) {
        self.view.resize(container);
    }

    /// Pointer-down at `position`, over `node` if the press hit one.
    ///
    /// Presses on nodes never start a drag. Returns `true` if a drag started.
    pub fn pointer_down(
        &mut self,
        position: Point,
        node: Option<NodeId>,
        pointer_type: PointerType,
    ) -> bool {
        let target = if node.is_some() {
            HitTarget::Interactive
        } else {
            HitTarget::Background
        };
        self.view.pointer_down(position, target, pointer_type)
    }

    /// Pointer-move. Returns `true` if the view panned.
    pub fn pointer_move(&mut self, position: Point, pointer_type: PointerType) -> bool {
        self.view.pointer_move(position, pointer_type)
    }

    /// Pointer-up.
    pub fn pointer_up(&mut self) {
        self.view.pointer_up();
    }

    /// Pointer left the surface.
    pub fn pointer_leave(&mut self) {
        self.view.pointer_leave();
    }

    /// Wheel event.
    pub fn wheel(&mut self, delta: &ScrollDelta, position: Point) {
        self.view.wheel(delta, position);
    }

    /// Key event. Escape closes an open popup; otherwise keys navigate the
    /// view. Returns `true` if handled.
    pub fn key(&mut self, key: &Key, state: KeyState) -> bool {
        if state.is_down()
            && matches!(key, Key::Named(NamedKey::Escape))
            && self.close_popup()
        {
            return true;
        }
        self.view.key(key, state)
    }

    /// A click on `node` with the platform's click count.
    ///
    /// A single activation opens the detail popup; a double activation toggles
    /// the node and relays the tree out around it.
    pub fn activate(&mut self, node: NodeId, click_count: u32) -> Activated {
        if !self.view.click() {
            return Activated::Suppressed;
        }
        if !self.outline.contains(node) {
            return Activated::Ignored;
        }
        match Activation::from_click_count(click_count) {
            Activation::Single => {
                let Some(detail) = self.outline.detail(node) else {
                    return Activated::Ignored;
                };
                tracing::debug!(node = node.index(), "widgets.popup_open");
                self.popup = Some((node, detail));
                Activated::Opened(node)
            }
            Activation::Double => {
                if !self.outline.toggle(node) {
                    return Activated::Ignored;
                }
                self.relayout(node);
                let expanded = !self.outline.is_collapsed(node);
                tracing::debug!(node = node.index(), expanded, "widgets.node_toggled");
                Activated::Toggled(node, expanded)
            }
        }
    }

    fn relayout(&mut self, anchor: NodeId) {
        self.outline.relayout(&mut self.host, anchor);
        if let Some(extent) = self.outline.layout_extent() {
            self.view
                .set_content(ContentBounds::from_extent(with_margin(extent)));
        }
    }
}

fn with_margin(extent: Rect) -> Rect {
    Rect::new(
        extent.x0 - TREE_MARGIN.x0,
        extent.y0 - TREE_MARGIN.y0,
        extent.x1 + TREE_MARGIN.x1,
        extent.y1 + TREE_MARGIN.y1,
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size};
    use ui_events::keyboard::{Key, KeyState, NamedKey};
    use ui_events::pointer::PointerType;
    use vantage_outline::{NodeData, RowLayout};
    use vantage_view2d::{ContentBounds, ViewportConfig};

    use super::{Activated, TreeView};
    use crate::controls::{Control, Theme};

    fn tree() -> TreeView<Affine, RowLayout> {
        let data = NodeData::branch(
            "Root",
            [
                NodeData::branch("A", [NodeData::leaf("A1"), NodeData::leaf("A2")]),
                NodeData::leaf("B").with_description("Bee"),
            ],
        );
        let mut tree = TreeView::new(
            data,
            &ViewportConfig::tree(),
            Affine::IDENTITY,
            RowLayout::new(10.0),
        );
        tree.resize(Size::new(800.0, 600.0));
        tree
    }

    #[test]
    fn initial_layout_shows_first_level_with_margins() {
        let tree = tree();
        assert_eq!(tree.outline().visible_nodes().len(), 3);
        // Root and two children: one depth step wide, one row tall.
        assert_eq!(
            tree.content_bounds(),
            ContentBounds::new(180.0 + 400.0, 10.0 + 100.0)
        );
    }

    #[test]
    fn single_then_double_activation() {
        let mut tree = tree();
        let root = tree.outline().root();
        let a = tree.outline().children(root).unwrap().ids()[0];

        assert_eq!(tree.activate(a, 1), Activated::Opened(a));
        assert_eq!(tree.popup().unwrap().name, "A");
        assert_eq!(tree.popup_node(), Some(a));

        assert_eq!(tree.activate(a, 2), Activated::Toggled(a, true));
        assert_eq!(tree.outline().visible_nodes().len(), 5);
        assert_eq!(tree.content_bounds().width, 360.0 + 400.0);

        let b = tree.outline().children(root).unwrap().ids()[1];
        assert_eq!(tree.activate(b, 2), Activated::Ignored);
    }

    #[test]
    fn escape_closes_popup_before_navigating() {
        let mut tree = tree();
        let root = tree.outline().root();
        tree.activate(root, 1);
        let escape = Key::Named(NamedKey::Escape);
        assert!(tree.key(&escape, KeyState::Down));
        assert!(tree.popup().is_none());
        assert!(!tree.key(&escape, KeyState::Down));
    }

    #[test]
    fn drag_swallows_the_following_click() {
        let mut tree = tree();
        let root = tree.outline().root();
        assert!(tree.pointer_down(Point::new(10.0, 10.0), None, PointerType::Mouse));
        assert!(tree.pointer_move(Point::new(60.0, 10.0), PointerType::Mouse));
        tree.pointer_up();
        assert_eq!(tree.activate(root, 1), Activated::Suppressed);
        assert_eq!(tree.activate(root, 1), Activated::Opened(root));
    }

    #[test]
    fn press_on_node_does_not_drag() {
        let mut tree = tree();
        let root = tree.outline().root();
        assert!(!tree.pointer_down(Point::new(10.0, 10.0), Some(root), PointerType::Mouse));
        assert!(!tree.pointer_move(Point::new(60.0, 10.0), PointerType::Mouse));
        tree.pointer_up();
        assert_eq!(tree.activate(root, 1), Activated::Opened(root));
    }

    #[test]
    fn controls() {
        let mut tree = tree();
        assert!(tree.control(Control::ExpandAll));
        assert_eq!(tree.outline().visible_nodes().len(), 5);
        assert!(tree.control(Control::CollapseAll));
        assert_eq!(tree.outline().visible_nodes().len(), 1);
        assert_eq!(tree.content_bounds(), ContentBounds::new(400.0, 100.0));

        assert!(tree.control(Control::ZoomIn));
        assert_eq!(tree.view().viewport().scale(), 1.1);
        assert!(tree.control(Control::ResetView));
        assert_eq!(tree.view().viewport().scale(), 1.0);

        assert!(tree.control(Control::ToggleTheme));
        assert_eq!(tree.theme(), Theme::Dark);
        assert!(!tree.control(Control::Defang));
    }

    #[test]
    fn added_node_is_visible() {
        let mut tree = tree();
        let root = tree.outline().root();
        let a = tree.outline().children(root).unwrap().ids()[0];
        let new = tree.add_node(a, "A3").unwrap();
        assert!(tree.outline().visible_nodes().iter().any(|v| v.id == new));
    }
}
