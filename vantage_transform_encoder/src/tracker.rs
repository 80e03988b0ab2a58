// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The input tracker: an `Idle → Dragging → Idle` state machine over raw
//! pointer, wheel and keyboard samples.

use kurbo::{Point, Vec2};
use ui_events::ScrollDelta;
use ui_events::keyboard::{Key, KeyState};
use ui_events::pointer::PointerType;
use vantage_event_state::click::ClickSuppressor;
use vantage_event_state::drag::{DragEnd, DragSession};
use vantage_view2d::ZoomDirection;

use crate::ViewIntent;
use crate::keys::key_intent;

/// What lies under the pointer at pointer-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitTarget {
    /// Empty canvas: pressing here starts a pan.
    Background,
    /// A node or other registered hit target: pressing here never starts a pan.
    Interactive,
}

/// Converts raw input samples into [`ViewIntent`]s.
///
/// Positions are in container coordinates. Only one drag session exists at a
/// time; a pointer-down while dragging is ignored, as are moves from a
/// different pointer type than the one that started the session (for example
/// the emulated mouse events a platform sends after a touch).
#[derive(Clone, Debug)]
pub struct InputTracker {
    drag: DragSession,
    pointer_type: Option<PointerType>,
    suppress: ClickSuppressor,
}

impl InputTracker {
    /// Creates an idle tracker with the given drag threshold.
    #[must_use]
    pub fn new(drag_threshold: f64) -> Self {
        Self {
            drag: DragSession::new(drag_threshold),
            pointer_type: None,
            suppress: ClickSuppressor::default(),
        }
    }

    /// Returns `true` while a drag session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The active drag session.
    #[must_use]
    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    /// Handles pointer-down or touch-start. For touch, pass the first touch point.
    ///
    /// Returns `true` if a drag session started. Any suppression left over from
    /// an earlier drag whose click never arrived is discarded.
    pub fn pointer_down(
        &mut self,
        position: Point,
        target: HitTarget,
        pointer_type: PointerType,
    ) -> bool {
        if target == HitTarget::Interactive || self.drag.is_dragging() {
            return false;
        }
        self.suppress.disarm();
        let started = self.drag.start(position);
        if started {
            self.pointer_type = Some(pointer_type);
        }
        started
    }

    /// Handles pointer-move or touch-move, returning the pan to apply.
    pub fn pointer_move(
        &mut self,
        position: Point,
        pointer_type: PointerType,
    ) -> Option<ViewIntent> {
        if self.pointer_type != Some(pointer_type) {
            return None;
        }
        let delta = self.drag.update(position)?;
        (delta != Vec2::ZERO).then_some(ViewIntent::PanBy(delta))
    }

    /// Handles pointer-up or touch-end.
    ///
    /// If the session moved past the threshold, the next [`click`](Self::click)
    /// is suppressed.
    pub fn pointer_up(&mut self) -> Option<DragEnd> {
        let end = self.finish()?;
        if end.moved {
            self.suppress.arm();
        }
        Some(end)
    }

    /// Handles the pointer leaving the surface.
    ///
    /// Ends the session like [`pointer_up`](Self::pointer_up), but no click
    /// can follow a leave, so nothing is suppressed.
    pub fn pointer_leave(&mut self) -> Option<DragEnd> {
        self.finish()
    }

    /// Handles a wheel event at `position`.
    ///
    /// Scrolling away from the user (negative vertical delta) zooms in,
    /// scrolling toward the user zooms out. Only the sign of the vertical
    /// component matters; a zero or non-finite vertical delta is ignored.
    #[must_use]
    pub fn wheel(&self, delta: &ScrollDelta, position: Point) -> Option<ViewIntent> {
        let dy = match delta {
            ScrollDelta::PixelDelta(pos) => pos.y,
            ScrollDelta::LineDelta(_, y) | ScrollDelta::PageDelta(_, y) => f64::from(*y),
        };
        let direction = if dy > 0.0 {
            ZoomDirection::Out
        } else if dy < 0.0 {
            ZoomDirection::In
        } else {
            return None;
        };
        Some(ViewIntent::ZoomAt {
            direction,
            pointer: position,
        })
    }

    /// Handles a key event.
    #[must_use]
    pub fn key(&self, key: &Key, state: KeyState) -> Option<ViewIntent> {
        key_intent(key, state)
    }

    /// Handles the click a platform delivers after pointer-up.
    ///
    /// Returns `true` if the click should be processed, `false` if it is the
    /// tail of a drag and must be ignored.
    pub fn click(&mut self) -> bool {
        !self.suppress.take()
    }

    fn finish(&mut self) -> Option<DragEnd> {
        self.pointer_type = None;
        self.drag.end()
    }
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new(DragSession::DEFAULT_THRESHOLD)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};
    use ui_events::ScrollDelta;
    use ui_events::pointer::PointerType;
    use vantage_view2d::ZoomDirection;

    use super::{HitTarget, InputTracker};
    use crate::ViewIntent;

    const MOUSE: PointerType = PointerType::Mouse;

    #[test]
    fn press_on_interactive_target_does_not_drag() {
        let mut t = InputTracker::default();
        assert!(!t.pointer_down(Point::new(1.0, 1.0), HitTarget::Interactive, MOUSE));
        assert!(!t.is_dragging());
        assert_eq!(t.pointer_move(Point::new(50.0, 50.0), MOUSE), None);
    }

    #[test]
    fn drag_emits_incremental_pans() {
        let mut t = InputTracker::default();
        assert!(t.pointer_down(Point::new(10.0, 10.0), HitTarget::Background, MOUSE));
        assert_eq!(
            t.pointer_move(Point::new(15.0, 12.0), MOUSE),
            Some(ViewIntent::PanBy(Vec2::new(5.0, 2.0)))
        );
        assert_eq!(
            t.pointer_move(Point::new(14.0, 12.0), MOUSE),
            Some(ViewIntent::PanBy(Vec2::new(-1.0, 0.0)))
        );
        assert_eq!(t.pointer_move(Point::new(14.0, 12.0), MOUSE), None);
    }

    #[test]
    fn second_press_while_dragging_is_ignored() {
        let mut t = InputTracker::default();
        t.pointer_down(Point::ZERO, HitTarget::Background, MOUSE);
        assert!(!t.pointer_down(Point::new(99.0, 99.0), HitTarget::Background, MOUSE));
        assert_eq!(t.drag().start_pos, Some(Point::ZERO));
    }

    #[test]
    fn moves_from_another_pointer_type_are_ignored() {
        let mut t = InputTracker::default();
        t.pointer_down(Point::ZERO, HitTarget::Background, PointerType::Touch);
        assert_eq!(t.pointer_move(Point::new(20.0, 0.0), MOUSE), None);
        assert_eq!(
            t.pointer_move(Point::new(20.0, 0.0), PointerType::Touch),
            Some(ViewIntent::PanBy(Vec2::new(20.0, 0.0)))
        );
    }

    #[test]
    fn drag_suppresses_following_click_once() {
        let mut t = InputTracker::default();
        t.pointer_down(Point::ZERO, HitTarget::Background, MOUSE);
        t.pointer_move(Point::new(30.0, 0.0), MOUSE);
        assert!(t.pointer_up().unwrap().moved);
        assert!(!t.click());
        assert!(t.click());
    }

    #[test]
    fn sub_threshold_release_is_a_plain_click() {
        let mut t = InputTracker::default();
        t.pointer_down(Point::ZERO, HitTarget::Background, MOUSE);
        t.pointer_move(Point::new(2.0, -2.0), MOUSE);
        assert!(!t.pointer_up().unwrap().moved);
        assert!(t.click());
    }

    #[test]
    fn leave_ends_drag_without_suppression() {
        let mut t = InputTracker::default();
        t.pointer_down(Point::ZERO, HitTarget::Background, MOUSE);
        t.pointer_move(Point::new(100.0, 0.0), MOUSE);
        assert!(t.pointer_leave().unwrap().moved);
        assert!(!t.is_dragging());
        assert!(t.click());
        assert_eq!(t.pointer_up(), None);
    }

    #[test]
    fn stale_suppression_is_dropped_on_next_press() {
        let mut t = InputTracker::default();
        t.pointer_down(Point::ZERO, HitTarget::Background, MOUSE);
        t.pointer_move(Point::new(100.0, 0.0), MOUSE);
        t.pointer_up();
        t.pointer_down(Point::ZERO, HitTarget::Background, MOUSE);
        t.pointer_up();
        assert!(t.click());
    }

    #[test]
    fn wheel_sign_picks_direction() {
        let t = InputTracker::default();
        let p = Point::new(5.0, 6.0);
        assert_eq!(
            t.wheel(&ScrollDelta::LineDelta(0.0, -3.0), p),
            Some(ViewIntent::ZoomAt {
                direction: ZoomDirection::In,
                pointer: p
            })
        );
        assert_eq!(
            t.wheel(&ScrollDelta::PageDelta(0.0, 1.0), p),
            Some(ViewIntent::ZoomAt {
                direction: ZoomDirection::Out,
                pointer: p
            })
        );
        assert_eq!(t.wheel(&ScrollDelta::LineDelta(4.0, 0.0), p), None);
    }
}
