// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag sessions: pointer deltas plus the click-versus-drag distinction.
//!
//! ## Usage
//!
//! 1) Begin a session with [`DragSession::start`] on pointer-down. A session
//!    that is already active is left alone.
//! 2) Feed each pointer-move to [`DragSession::update`] to get the delta since
//!    the previous sample.
//! 3) End the session with [`DragSession::end`] on pointer-up or pointer-leave.
//!    The returned [`DragEnd`] says whether the pointer travelled past the
//!    movement threshold, which is what decides click suppression.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use vantage_event_state::drag::DragSession;
//!
//! let mut drag = DragSession::new(3.0);
//! assert!(drag.start(Point::new(10.0, 20.0)));
//!
//! // A 2px wiggle is still a click.
//! assert_eq!(drag.update(Point::new(12.0, 20.0)), Some(Vec2::new(2.0, 0.0)));
//! assert!(!drag.started_moving());
//!
//! // Past 3px from the press point it is a drag.
//! drag.update(Point::new(14.0, 20.0));
//! assert!(drag.started_moving());
//!
//! let end = drag.end().unwrap();
//! assert!(end.moved);
//! assert_eq!(end.total_offset, Vec2::new(4.0, 0.0));
//! ```

use kurbo::{Point, Vec2};

/// One pointer-down to pointer-up interaction on a pannable surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    /// Position of the press that started the session.
    pub start_pos: Option<Point>,
    /// Last recorded pointer position.
    pub last_pos: Option<Point>,
    /// Latched once the pointer has travelled past `threshold`.
    pub started_moving: bool,
    /// Per-axis distance from the press point beyond which a press becomes a drag.
    pub threshold: f64,
}

/// Summary of a finished [`DragSession`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragEnd {
    /// Whether the pointer travelled past the threshold at any point.
    pub moved: bool,
    /// Offset from the press point to the last recorded position.
    pub total_offset: Vec2,
}

impl DragSession {
    /// Movement threshold used by the shipped widgets.
    pub const DEFAULT_THRESHOLD: f64 = 3.0;

    /// Creates an idle session with the given movement threshold.
    #[must_use]
    pub const fn new(threshold: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            started_moving: false,
            threshold,
        }
    }

    /// Begins a session at `pos`.
    ///
    /// Returns `false` and changes nothing if a session is already active.
    pub fn start(&mut self, pos: Point) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.started_moving = false;
        true
    }

    /// Records a new pointer position, returning the delta since the last sample.
    ///
    /// Returns `None` when no session is active.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        let delta = match self.last_pos {
            Some(last) => pos - last,
            None => Vec2::ZERO,
        };
        self.last_pos = Some(pos);
        if !self.started_moving {
            let offset = pos - start;
            if offset.x.abs() > self.threshold || offset.y.abs() > self.threshold {
                self.started_moving = true;
                #[cfg(feature = "tracing")]
                tracing::trace!(dx = offset.x, dy = offset.y, "drag.started_moving");
            }
        }
        Some(delta)
    }

    /// Offset from the press point to `current_pos`.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start| current_pos - start)
    }

    /// Ends the session, returning its summary, or `None` if none was active.
    pub fn end(&mut self) -> Option<DragEnd> {
        let start = self.start_pos.take()?;
        let last = self.last_pos.take().unwrap_or(start);
        let moved = core::mem::take(&mut self.started_moving);
        Some(DragEnd {
            moved,
            total_offset: last - start,
        })
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the active session has passed the movement threshold.
    #[must_use]
    pub fn started_moving(&self) -> bool {
        self.started_moving
    }
}

impl Default for DragSession {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD)
    }
}
