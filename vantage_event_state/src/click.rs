// Copyright 2025 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Click discrimination: single versus double activation, and suppression of
//! the click that follows a drag.
//!
//! Platforms usually report a click count with each activation (the DOM's
//! `detail`). Where they do, [`Activation::from_click_count`] is all that is
//! needed. [`ClickCounter`] derives the count from press times and positions
//! for platforms that do not.
//!
//! ```
//! use kurbo::Point;
//! use vantage_event_state::click::{Activation, ClickCounter};
//!
//! let mut counter = ClickCounter::default();
//! let p = Point::new(40.0, 40.0);
//! assert_eq!(counter.press(p, 1_000), 1);
//! assert_eq!(counter.press(p, 1_200), 2);
//! assert_eq!(Activation::from_click_count(2), Activation::Double);
//!
//! // Too slow: the count starts over.
//! assert_eq!(counter.press(p, 2_000), 1);
//! ```

use kurbo::Point;

/// How an activation on an interactive target should be interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
    /// Open the target's detail view.
    Single,
    /// Toggle the target (expand or collapse a hierarchy node).
    Double,
}

impl Activation {
    /// Interprets a platform click count.
    ///
    /// Exactly two is a double activation. Every other count, including the
    /// zero reported for keyboard-synthesized clicks and the three of a
    /// triple click, is a single activation.
    #[must_use]
    pub fn from_click_count(count: u32) -> Self {
        if count == 2 { Self::Double } else { Self::Single }
    }
}

/// Counts consecutive presses that land close together in space and time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickCounter {
    /// Longest gap between presses, in milliseconds, that continues a sequence.
    pub interval_ms: u64,
    /// Largest distance between presses that continues a sequence.
    pub slop: f64,
    last: Option<(Point, u64)>,
    count: u32,
}

impl ClickCounter {
    /// Common desktop double-click interval.
    pub const DEFAULT_INTERVAL_MS: u64 = 500;
    /// Default spatial tolerance between presses.
    pub const DEFAULT_SLOP: f64 = 4.0;

    /// Creates a counter with the given tolerances.
    #[must_use]
    pub const fn new(interval_ms: u64, slop: f64) -> Self {
        Self {
            interval_ms,
            slop,
            last: None,
            count: 0,
        }
    }

    /// Records a press at `pos` and time `now_ms`, returning its click count.
    pub fn press(&mut self, pos: Point, now_ms: u64) -> u32 {
        let continues = self.last.is_some_and(|(last_pos, last_ms)| {
            now_ms >= last_ms
                && now_ms - last_ms <= self.interval_ms
                && (pos - last_pos).hypot() <= self.slop
        });
        self.count = if continues {
            self.count.saturating_add(1)
        } else {
            1
        };
        self.last = Some((pos, now_ms));
        self.count
    }

    /// Forgets the current sequence.
    pub fn reset(&mut self) {
        self.last = None;
        self.count = 0;
    }
}

impl Default for ClickCounter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL_MS, Self::DEFAULT_SLOP)
    }
}

/// One-shot latch that swallows the click following a completed drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickSuppressor {
    armed: bool,
}

impl ClickSuppressor {
    /// Suppress the next click.
    pub fn arm(&mut self) {
        self.armed = true;
    }

    /// Cancel a pending suppression.
    pub fn disarm(&mut self) {
        self.armed = false;
    }

    /// Returns `true` if the next click will be suppressed.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Consumes the latch. Returns `true` if this click must be ignored.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.armed)
    }
}
