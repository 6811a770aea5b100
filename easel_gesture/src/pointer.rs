// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer state helper: remembers the last position and the current press.
//!
//! ## Usage
//!
//! 1) Call [`PointerState::press`] when a button goes down.
//! 2) On each move, call [`PointerState::move_to`] to get the delta since the
//!    previous position. Moves are tracked with or without a press, since the
//!    last position anchors wheel zoom.
//! 3) Call [`PointerState::release`] when the press ends.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use easel_gesture::PointerState;
//!
//! let mut pointer = PointerState::default();
//! pointer.press(Point::new(10.0, 20.0));
//! assert!(pointer.is_pressed());
//!
//! assert_eq!(pointer.move_to(Point::new(15.0, 25.0)), Vec2::new(5.0, 5.0));
//! assert_eq!(pointer.release(), Some(Point::new(10.0, 20.0)));
//! assert_eq!(pointer.position(), Point::new(15.0, 25.0));
//! ```

use kurbo::{Point, Vec2};

/// Last known pointer position plus the position of the current press.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    position: Point,
    down: Option<Point>,
}

impl PointerState {
    /// Starts a press at `pos`.
    pub fn press(&mut self, pos: Point) {
        self.position = pos;
        self.down = Some(pos);
    }

    /// Moves to `pos`, returning the delta from the previous position.
    pub fn move_to(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.position;
        self.position = pos;
        delta
    }

    /// Jumps to `pos` without producing a delta.
    pub fn warp(&mut self, pos: Point) {
        self.position = pos;
    }

    /// Ends the press and returns where it started.
    pub fn release(&mut self) -> Option<Point> {
        self.down.take()
    }

    /// Last known position.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Where the current press started.
    #[must_use]
    pub fn down_position(&self) -> Option<Point> {
        self.down
    }

    /// Returns `true` while a press is active.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.down.is_some()
    }
}
