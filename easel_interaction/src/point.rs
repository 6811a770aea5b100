// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::rc::Rc;
use core::cell::Cell;
use core::fmt;

use kurbo::{Point, Vec2};

/// A position owned by the application and shared with the registry.
///
/// Clones refer to the same position. Identity is by reference: two
/// `SharedPoint`s are the same handle only if one was cloned from the other,
/// regardless of their coordinates.
#[derive(Clone, Default)]
pub struct SharedPoint(Rc<Cell<Point>>);

impl SharedPoint {
    /// Creates a new shared position.
    #[must_use]
    pub fn new(point: Point) -> Self {
        Self(Rc::new(Cell::new(point)))
    }

    /// Returns the current position.
    #[must_use]
    pub fn get(&self) -> Point {
        self.0.get()
    }

    /// Replaces the position.
    pub fn set(&self, point: Point) {
        self.0.set(point);
    }

    /// Moves the position by `delta`.
    pub fn translate(&self, delta: Vec2) {
        self.0.set(self.0.get() + delta);
    }

    /// Returns `true` if both handles refer to the same position.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Address of the shared cell, used as the identity key.
    pub(crate) fn key(&self) -> usize {
        Rc::as_ptr(&self.0).addr()
    }
}

impl From<Point> for SharedPoint {
    fn from(point: Point) -> Self {
        Self::new(point)
    }
}

impl fmt::Debug for SharedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedPoint").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::SharedPoint;

    #[test]
    fn clones_share_the_position() {
        let a = SharedPoint::new(Point::new(1.0, 2.0));
        let b = a.clone();
        b.translate(Vec2::new(3.0, 4.0));

        assert_eq!(a.get(), Point::new(4.0, 6.0));
        assert!(a.ptr_eq(&b));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn equal_coordinates_are_not_the_same_handle() {
        let a = SharedPoint::new(Point::new(1.0, 2.0));
        let b = SharedPoint::new(Point::new(1.0, 2.0));

        assert!(!a.ptr_eq(&b));
        assert_ne!(a.key(), b.key());
    }
}
