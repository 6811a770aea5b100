// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;

/// A 2D drawing target.
///
/// Shapes are given in world coordinates and mapped through the current
/// transform. Only [`Surface::clear`] works in device space.
pub trait Surface {
    /// Resizes the backing store.
    fn resize(&mut self, size: Size);

    /// Replaces the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Clears the whole surface, ignoring the transform.
    fn clear(&mut self);

    /// Fills an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Outlines an axis-aligned rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fills a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color);

    /// Outlines a circle.
    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64);
}

/// Operation recorded by [`RecordingSurface`].
#[derive(Clone, Debug)]
pub enum SurfaceOp {
    /// [`Surface::resize`].
    Resize(Size),
    /// [`Surface::set_transform`].
    SetTransform(Affine),
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::fill_rect`].
    FillRect {
        /// Rectangle in world units.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_rect`].
    StrokeRect {
        /// Rectangle in world units.
        rect: Rect,
        /// Outline color.
        color: Color,
        /// Outline width.
        width: f64,
    },
    /// [`Surface::fill_circle`].
    FillCircle {
        /// Center in world units.
        center: Point,
        /// Radius in world units.
        radius: f64,
        /// Fill color.
        color: Color,
    },
    /// [`Surface::stroke_circle`].
    StrokeCircle {
        /// Center in world units.
        center: Point,
        /// Radius in world units.
        radius: f64,
        /// Outline color.
        color: Color,
        /// Outline width.
        width: f64,
    },
}

/// Headless [`Surface`] that records every call.
///
/// It does **not** rasterize. It is meant for tests and debugging that want
/// to assert on the emitted operations and the transform in effect.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    transform: Affine,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded operations in call order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Removes and returns the recorded operations.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Forgets the recorded operations but keeps size and transform.
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Size from the last [`Surface::resize`].
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Transform from the last [`Surface::set_transform`].
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.transform
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, size: Size) {
        self.size = size;
        self.ops.push(SurfaceOp::Resize(size));
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
        self.ops.push(SurfaceOp::SetTransform(transform));
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(SurfaceOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeRect { rect, color, width });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ops.push(SurfaceOp::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.ops.push(SurfaceOp::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Rect, Size};
    use peniko::Color;

    use super::{RecordingSurface, Surface, SurfaceOp};

    #[test]
    fn records_calls_in_order_and_tracks_state() {
        let mut s = RecordingSurface::new();
        s.resize(Size::new(10.0, 20.0));
        s.set_transform(Affine::scale(2.0));
        s.clear();
        s.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::WHITE);
        s.stroke_circle(Point::new(1.0, 1.0), 3.0, Color::BLACK, 1.0);

        assert_eq!(s.size(), Size::new(10.0, 20.0));
        assert_eq!(s.transform(), Affine::scale(2.0));
        assert!(matches!(
            s.ops(),
            [
                SurfaceOp::Resize(_),
                SurfaceOp::SetTransform(_),
                SurfaceOp::Clear,
                SurfaceOp::FillRect { .. },
                SurfaceOp::StrokeCircle { .. },
            ]
        ));
    }

    #[test]
    fn take_ops_keeps_state() {
        let mut s = RecordingSurface::new();
        s.set_transform(Affine::translate((5.0, 0.0)));
        assert_eq!(s.take_ops().len(), 1);
        assert!(s.ops().is_empty());
        assert_eq!(s.transform(), Affine::translate((5.0, 0.0)));
    }
}
