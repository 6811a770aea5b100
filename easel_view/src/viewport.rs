// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

/// Maximum scale used when none is configured.
pub const DEFAULT_MAX_SCALE: f64 = 4.0;

/// Pan/zoom state over a fixed-size scene.
///
/// The scene occupies `size` in world units and is shown on a screen of the
/// same size. `Viewport` maps world coordinates to screen coordinates as
/// `screen = world * scale + origin`.
///
/// Invariants, upheld after every mutation:
/// - `1 <= scale <= max_scale`.
/// - `origin.x` lies in `[-(width * scale - width), 0]` and `origin.y` in
///   `[-(height * scale - height), 0]`, so the scaled scene is never panned
///   far enough to reveal area outside its bounds.
#[derive(Clone, Debug)]
pub struct Viewport {
    size: Size,
    scale: f64,
    origin: Vec2,
    max_scale: f64,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Viewport {
    /// Creates an unzoomed viewport over a scene of the given size.
    ///
    /// Scale starts at `1`, origin at `(0, 0)`, and the maximum scale is
    /// [`DEFAULT_MAX_SCALE`].
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self::with_max_scale(size, DEFAULT_MAX_SCALE)
    }

    /// Creates an unzoomed viewport with a custom maximum scale.
    ///
    /// Values below `1` are raised to `1`.
    #[must_use]
    pub fn with_max_scale(size: Size, max_scale: f64) -> Self {
        let mut vp = Self {
            size,
            scale: 1.0,
            origin: Vec2::ZERO,
            max_scale: sanitize_max_scale(max_scale),
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        vp.rebuild_transforms();
        vp
    }

    /// Returns the scene size.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Sets the scene size and re-clamps the origin.
    pub fn set_size(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.constrain_origin();
    }

    /// Returns the current scale.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current origin offset in screen units.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Returns the maximum scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Sets the maximum scale, clamping the current scale and origin into the
    /// new range.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        self.max_scale = sanitize_max_scale(max_scale);
        self.scale = self.scale.clamp(1.0, self.max_scale);
        self.constrain_origin();
    }

    /// Returns `true` while the scene is magnified, which is the only state in
    /// which panning has any effect.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.scale > 1.0
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Returns the world-to-screen transform to apply to a drawing surface.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_screen
    }

    /// Returns the world-space rectangle currently visible on screen.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        let p0 = self.screen_to_world(Point::ZERO);
        let p1 = self.screen_to_world(Point::new(self.size.width, self.size.height));
        Rect::from_points(p0, p1)
    }

    /// Returns the range the origin is clamped into at the current scale.
    ///
    /// `x0`/`y0` hold the most negative allowed offsets; `x1`/`y1` are always
    /// `0`.
    #[must_use]
    pub fn origin_bounds(&self) -> Rect {
        Rect::new(
            -(self.size.width * self.scale - self.size.width),
            -(self.size.height * self.scale - self.size.height),
            0.0,
            0.0,
        )
    }

    /// Multiplies the scale by `factor`, keeping `anchor` fixed on screen.
    ///
    /// The scale is clamped into `[1, max_scale]`. The origin is then moved by
    /// the requested factor, `origin = anchor - (anchor - origin) * factor`,
    /// and clamped. Non-positive or non-finite factors are ignored.
    pub fn scale_at(&mut self, anchor: Point, factor: f64) {
        if !factor.is_finite() || factor <= 0.0 {
            return;
        }
        self.scale = (self.scale * factor).clamp(1.0, self.max_scale);
        let anchor = anchor.to_vec2();
        self.origin = anchor - (anchor - self.origin) * factor;
        self.constrain_origin();
    }

    /// Zooms around the pointer position, refusing to zoom in further once
    /// the maximum scale is reached.
    ///
    /// The refusal is one-sided: zooming out at scale `1` still goes through
    /// [`Viewport::scale_at`] and is held at the floor by its clamp.
    ///
    /// Returns `false` when the call was refused.
    pub fn scale_at_pointer(&mut self, pointer: Point, factor: f64) -> bool {
        if self.scale == self.max_scale && factor > 1.0 {
            return false;
        }
        self.scale_at(pointer, factor);
        true
    }

    /// Sets an absolute scale, placing the origin so that `anchor` is the
    /// fixed point of the scaling: `origin = anchor - anchor * scale`.
    ///
    /// The scale and origin are clamped as usual.
    pub fn set_scale_anchored(&mut self, anchor: Point, scale: f64) {
        if !scale.is_finite() {
            return;
        }
        self.scale = scale.clamp(1.0, self.max_scale);
        let anchor = anchor.to_vec2();
        self.origin = anchor - anchor * self.scale;
        self.constrain_origin();
    }

    /// Pans by a screen-space delta.
    ///
    /// Panning is disabled while unzoomed: at scale `1` this is a no-op.
    pub fn move_origin(&mut self, delta: Vec2) {
        if !self.is_zoomed() {
            return;
        }
        self.origin += delta;
        self.constrain_origin();
    }

    /// Clamps the origin into [`Viewport::origin_bounds`].
    pub fn constrain_origin(&mut self) {
        let bounds = self.origin_bounds();
        self.origin = Vec2::new(
            self.origin.x.max(bounds.x0).min(0.0),
            self.origin.y.max(bounds.y0).min(0.0),
        );
        self.rebuild_transforms();
    }

    /// Moves the origin back to `(0, 0)` without touching the scale.
    pub fn reset_origin(&mut self) {
        self.origin = Vec2::ZERO;
        self.rebuild_transforms();
    }

    /// Hard reset: scale `1`, origin `(0, 0)`.
    pub fn reset(&mut self) {
        self.scale = 1.0;
        self.reset_origin();
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            size: self.size,
            scale: self.scale,
            origin: self.origin,
            max_scale: self.max_scale,
            visible_world_rect: self.visible_world_rect(),
        }
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_screen = Affine::translate(self.origin) * Affine::scale(self.scale);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

fn sanitize_max_scale(max_scale: f64) -> f64 {
    if max_scale.is_finite() {
        max_scale.max(1.0)
    } else {
        DEFAULT_MAX_SCALE
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportDebugInfo {
    /// Scene size.
    pub size: Size,
    /// Current scale.
    pub scale: f64,
    /// Current origin offset in screen units.
    pub origin: Vec2,
    /// Maximum scale.
    pub max_scale: f64,
    /// World-space rectangle currently visible on screen.
    pub visible_world_rect: Rect,
}
