// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Eased zoom toggle between scale `1` and the viewport's maximum scale.
//!
//! ## Usage
//!
//! 1) Call [`ZoomAnimator::start`] when the toggle gesture fires.
//! 2) Call [`ZoomAnimator::step`] once per rendered frame.
//! 3) After [`ZOOM_FRAMES`] steps the animation is finished and the viewport
//!    keeps its final scale.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use easel_view::{Viewport, ZoomAnimator, ZOOM_FRAMES};
//!
//! let mut view = Viewport::new(Size::new(400.0, 400.0));
//! let mut zoom = ZoomAnimator::default();
//!
//! zoom.start(&view, Point::new(200.0, 200.0));
//! for _ in 0..ZOOM_FRAMES {
//!     zoom.step(&mut view);
//! }
//! assert!(!zoom.is_running());
//! assert_eq!(view.scale(), view.max_scale());
//! ```

use kurbo::Point;

use crate::Viewport;
use crate::easing::{ease_in_out_cubic, map_range};

/// Number of frames a full zoom transition takes.
pub const ZOOM_FRAMES: u32 = 60;

/// Direction of a zoom transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomDirection {
    /// From scale `1` up to the maximum scale.
    In,
    /// From the maximum scale back down to `1`.
    #[default]
    Out,
}

impl ZoomDirection {
    /// Returns `+1` for [`ZoomDirection::In`] and `-1` for [`ZoomDirection::Out`].
    #[must_use]
    pub fn signum(self) -> i8 {
        match self {
            Self::In => 1,
            Self::Out => -1,
        }
    }
}

/// Drives a fixed-length eased zoom transition on a [`Viewport`].
///
/// There is no cancellation: other viewport mutations made while the
/// animation runs are overwritten by the next [`ZoomAnimator::step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomAnimator {
    frame: u32,
    direction: ZoomDirection,
    anchor: Point,
}

impl Default for ZoomAnimator {
    fn default() -> Self {
        Self {
            frame: ZOOM_FRAMES,
            direction: ZoomDirection::Out,
            anchor: Point::ZERO,
        }
    }
}

impl ZoomAnimator {
    /// Starts a transition toggling the viewport's zoom.
    ///
    /// - At scale `1` the animation zooms in from frame `0`, anchored at `tap`.
    /// - Above scale `1` it zooms out. The start frame is the first one whose
    ///   eased progress reaches the current scale, so a reversal in the middle
    ///   of a zoom continues from where the scale is instead of jumping. The
    ///   anchor of the previous transition is kept.
    pub fn start(&mut self, viewport: &Viewport, tap: Point) {
        if viewport.is_zoomed() {
            let max = viewport.max_scale();
            let progress = if max > 1.0 {
                map_range(viewport.scale(), max, 1.0, 0.0, 1.0)
            } else {
                1.0
            };
            self.direction = ZoomDirection::Out;
            self.frame = frame_for_progress(progress);
        } else {
            self.direction = ZoomDirection::In;
            self.frame = 0;
            self.anchor = tap;
        }
    }

    /// Applies the next frame to `viewport`.
    ///
    /// Returns `false` without touching the viewport once the animation has
    /// finished.
    pub fn step(&mut self, viewport: &mut Viewport) -> bool {
        if !self.is_running() {
            return false;
        }
        let t = f64::from(self.frame) / f64::from(ZOOM_FRAMES - 1);
        let progress = ease_in_out_cubic(t);
        let max = viewport.max_scale();
        let scale = match self.direction {
            ZoomDirection::In => map_range(progress, 0.0, 1.0, 1.0, max),
            ZoomDirection::Out => map_range(progress, 0.0, 1.0, max, 1.0),
        };
        viewport.set_scale_anchored(self.anchor, scale);
        self.frame += 1;
        true
    }

    /// Ends the transition immediately, leaving the viewport as it is.
    pub fn stop(&mut self) {
        self.frame = ZOOM_FRAMES;
    }

    /// Returns `true` while frames remain.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.frame < ZOOM_FRAMES
    }

    /// Returns the index of the next frame to apply.
    #[must_use]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Returns the direction of the current (or last) transition.
    #[must_use]
    pub fn direction(&self) -> ZoomDirection {
        self.direction
    }

    /// Returns the screen point the transition scales around.
    #[must_use]
    pub fn anchor(&self) -> Point {
        self.anchor
    }

    /// Moves the anchor used by the next zoom-out.
    ///
    /// Pinch zoom calls this with the finger midpoint so that a later toggle
    /// zooms out around where the user last zoomed in.
    pub fn set_anchor(&mut self, anchor: Point) {
        self.anchor = anchor;
    }
}

/// First frame whose eased progress is at least `progress`.
fn frame_for_progress(progress: f64) -> u32 {
    let last = ZOOM_FRAMES - 1;
    (0..last)
        .find(|&frame| ease_in_out_cubic(f64::from(frame) / f64::from(last)) >= progress)
        .unwrap_or(last)
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use super::{ZOOM_FRAMES, ZoomAnimator, ZoomDirection, frame_for_progress};
    use crate::Viewport;

    fn square() -> Viewport {
        Viewport::new(Size::new(400.0, 400.0))
    }

    #[test]
    fn idle_by_default() {
        let mut zoom = ZoomAnimator::default();
        let mut vp = square();
        assert!(!zoom.is_running());
        assert!(!zoom.step(&mut vp));
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn zoom_in_is_monotonic_and_takes_all_frames() {
        let mut vp = square();
        let mut zoom = ZoomAnimator::default();
        zoom.start(&vp, Point::new(120.0, 80.0));
        assert_eq!(zoom.direction(), ZoomDirection::In);
        assert_eq!(zoom.frame(), 0);

        let mut prev = vp.scale();
        let mut steps = 0;
        while zoom.step(&mut vp) {
            steps += 1;
            assert!(vp.scale() >= prev);
            prev = vp.scale();
        }
        assert_eq!(steps, ZOOM_FRAMES);
        assert_eq!(vp.scale(), 4.0);
    }

    #[test]
    fn zoom_out_from_max_takes_all_frames() {
        let mut vp = square();
        vp.set_scale_anchored(Point::new(200.0, 200.0), 4.0);

        let mut zoom = ZoomAnimator::default();
        zoom.start(&vp, Point::new(10.0, 10.0));
        assert_eq!(zoom.direction(), ZoomDirection::Out);
        assert_eq!(zoom.frame(), 0);

        let mut prev = vp.scale();
        let mut steps = 0;
        while zoom.step(&mut vp) {
            steps += 1;
            assert!(vp.scale() <= prev);
            prev = vp.scale();
        }
        assert_eq!(steps, ZOOM_FRAMES);
        assert_eq!(vp.scale(), 1.0);
    }

    #[test]
    fn zoom_in_anchors_at_tap() {
        let mut vp = square();
        let tap = Point::new(100.0, 100.0);
        let mut zoom = ZoomAnimator::default();
        zoom.start(&vp, tap);
        while zoom.step(&mut vp) {
            let on_screen = vp.world_to_screen(tap);
            assert!((on_screen.x - tap.x).abs() < 1e-9);
            assert!((on_screen.y - tap.y).abs() < 1e-9);
        }
    }

    #[test]
    fn reversal_mid_zoom_does_not_jump() {
        let mut vp = square();
        let mut zoom = ZoomAnimator::default();
        zoom.start(&vp, Point::new(200.0, 200.0));
        for _ in 0..30 {
            zoom.step(&mut vp);
        }
        let mid = vp.scale();
        assert!(mid > 1.0 && mid < 4.0);

        zoom.start(&vp, Point::new(0.0, 0.0));
        assert_eq!(zoom.direction(), ZoomDirection::Out);
        assert_eq!(zoom.anchor(), Point::new(200.0, 200.0));
        assert!(zoom.frame() > 0 && zoom.frame() < ZOOM_FRAMES);

        zoom.step(&mut vp);
        let after = vp.scale();
        assert!(after <= mid + 1e-9);
        // One frame of the curve around its steepest point is well under half a unit.
        assert!((mid - after).abs() < 0.5, "jumped from {mid} to {after}");
    }

    #[test]
    fn stop_finishes_immediately() {
        let mut vp = square();
        let mut zoom = ZoomAnimator::default();
        zoom.start(&vp, Point::ZERO);
        zoom.step(&mut vp);
        zoom.stop();
        let scale = vp.scale();
        assert!(!zoom.step(&mut vp));
        assert_eq!(vp.scale(), scale);
    }

    #[test]
    fn frame_lookup_covers_range() {
        assert_eq!(frame_for_progress(0.0), 0);
        assert_eq!(frame_for_progress(1.0), ZOOM_FRAMES - 1);
        let mid = frame_for_progress(0.5);
        assert!((28..=31).contains(&mid));
    }

    #[test]
    fn zoom_out_uses_the_moved_anchor() {
        let mut vp = square();
        let anchor = Point::new(300.0, 300.0);
        vp.set_scale_anchored(anchor, 2.0);

        let mut zoom = ZoomAnimator::default();
        zoom.set_anchor(anchor);
        zoom.start(&vp, Point::new(10.0, 10.0));
        assert_eq!(zoom.anchor(), anchor);

        zoom.step(&mut vp);
        let on_screen = vp.world_to_screen(anchor);
        assert!((on_screen.x - anchor.x).abs() < 1e-9, "anchor moved to {on_screen:?}");
        assert!((on_screen.y - anchor.y).abs() < 1e-9, "anchor moved to {on_screen:?}");
    }

    #[test]
    fn direction_sign() {
        assert_eq!(ZoomDirection::In.signum(), 1);
        assert_eq!(ZoomDirection::Out.signum(), -1);
    }
}
