// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_interaction::{DraggableId, Registry};
use easel_view::{Viewport, ZoomAnimator};
use kurbo::Point;
use tracing::debug;

use crate::{GestureEvent, GestureEventKind, InputEvent, Listeners, PointerState, Touches};

/// Two single-finger touch starts at most this far apart form a double tap.
pub const DOUBLE_TAP_WINDOW_MS: u64 = 300;

/// Wheel zoom factor for one notch toward the user.
pub const WHEEL_ZOOM_IN: f64 = 1.1;
/// Wheel zoom factor for one notch away from the user.
pub const WHEEL_ZOOM_OUT: f64 = 0.9;

/// Pinch zoom factor applied per move while the fingers spread.
pub const PINCH_ZOOM_IN: f64 = 1.01;
/// Pinch zoom factor applied per move while the fingers close.
pub const PINCH_ZOOM_OUT: f64 = 0.99;

/// Coarse state of the tracker.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum GesturePhase {
    /// Nothing pressed and no zoom running.
    #[default]
    Idle,
    /// A single pointer or touch is down.
    Panning,
    /// Two touches are down.
    PinchZooming,
    /// A double-tap zoom toggle is running.
    AnimatingZoom,
}

/// Turns raw input into viewport changes, drags and listener callbacks.
///
/// The tracker holds no viewport or registry of its own; both are passed to
/// [`GestureTracker::handle`] so a single owner can keep all of them.
#[derive(Debug, Default)]
pub struct GestureTracker {
    phase: GesturePhase,
    pointer: PointerState,
    dragging: bool,
    press_world: Option<Point>,
    active: Option<DraggableId>,
    pinch_distance: Option<f64>,
    tap_armed_at: Option<u64>,
    zoom: ZoomAnimator,
    listeners: Listeners,
}

impl GestureTracker {
    /// Creates an idle tracker.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an application callback for `kind`.
    pub fn register_event(
        &mut self,
        kind: GestureEventKind,
        f: impl FnMut(&GestureEvent) + 'static,
    ) {
        self.listeners.register(kind, f);
    }

    /// Registered callbacks.
    #[must_use]
    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Returns `true` while a press may pan the view or drag a target.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// The draggable grabbed by the current press.
    #[must_use]
    pub fn active_target(&self) -> Option<DraggableId> {
        self.active
    }

    /// Last pointer or single-touch position, in screen coordinates.
    #[must_use]
    pub fn pointer_position(&self) -> Point {
        self.pointer.position()
    }

    /// Finger separation at the previous pinch sample.
    #[must_use]
    pub fn pinch_distance(&self) -> Option<f64> {
        self.pinch_distance
    }

    /// The zoom toggle animation.
    #[must_use]
    pub fn zoom(&self) -> &ZoomAnimator {
        &self.zoom
    }

    /// Advances the zoom animation by one frame.
    ///
    /// Returns `true` if a frame was applied.
    pub fn animate(&mut self, viewport: &mut Viewport) -> bool {
        if !self.zoom.step(viewport) {
            return false;
        }
        if !self.zoom.is_running() {
            debug!(scale = viewport.scale(), "zoom animation finished");
            if self.phase == GesturePhase::AnimatingZoom {
                self.phase = GesturePhase::Idle;
            }
        }
        true
    }

    /// Processes one input event.
    pub fn handle(&mut self, event: &InputEvent, viewport: &mut Viewport, registry: &mut Registry) {
        match event {
            InputEvent::PointerDown { position } => self.pointer_down(*position, viewport, registry),
            InputEvent::PointerMove { position } => self.pointer_move(*position, viewport, registry),
            InputEvent::PointerUp { position } => self.pointer_up(*position, registry),
            InputEvent::PointerLeave => {
                self.pointer.release();
                self.press_world = None;
                self.dragging = false;
                self.finish_drag(registry);
                self.settle();
            }
            InputEvent::Wheel { delta_y } => {
                let factor = if *delta_y < 0.0 {
                    WHEEL_ZOOM_IN
                } else {
                    WHEEL_ZOOM_OUT
                };
                viewport.scale_at_pointer(self.pointer.position(), factor);
                if viewport.scale() == 1.0 {
                    viewport.reset_origin();
                }
            }
            InputEvent::DoubleClick => {
                viewport.reset();
                self.zoom.stop();
                self.settle();
            }
            InputEvent::TouchStart { touches, time_ms } => {
                self.touch_start(touches, *time_ms, viewport);
            }
            InputEvent::TouchMove { touches } => self.touch_move(touches, viewport),
            InputEvent::TouchEnd { touches } => self.touch_end(touches),
        }
    }

    fn pointer_down(&mut self, position: Point, viewport: &Viewport, registry: &mut Registry) {
        self.pointer.press(position);
        self.dragging = true;
        self.phase = GesturePhase::Panning;

        let world = viewport.screen_to_world(position);
        self.press_world = Some(world);
        self.active = registry.hit_draggable(world);
        if let Some(id) = self.active {
            debug!(?id, x = world.x, y = world.y, "drag start");
            registry.begin_drag(id);
        }
    }

    fn pointer_move(&mut self, position: Point, viewport: &mut Viewport, registry: &mut Registry) {
        let delta = self.pointer.move_to(position);
        if !self.dragging {
            return;
        }
        match self.active {
            Some(id) => {
                registry.drag_by(id, delta);
            }
            None => viewport.move_origin(delta),
        }
    }

    fn pointer_up(&mut self, position: Point, registry: &mut Registry) {
        self.pointer.move_to(position);
        self.pointer.release();
        self.dragging = false;
        self.finish_drag(registry);
        if let Some(down) = self.press_world.take() {
            registry.click(down);
        }
        self.settle();
    }

    fn finish_drag(&mut self, registry: &mut Registry) {
        if let Some(id) = self.active.take() {
            debug!(?id, "drag end");
            registry.end_drag(id);
        }
    }

    fn touch_start(&mut self, touches: &Touches, time_ms: u64, viewport: &Viewport) {
        match touches.as_slice() {
            [touch] => {
                self.pointer.warp(*touch);
                self.dragging = true;
                self.phase = GesturePhase::Panning;
            }
            [_, _, ..] => self.phase = GesturePhase::PinchZooming,
            [] => {}
        }
        self.listeners.emit(&GestureEvent::TouchStart {
            touches: touches.clone(),
        });

        if touches.len() != 1 {
            return;
        }
        match self.tap_armed_at {
            Some(armed) if time_ms.saturating_sub(armed) <= DOUBLE_TAP_WINDOW_MS => {
                self.tap_armed_at = None;
                let position = self.pointer.position();
                self.zoom.start(viewport, position);
                self.phase = GesturePhase::AnimatingZoom;
                debug!(
                    x = position.x,
                    y = position.y,
                    direction = ?self.zoom.direction(),
                    "double tap"
                );
                self.listeners.emit(&GestureEvent::DoubleTap { position });
            }
            _ => self.tap_armed_at = Some(time_ms),
        }
    }

    fn touch_move(&mut self, touches: &Touches, viewport: &mut Viewport) {
        match touches.as_slice() {
            [touch] => {
                self.phase = GesturePhase::Panning;
                let delta = self.pointer.move_to(*touch);
                viewport.move_origin(delta);
            }
            [a, b, ..] => {
                self.phase = GesturePhase::PinchZooming;
                let distance = a.distance(*b);
                let midpoint = a.midpoint(*b);
                self.zoom.set_anchor(midpoint);
                if let Some(previous) = self.pinch_distance {
                    // An unchanged separation leaves the scale alone.
                    if distance > previous {
                        viewport.scale_at(midpoint, PINCH_ZOOM_IN);
                    } else if distance < previous {
                        viewport.scale_at(midpoint, PINCH_ZOOM_OUT);
                    }
                }
                self.pinch_distance = Some(distance);
            }
            [] => {}
        }
        self.listeners.emit(&GestureEvent::TouchMove {
            touches: touches.clone(),
        });
    }

    fn touch_end(&mut self, touches: &Touches) {
        let was_pinching = self.phase == GesturePhase::PinchZooming;
        if touches.len() < 2 {
            self.pinch_distance = None;
        }
        self.dragging = touches.len() == 1;
        match touches.as_slice() {
            [touch] => {
                self.pointer.warp(*touch);
                self.phase = GesturePhase::Panning;
            }
            [] => {
                self.settle();
                if !was_pinching {
                    self.listeners.emit(&GestureEvent::GestureEnd);
                }
            }
            _ => {}
        }
    }

    fn settle(&mut self) {
        self.phase = if self.zoom.is_running() {
            GesturePhase::AnimatingZoom
        } else {
            GesturePhase::Idle
        };
    }
}
