// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Gesture: turns raw pointer, wheel and touch input into pan, zoom and
//! drag operations on a drawing surface.
//!
//! [`GestureTracker`] consumes [`InputEvent`]s and applies them to a
//! [`Viewport`](easel_view::Viewport) and a
//! [`Registry`](easel_interaction::Registry) owned by the caller:
//!
//! - A press on a registered draggable grabs it; moves then drag the point
//!   instead of panning the view.
//! - Any other press pans, but only while zoomed in.
//! - The wheel zooms around the last pointer position. Zooming back out to
//!   scale `1` recenters the view.
//! - Two touches pinch-zoom around their midpoint.
//! - Two single-finger taps within [`DOUBLE_TAP_WINDOW_MS`] toggle an eased
//!   zoom, advanced one frame per [`GestureTracker::animate`] call.
//!
//! Applications observe touch activity through [`GestureEvent`] listeners.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use easel_gesture::{GestureTracker, InputEvent};
//! use easel_interaction::Registry;
//! use easel_view::Viewport;
//!
//! let mut view = Viewport::new(Size::new(400.0, 400.0));
//! let mut registry = Registry::new();
//! let mut tracker = GestureTracker::new();
//!
//! view.scale_at(Point::ZERO, 2.0);
//! for event in [
//!     InputEvent::PointerDown { position: Point::new(100.0, 100.0) },
//!     InputEvent::PointerMove { position: Point::new(80.0, 90.0) },
//!     InputEvent::PointerUp { position: Point::new(80.0, 90.0) },
//! ] {
//!     tracker.handle(&event, &mut view, &mut registry);
//! }
//! assert_eq!(view.origin(), Vec2::new(-20.0, -10.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod event;
mod listeners;
pub mod pointer;
mod tracker;

pub use event::{GestureEvent, GestureEventKind, InputEvent, Touches};
pub use listeners::Listeners;
pub use pointer::PointerState;
pub use tracker::{
    DOUBLE_TAP_WINDOW_MS, GesturePhase, GestureTracker, PINCH_ZOOM_IN, PINCH_ZOOM_OUT,
    WHEEL_ZOOM_IN, WHEEL_ZOOM_OUT,
};
