// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel: an interactive drawing surface for 2D scenes.
//!
//! A scene is a list of stateless layer callbacks redrawn at a fixed rate.
//! [`Easel`] puts a pan/zoom viewport in front of them and interprets pointer,
//! wheel and touch input:
//!
//! - wheel and pinch zoom around the pointer or the fingers,
//! - pressing and moving pans while zoomed in,
//! - a double tap toggles an eased zoom, a double click resets the view,
//! - registered draggable points can be grabbed and moved, which suppresses
//!   panning for that press,
//! - registered clickable rectangles fire on release.
//!
//! Drawing goes through the [`Surface`] trait. [`RecordingSurface`] records
//! the calls for tests; `easel_web_canvas` draws to an HTML canvas.
//!
//! ## Minimal example
//!
//! ```rust
//! use easel::{Easel, InputEvent, Options, RecordingSurface, SharedPoint, Surface};
//! use kurbo::Point;
//! use peniko::Color;
//!
//! let mut easel = Easel::new(RecordingSurface::new(), Options::new(400.0, 400.0)).unwrap();
//!
//! let handle = SharedPoint::new(Point::new(100.0, 100.0));
//! easel.register_draggable(&handle, 10.0, None);
//!
//! let h = handle.clone();
//! easel.create_layer(move |cx| {
//!     cx.surface().fill_circle(h.get(), 4.0, Color::BLACK);
//! });
//!
//! easel.handle_input(&InputEvent::PointerDown { position: Point::new(100.0, 100.0) });
//! easel.handle_input(&InputEvent::PointerMove { position: Point::new(120.0, 100.0) });
//! easel.handle_input(&InputEvent::PointerUp { position: Point::new(120.0, 100.0) });
//! assert_eq!(handle.get(), Point::new(120.0, 100.0));
//!
//! easel.tick();
//! assert_eq!(easel.frame(), 1);
//! ```

mod controller;
mod error;
mod layer;
mod options;
mod slot;
mod surface;
mod ticker;

pub use controller::Easel;
pub use error::InitError;
pub use layer::{LayerContext, LayerId};
pub use options::Options;
pub use slot::EaselSlot;
pub use surface::{RecordingSurface, Surface, SurfaceOp};
pub use ticker::Ticker;

pub use easel_gesture::{
    GestureEvent, GestureEventKind, GesturePhase, GestureTracker, InputEvent, Touches,
};
pub use easel_interaction::{
    Affordance, AffordanceId, ClickableId, DragEvents, DraggableId, HandleShape, HandleStyle,
    Registry, SharedPoint, Style, StyleFlags,
};
pub use easel_view::{Viewport, ViewportDebugInfo};
