// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel Interaction: the registry of interactive elements on a drawing surface.
//!
//! Applications register three kinds of things:
//!
//! - **Draggables**: a [`SharedPoint`] the application owns, plus a grab
//!   radius and optional drag callbacks. The point is shared, not copied:
//!   dragging moves the application's own value.
//! - **Clickables**: axis-aligned rectangles with a callback. All clickables
//!   containing a press fire; there is no stacking order.
//! - **Affordances**: indicators drawn on top of every layer. Draggables and
//!   clickables get one automatically; others can be added directly.
//!
//! Hit testing is a linear scan in registration order. For overlapping
//! draggables the **last registered** one wins, not the nearest.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use easel_interaction::{Registry, SharedPoint};
//!
//! let mut registry = Registry::new();
//! let handle = SharedPoint::new(Point::new(30.0, 30.0));
//! let id = registry.register_draggable(&handle, 20.0, None);
//!
//! // Registering the same point again is absorbed.
//! assert_eq!(registry.register_draggable(&handle, 5.0, None), id);
//! assert_eq!(registry.draggable_count(), 1);
//!
//! // A press within the radius hits it; dragging moves the shared point.
//! assert_eq!(registry.hit_draggable(Point::new(40.0, 40.0)), Some(id));
//! registry.drag_by(id, Vec2::new(5.0, 5.0));
//! assert_eq!(handle.get(), Point::new(35.0, 35.0));
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod affordance;
mod point;
mod registry;
mod style;

pub use affordance::{Affordance, AffordanceId};
pub use point::SharedPoint;
pub use registry::{Clickable, ClickableId, DragEvents, Draggable, DraggableId, Registry};
pub use style::{HandleShape, HandleStyle, Style, StyleFlags};
