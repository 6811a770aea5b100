// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easel View: the pan/zoom viewport behind an Easel drawing surface.
//!
//! This crate provides a small, headless model of the transform applied to a
//! fixed-size scene before it is drawn:
//! - [`Viewport`]: current scale and origin offset, conversion between screen
//!   and world coordinates, anchored zoom and origin clamping.
//! - [`ZoomAnimator`]: a fixed-length eased zoom between `1` and the
//!   viewport's maximum scale, anchored at a screen point.
//! - [`easing`]: the cubic ease-in-out curve and range mapping used by the
//!   animator.
//!
//! It does **not** interpret input or draw anything. Gesture handling lives in
//! `easel_gesture`, and `easel` applies [`Viewport::transform`] to its surface
//! every tick.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use easel_view::Viewport;
//!
//! let mut view = Viewport::new(Size::new(400.0, 400.0));
//!
//! // Zoom in around the center of the scene.
//! view.scale_at(Point::new(200.0, 200.0), 2.0);
//! assert_eq!(view.scale(), 2.0);
//!
//! // The anchor stays put on screen.
//! let world = view.screen_to_world(Point::new(200.0, 200.0));
//! assert_eq!(world, Point::new(200.0, 200.0));
//! ```
//!
//! ## Design notes
//!
//! - Scale is uniform and never leaves `[1, max_scale]`; the scene can only be
//!   magnified, never shrunk below its natural size.
//! - The origin is clamped so the scaled scene always covers the whole screen.
//! - Rotation is not modelled.
//!
//! This crate is `no_std`.

#![no_std]

pub mod easing;
mod viewport;
mod zoom;

pub use viewport::{DEFAULT_MAX_SCALE, Viewport, ViewportDebugInfo};
pub use zoom::{ZOOM_FRAMES, ZoomAnimator, ZoomDirection};
