// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! HTML canvas backend for Easel.
//!
//! On `wasm32` this crate provides:
//! - `WebCanvasSurface`: a [`Surface`](easel::Surface) drawing through a
//!   `CanvasRenderingContext2d`.
//! - `WebEasel`: attaches an [`Easel`](easel::Easel) to a canvas element,
//!   forwards mouse, wheel and touch events to it, and ticks it from
//!   `setInterval` at the configured framerate.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start(
//!     canvas: web_sys::HtmlCanvasElement,
//! ) -> Result<easel_web_canvas::WebEasel, easel::InitError> {
//!     easel_web_canvas::WebEasel::attach(canvas, easel::Options::new(800.0, 600.0))
//! }
//! ```
//!
//! A canvas without a 2D context yields
//! [`InitError::SurfaceUnavailable`](easel::InitError::SurfaceUnavailable).
//!
//! On other targets only the [`convert`] helpers are compiled.

pub mod convert;
#[cfg(target_arch = "wasm32")]
mod surface;
#[cfg(target_arch = "wasm32")]
mod wiring;

#[cfg(target_arch = "wasm32")]
pub use surface::WebCanvasSurface;
#[cfg(target_arch = "wasm32")]
pub use wiring::{SharedEasel, WebEasel};
