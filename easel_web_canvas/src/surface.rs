// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;
use core::fmt;

use easel::{InitError, Surface};
use kurbo::{Affine, Point, Rect, Size};
use peniko::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::convert::{canvas_dimension, color_to_css};

/// [`Surface`] drawing into an HTML canvas through its 2D context.
pub struct WebCanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl fmt::Debug for WebCanvasSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WebCanvasSurface { .. }")
    }
}

impl WebCanvasSurface {
    /// Acquires the 2D context of `canvas`.
    ///
    /// Fails with [`InitError::SurfaceUnavailable`] if the canvas has none.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, InitError> {
        let ctx = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .and_then(|ctx| ctx.dyn_into::<CanvasRenderingContext2d>().ok())
            .ok_or(InitError::SurfaceUnavailable)?;
        Ok(Self { canvas, ctx })
    }

    /// The canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// The 2D context, for drawing Easel has no operation for.
    #[must_use]
    pub fn context(&self) -> &CanvasRenderingContext2d {
        &self.ctx
    }

    fn circle_path(&self, center: Point, radius: f64) {
        self.ctx.begin_path();
        let _ = self.ctx.arc(center.x, center.y, radius, 0.0, TAU);
    }
}

impl Surface for WebCanvasSurface {
    fn resize(&mut self, size: Size) {
        self.canvas.set_width(canvas_dimension(size.width));
        self.canvas.set_height(canvas_dimension(size.height));
    }

    fn set_transform(&mut self, transform: Affine) {
        let [a, b, c, d, e, f] = transform.as_coeffs();
        let _ = self.ctx.set_transform(a, b, c, d, e, f);
    }

    fn clear(&mut self) {
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
        self.ctx.restore();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.ctx
            .fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.ctx
            .stroke_rect(rect.x0, rect.y0, rect.width(), rect.height());
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color) {
        self.ctx.set_fill_style_str(&color_to_css(color));
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, color: Color, width: f64) {
        self.ctx.set_stroke_style_str(&color_to_css(color));
        self.ctx.set_line_width(width);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }
}
