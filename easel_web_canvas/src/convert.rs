// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversions between DOM values and Easel types.
//!
//! These are plain functions so they can be tested off the browser.

use easel::Touches;
use kurbo::Point;
use peniko::Color;

/// CSS color string for a canvas fill or stroke style.
#[must_use]
pub fn color_to_css(color: Color) -> String {
    // The `Display` form of `Rgba8` is valid CSS.
    color.to_rgba8().to_string()
}

/// `setInterval` delay for a framerate, in whole milliseconds (at least 1).
#[must_use]
pub fn interval_ms(framerate: u32) -> i32 {
    let ms = 1000 / framerate.max(1);
    i32::try_from(ms.max(1)).unwrap_or(i32::MAX)
}

/// Converts client-space touch positions to surface-local ones.
pub fn touches_relative(points: impl IntoIterator<Item = Point>, surface_origin: Point) -> Touches {
    points
        .into_iter()
        .map(|p| (p - surface_origin).to_point())
        .collect()
}

/// DOM event timestamp (fractional milliseconds) as whole milliseconds.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Timestamps are non-negative and far below u64::MAX; sub-millisecond precision is not needed."
)]
pub fn timestamp_ms(time_stamp: f64) -> u64 {
    if time_stamp.is_finite() && time_stamp > 0.0 {
        time_stamp as u64
    } else {
        0
    }
}

/// Canvas backing-store dimension for a scene extent.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    reason = "Canvas dimensions are small positive integers."
)]
pub fn canvas_dimension(extent: f64) -> u32 {
    if extent.is_finite() && extent > 0.0 {
        extent.round() as u32
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use peniko::Color;

    use super::{canvas_dimension, interval_ms, timestamp_ms, touches_relative};

    #[test]
    fn interval_for_common_rates() {
        assert_eq!(interval_ms(60), 16);
        assert_eq!(interval_ms(30), 33);
        assert_eq!(interval_ms(0), 1000);
        assert_eq!(interval_ms(5000), 1);
    }

    #[test]
    fn touches_are_made_surface_local() {
        let touches = touches_relative(
            [Point::new(110.0, 220.0), Point::new(15.0, 25.0)],
            Point::new(10.0, 20.0),
        );
        assert_eq!(
            touches.as_slice(),
            &[Point::new(100.0, 200.0), Point::new(5.0, 5.0)]
        );
    }

    #[test]
    fn timestamps_truncate_and_reject_garbage() {
        assert_eq!(timestamp_ms(1234.9), 1234);
        assert_eq!(timestamp_ms(-3.0), 0);
        assert_eq!(timestamp_ms(f64::NAN), 0);
    }

    #[test]
    fn dimensions_round() {
        assert_eq!(canvas_dimension(399.6), 400);
        assert_eq!(canvas_dimension(-1.0), 0);
    }

    #[test]
    fn css_color_is_not_empty() {
        assert!(!super::color_to_css(Color::WHITE).is_empty());
    }
}
