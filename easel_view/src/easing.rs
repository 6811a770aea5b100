// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Timing helpers for the zoom animation.

/// Cubic ease-in-out: slow start, fast middle, slow end.
///
/// `t` is expected in `[0, 1]`; the result is in the same range and equals
/// `0` and `1` at the endpoints.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Linearly maps `value` from the range `[in_start, in_end]` onto
/// `[out_start, out_end]`.
///
/// Ranges may be reversed. Values outside the input range extrapolate.
#[must_use]
pub fn map_range(value: f64, in_start: f64, in_end: f64, out_start: f64, out_end: f64) -> f64 {
    (value - in_start) * (out_end - out_start) / (in_end - in_start) + out_start
}

#[cfg(test)]
mod tests {
    use super::{ease_in_out_cubic, map_range};

    #[test]
    fn ease_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn ease_is_monotonic() {
        let mut prev = ease_in_out_cubic(0.0);
        for i in 1..=100 {
            let next = ease_in_out_cubic(f64::from(i) / 100.0);
            assert!(next >= prev, "ease decreased at step {i}");
            prev = next;
        }
    }

    #[test]
    fn ease_is_slow_at_the_edges() {
        // Same input step, much smaller output step near the start than in the middle.
        let edge = ease_in_out_cubic(0.1) - ease_in_out_cubic(0.0);
        let middle = ease_in_out_cubic(0.55) - ease_in_out_cubic(0.45);
        assert!(edge < middle);
    }

    #[test]
    fn map_range_forward_and_reversed() {
        assert_eq!(map_range(0.5, 0.0, 1.0, 1.0, 4.0), 2.5);
        assert_eq!(map_range(0.0, 0.0, 1.0, 4.0, 1.0), 4.0);
        assert_eq!(map_range(1.0, 0.0, 1.0, 4.0, 1.0), 1.0);
        assert_eq!(map_range(30.0, 0.0, 60.0, 0.0, 1.0), 0.5);
    }
}
