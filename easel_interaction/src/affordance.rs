// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::{SharedPoint, Style};

/// Identifier of a registered affordance.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AffordanceId(pub(crate) u64);

/// A UI indicator drawn after every layer, in world space.
///
/// Shapes anchored to a [`SharedPoint`] follow it as it moves.
#[derive(Clone, Debug)]
pub enum Affordance {
    /// Circle around a shared point.
    Circle {
        /// Center.
        center: SharedPoint,
        /// Radius in world units.
        radius: f64,
        /// Paint settings.
        style: Style,
    },
    /// Square centered on a shared point.
    Square {
        /// Center.
        center: SharedPoint,
        /// Half the side length in world units.
        half_extent: f64,
        /// Paint settings.
        style: Style,
    },
    /// Fixed rectangle.
    Rect {
        /// Bounds in world units.
        rect: Rect,
        /// Paint settings.
        style: Style,
    },
}

impl Affordance {
    /// Returns the paint settings.
    #[must_use]
    pub fn style(&self) -> &Style {
        match self {
            Self::Circle { style, .. } | Self::Square { style, .. } | Self::Rect { style, .. } => {
                style
            }
        }
    }

    /// Returns the current world-space bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Circle { center, radius, .. } => square_around(center.get(), *radius),
            Self::Square {
                center,
                half_extent,
                ..
            } => square_around(center.get(), *half_extent),
            Self::Rect { rect, .. } => *rect,
        }
    }
}

fn square_around(center: Point, half: f64) -> Rect {
    Rect::new(
        center.x - half,
        center.y - half,
        center.x + half,
        center.y + half,
    )
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Vec2};

    use super::Affordance;
    use crate::{SharedPoint, Style};

    #[test]
    fn circle_bounds_follow_the_point() {
        let center = SharedPoint::new(Point::new(10.0, 10.0));
        let circle = Affordance::Circle {
            center: center.clone(),
            radius: 5.0,
            style: Style::handle(),
        };
        assert_eq!(circle.bounds(), Rect::new(5.0, 5.0, 15.0, 15.0));

        center.translate(Vec2::new(10.0, 0.0));
        assert_eq!(circle.bounds(), Rect::new(15.0, 5.0, 25.0, 15.0));
    }

    #[test]
    fn rect_bounds_are_fixed() {
        let rect = Rect::new(0.0, 0.0, 4.0, 2.0);
        let a = Affordance::Rect {
            rect,
            style: Style::region(),
        };
        assert_eq!(a.bounds(), rect);
        assert!(!a.style().fills());
    }
}
