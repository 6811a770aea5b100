// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

bitflags::bitflags! {
    /// Which halves of a shape a [`Style`] paints.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Skip the fill.
        const NO_FILL   = 0b0000_0001;
        /// Skip the outline.
        const NO_STROKE = 0b0000_0010;
    }
}

/// Paint settings for affordances and other simple shapes.
#[derive(Clone, Copy, Debug)]
pub struct Style {
    /// Fill color.
    pub fill_color: Color,
    /// Outline color.
    pub stroke_color: Color,
    /// Outline width in world units.
    pub weight: f64,
    /// Fill/stroke suppression.
    pub flags: StyleFlags,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill_color: Color::BLACK,
            stroke_color: Color::BLACK,
            weight: 1.0,
            flags: StyleFlags::empty(),
        }
    }
}

impl Style {
    /// Translucent violet used for draggable handles.
    #[must_use]
    pub fn handle() -> Self {
        let violet = Color::from_rgba8(0x55, 0x33, 0xff, 0x50);
        Self {
            fill_color: violet,
            stroke_color: violet,
            ..Self::default()
        }
    }

    /// Outline-only variant of [`Style::handle`], used for clickable regions.
    #[must_use]
    pub fn region() -> Self {
        Self::handle().without_fill()
    }

    /// Sets both fill and outline color.
    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self.stroke_color = color;
        self
    }

    /// Sets the fill color.
    #[must_use]
    pub fn with_fill(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Sets the outline color.
    #[must_use]
    pub fn with_stroke(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Sets the outline width.
    #[must_use]
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Disables the fill.
    #[must_use]
    pub fn without_fill(mut self) -> Self {
        self.flags |= StyleFlags::NO_FILL;
        self
    }

    /// Disables the outline.
    #[must_use]
    pub fn without_stroke(mut self) -> Self {
        self.flags |= StyleFlags::NO_STROKE;
        self
    }

    /// Returns `true` if the fill should be painted.
    #[must_use]
    pub fn fills(&self) -> bool {
        !self.flags.contains(StyleFlags::NO_FILL)
    }

    /// Returns `true` if the outline should be painted.
    #[must_use]
    pub fn strokes(&self) -> bool {
        !self.flags.contains(StyleFlags::NO_STROKE)
    }
}

/// Shape of a draggable's handle affordance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HandleShape {
    /// Circle of the grab radius.
    #[default]
    Circle,
    /// Square circumscribing the grab circle.
    Square,
}

/// Appearance of a draggable's handle.
#[derive(Clone, Copy, Debug, Default)]
pub struct HandleStyle {
    /// Handle outline shape.
    pub shape: HandleShape,
    /// Paint settings.
    pub style: Style,
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::{Style, StyleFlags};

    #[test]
    fn default_paints_both_halves() {
        let style = Style::default();
        assert!(style.fills());
        assert!(style.strokes());
        assert_eq!(style.weight, 1.0);
    }

    #[test]
    fn flags_suppress_halves() {
        let style = Style::default().without_fill();
        assert!(!style.fills());
        assert!(style.strokes());

        let style = style.without_stroke();
        assert_eq!(style.flags, StyleFlags::NO_FILL | StyleFlags::NO_STROKE);
    }

    #[test]
    fn region_is_outline_only() {
        let region = Style::region();
        assert!(!region.fills());
        assert!(region.strokes());
        assert_eq!(
            region.stroke_color.to_rgba8(),
            Style::handle().stroke_color.to_rgba8()
        );
    }

    #[test]
    fn with_color_sets_both() {
        let style = Style::default().with_color(Color::WHITE);
        assert_eq!(style.fill_color.to_rgba8(), Color::WHITE.to_rgba8());
        assert_eq!(style.stroke_color.to_rgba8(), Color::WHITE.to_rgba8());
    }
}
