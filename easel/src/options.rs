// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use easel_view::DEFAULT_MAX_SCALE;
use kurbo::Size;
use peniko::Color;

use crate::InitError;

/// Construction options for an [`Easel`](crate::Easel).
///
/// ```
/// use easel::Options;
/// use peniko::Color;
///
/// let options = Options::new(800.0, 600.0)
///     .with_background(Color::BLACK)
///     .with_framerate(30)
///     .with_max_scale(8.0);
/// assert_eq!(options.framerate, 30);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Options {
    /// Scene and surface width.
    pub width: f64,
    /// Scene and surface height.
    pub height: f64,
    /// Color the visible region is filled with before the layers draw.
    pub background: Color,
    /// Ticks per second of the render loop.
    pub framerate: u32,
    /// Zoom ceiling.
    pub max_scale: f64,
}

impl Default for Options {
    fn default() -> Self {
        Self::new(400.0, 400.0)
    }
}

impl Options {
    /// Options for a `width` × `height` scene with default settings.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            background: Color::WHITE,
            framerate: 60,
            max_scale: DEFAULT_MAX_SCALE,
        }
    }

    /// Sets the background color.
    #[must_use]
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    /// Sets the render loop rate.
    #[must_use]
    pub fn with_framerate(mut self, framerate: u32) -> Self {
        self.framerate = framerate;
        self
    }

    /// Sets the zoom ceiling. Values below `1` are raised to `1`.
    #[must_use]
    pub fn with_max_scale(mut self, max_scale: f64) -> Self {
        self.max_scale = max_scale;
        self
    }

    /// Scene size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Checks that the options describe a usable surface.
    pub fn validate(&self) -> Result<(), InitError> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(InitError::InvalidOptions("width must be positive"));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(InitError::InvalidOptions("height must be positive"));
        }
        if self.framerate == 0 {
            return Err(InitError::InvalidOptions("framerate must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::Options;
    use crate::InitError;

    #[test]
    fn defaults() {
        let options = Options::new(300.0, 200.0);
        assert_eq!(options.framerate, 60);
        assert_eq!(options.max_scale, 4.0);
        assert_eq!(options.background.to_rgba8(), Color::WHITE.to_rgba8());
        assert_eq!(options.validate(), Ok(()));
    }

    #[test]
    fn rejects_degenerate_sizes_and_rates() {
        assert_eq!(
            Options::new(0.0, 10.0).validate(),
            Err(InitError::InvalidOptions("width must be positive"))
        );
        assert_eq!(
            Options::new(10.0, f64::NAN).validate(),
            Err(InitError::InvalidOptions("height must be positive"))
        );
        assert_eq!(
            Options::new(10.0, 10.0).with_framerate(0).validate(),
            Err(InitError::InvalidOptions("framerate must be positive"))
        );
    }
}
