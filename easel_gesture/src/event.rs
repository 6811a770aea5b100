// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use smallvec::SmallVec;

/// Live touch positions, in surface-local screen coordinates.
pub type Touches = SmallVec<[Point; 2]>;

/// Raw input delivered by the host, in surface-local screen coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down.
    PointerDown {
        /// Press position.
        position: Point,
    },
    /// The pointer moved, pressed or not.
    PointerMove {
        /// New position.
        position: Point,
    },
    /// A pointer button was released.
    PointerUp {
        /// Release position.
        position: Point,
    },
    /// The pointer left the surface.
    PointerLeave,
    /// Wheel rotation. Negative `delta_y` zooms in.
    Wheel {
        /// Vertical wheel delta.
        delta_y: f64,
    },
    /// A double click; hard-resets the view.
    DoubleClick,
    /// One or more touches began.
    TouchStart {
        /// All touches currently down.
        touches: Touches,
        /// Event timestamp in milliseconds.
        time_ms: u64,
    },
    /// Touches moved.
    TouchMove {
        /// All touches currently down.
        touches: Touches,
    },
    /// One or more touches lifted.
    TouchEnd {
        /// Touches still down after the lift.
        touches: Touches,
    },
}

/// Events applications can listen for.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The last touch lifted outside of a pinch.
    GestureEnd,
    /// Touches began.
    TouchStart {
        /// All touches currently down.
        touches: Touches,
    },
    /// Touches moved.
    TouchMove {
        /// All touches currently down.
        touches: Touches,
    },
    /// A double tap started a zoom toggle.
    DoubleTap {
        /// Tap position, in screen coordinates.
        position: Point,
    },
}

impl GestureEvent {
    /// Returns the listener bucket this event is delivered to.
    #[must_use]
    pub fn kind(&self) -> GestureEventKind {
        match self {
            Self::GestureEnd => GestureEventKind::GestureEnd,
            Self::TouchStart { .. } => GestureEventKind::TouchStart,
            Self::TouchMove { .. } => GestureEventKind::TouchMove,
            Self::DoubleTap { .. } => GestureEventKind::DoubleTap,
        }
    }
}

/// Discriminant of [`GestureEvent`], used to register listeners.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum GestureEventKind {
    /// See [`GestureEvent::GestureEnd`].
    GestureEnd,
    /// See [`GestureEvent::TouchStart`].
    TouchStart,
    /// See [`GestureEvent::TouchMove`].
    TouchMove,
    /// See [`GestureEvent::DoubleTap`].
    DoubleTap,
}
