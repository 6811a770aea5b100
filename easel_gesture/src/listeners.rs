// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::{GestureEvent, GestureEventKind};

type Listener = Box<dyn FnMut(&GestureEvent)>;

/// Application callbacks, one list per [`GestureEventKind`].
///
/// Callbacks run in registration order. There is no removal.
#[derive(Default)]
pub struct Listeners {
    gesture_end: Vec<Listener>,
    touch_start: Vec<Listener>,
    touch_move: Vec<Listener>,
    double_tap: Vec<Listener>,
}

impl Listeners {
    fn bucket(&mut self, kind: GestureEventKind) -> &mut Vec<Listener> {
        match kind {
            GestureEventKind::GestureEnd => &mut self.gesture_end,
            GestureEventKind::TouchStart => &mut self.touch_start,
            GestureEventKind::TouchMove => &mut self.touch_move,
            GestureEventKind::DoubleTap => &mut self.double_tap,
        }
    }

    /// Adds a callback for `kind`.
    pub fn register(&mut self, kind: GestureEventKind, f: impl FnMut(&GestureEvent) + 'static) {
        self.bucket(kind).push(Box::new(f));
    }

    /// Delivers `event` to every callback of its kind.
    pub fn emit(&mut self, event: &GestureEvent) {
        for f in self.bucket(event.kind()) {
            f(event);
        }
    }

    /// Number of callbacks registered for `kind`.
    #[must_use]
    pub fn len(&self, kind: GestureEventKind) -> usize {
        match kind {
            GestureEventKind::GestureEnd => self.gesture_end.len(),
            GestureEventKind::TouchStart => self.touch_start.len(),
            GestureEventKind::TouchMove => self.touch_move.len(),
            GestureEventKind::DoubleTap => self.double_tap.len(),
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("gesture_end", &self.gesture_end.len())
            .field("touch_start", &self.touch_start.len())
            .field("touch_move", &self.touch_move.len())
            .field("double_tap", &self.double_tap.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use core::cell::Cell;

    use kurbo::Point;

    use super::Listeners;
    use crate::{GestureEvent, GestureEventKind};

    #[test]
    fn events_only_reach_their_own_kind() {
        let mut listeners = Listeners::default();
        let taps = Rc::new(Cell::new(0));
        let ends = Rc::new(Cell::new(0));
        let (t, e) = (taps.clone(), ends.clone());
        listeners.register(GestureEventKind::DoubleTap, move |_| t.set(t.get() + 1));
        listeners.register(GestureEventKind::GestureEnd, move |_| e.set(e.get() + 1));

        listeners.emit(&GestureEvent::DoubleTap {
            position: Point::ZERO,
        });
        listeners.emit(&GestureEvent::DoubleTap {
            position: Point::ZERO,
        });

        assert_eq!(taps.get(), 2);
        assert_eq!(ends.get(), 0);
        assert_eq!(listeners.len(GestureEventKind::DoubleTap), 1);
        assert_eq!(listeners.len(GestureEventKind::TouchMove), 0);
    }
}
