// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use easel_view::Viewport;

/// Identifier of a layer created with [`Easel::create_layer`](crate::Easel::create_layer).
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LayerId(u64);

pub(crate) type Deferred<S> = Box<dyn FnOnce(&mut S)>;
pub(crate) type LayerFn<S> = Box<dyn FnMut(&mut LayerContext<'_, S>)>;

/// What a layer callback gets to draw with.
///
/// The surface already carries the viewport transform, so layers draw in
/// world coordinates.
pub struct LayerContext<'a, S> {
    pub(crate) surface: &'a mut S,
    pub(crate) viewport: &'a Viewport,
    pub(crate) deferred: &'a mut Vec<Deferred<S>>,
    pub(crate) frame: u64,
    pub(crate) index: usize,
}

impl<S> LayerContext<'_, S> {
    /// The drawing surface.
    pub fn surface(&mut self) -> &mut S {
        self.surface
    }

    /// Number of ticks rendered before this one.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Position of this layer in the draw order.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The viewport this frame is drawn with.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        self.viewport
    }

    /// Queues a draw to run once this layer returns.
    ///
    /// Queued draws run last-queued first.
    pub fn defer(&mut self, f: impl FnOnce(&mut S) + 'static) {
        self.deferred.push(Box::new(f));
    }
}

impl<S> fmt::Debug for LayerContext<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LayerContext")
            .field("frame", &self.frame)
            .field("index", &self.index)
            .field("deferred", &self.deferred.len())
            .finish_non_exhaustive()
    }
}

pub(crate) struct Layer<S> {
    pub(crate) id: LayerId,
    pub(crate) draw: LayerFn<S>,
}

/// Ordered list of layer callbacks.
pub(crate) struct Layers<S> {
    next_id: u64,
    entries: Vec<Layer<S>>,
}

impl<S> Default for Layers<S> {
    fn default() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }
}

impl<S> Layers<S> {
    pub(crate) fn push(
        &mut self,
        draw: impl FnMut(&mut LayerContext<'_, S>) + 'static,
    ) -> LayerId {
        self.next_id += 1;
        let id = LayerId(self.next_id);
        self.entries.push(Layer {
            id,
            draw: Box::new(draw),
        });
        id
    }

    pub(crate) fn remove(&mut self, id: LayerId) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        self.entries.remove(pos);
        true
    }

    /// Moves `id` to `index`, clamped to the last position.
    pub(crate) fn move_to(&mut self, id: LayerId, index: usize) -> bool {
        let Some(pos) = self.position(id) else {
            return false;
        };
        let layer = self.entries.remove(pos);
        let index = index.min(self.entries.len());
        self.entries.insert(index, layer);
        true
    }

    pub(crate) fn position(&self, id: LayerId) -> Option<usize> {
        self.entries.iter().position(|l| l.id == id)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.entries.iter().map(|l| l.id)
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Layer<S>> + '_ {
        self.entries.iter_mut()
    }
}
