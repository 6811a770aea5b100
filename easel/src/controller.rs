// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;
use core::time::Duration;

use easel_gesture::{GestureEvent, GestureEventKind, GestureTracker, InputEvent};
use easel_interaction::{
    Affordance, AffordanceId, ClickableId, DragEvents, DraggableId, HandleStyle, Registry,
    SharedPoint,
};
use easel_view::Viewport;
use kurbo::{Point, Vec2};
use tracing::{debug, warn};

use crate::layer::{Deferred, Layers};
use crate::{InitError, LayerContext, LayerId, Options, Surface, Ticker};

/// A pan/zoom drawing surface.
///
/// `Easel` owns the viewport, the gesture tracker, the registry of
/// interactive elements and the layer list. Hosts feed it input through
/// [`Easel::handle_input`] and drive rendering with [`Easel::tick`] or
/// [`Easel::advance`].
///
/// Each tick:
/// 1. advances a running zoom animation,
/// 2. applies the viewport transform to the surface,
/// 3. clears the surface and fills the visible region with the background,
/// 4. calls every layer in order, running draws it deferred right after it,
/// 5. draws the affordances of the registry on top.
pub struct Easel<S> {
    surface: S,
    options: Options,
    viewport: Viewport,
    tracker: GestureTracker,
    registry: Registry,
    layers: Layers<S>,
    deferred: Vec<Deferred<S>>,
    ticker: Ticker,
    frame: u64,
}

impl<S> fmt::Debug for Easel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Easel")
            .field("options", &self.options)
            .field("viewport", &self.viewport)
            .field("tracker", &self.tracker)
            .field("registry", &self.registry)
            .field("layers", &self.layers.len())
            .field("frame", &self.frame)
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Easel<S> {
    /// Validates `options`, sizes `surface` and builds an unzoomed easel.
    pub fn new(mut surface: S, options: Options) -> Result<Self, InitError> {
        if let Err(err) = options.validate() {
            warn!(%err, "easel construction failed");
            return Err(err);
        }
        surface.resize(options.size());
        let viewport = Viewport::with_max_scale(options.size(), options.max_scale);
        debug!(
            width = options.width,
            height = options.height,
            framerate = options.framerate,
            max_scale = viewport.max_scale(),
            "easel created"
        );
        Ok(Self {
            surface,
            options,
            viewport,
            tracker: GestureTracker::new(),
            registry: Registry::new(),
            layers: Layers::default(),
            deferred: Vec::new(),
            ticker: Ticker::new(options.framerate),
            frame: 0,
        })
    }

    /// Renders one frame.
    pub fn tick(&mut self) {
        self.tracker.animate(&mut self.viewport);

        self.surface.set_transform(self.viewport.transform());
        self.surface.clear();
        self.surface
            .fill_rect(self.viewport.visible_world_rect(), self.options.background);

        let frame = self.frame;
        for (index, layer) in self.layers.iter_mut().enumerate() {
            let mut cx = LayerContext {
                surface: &mut self.surface,
                viewport: &self.viewport,
                deferred: &mut self.deferred,
                frame,
                index,
            };
            (layer.draw)(&mut cx);
            while let Some(draw) = self.deferred.pop() {
                draw(&mut self.surface);
            }
        }

        for (_, affordance) in self.registry.affordances() {
            draw_affordance(&mut self.surface, affordance);
        }

        self.frame += 1;
    }

    /// Adds `elapsed` wall time and renders every frame that became due.
    ///
    /// Returns the number of frames rendered.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let due = self.ticker.advance(elapsed);
        for _ in 0..due {
            self.tick();
        }
        due
    }
}

impl<S> Easel<S> {
    /// Processes one input event.
    pub fn handle_input(&mut self, event: &InputEvent) {
        self.tracker
            .handle(event, &mut self.viewport, &mut self.registry);
    }

    /// Adds a listener for touch and double-tap activity.
    pub fn register_event(
        &mut self,
        kind: GestureEventKind,
        f: impl FnMut(&GestureEvent) + 'static,
    ) {
        self.tracker.register_event(kind, f);
    }

    /// Adds a layer drawn after the existing ones.
    pub fn create_layer(&mut self, f: impl FnMut(&mut LayerContext<'_, S>) + 'static) -> LayerId {
        self.layers.push(f)
    }

    /// Removes a layer. Returns `false` if it does not exist.
    pub fn delete_layer(&mut self, id: LayerId) -> bool {
        self.layers.remove(id)
    }

    /// Moves a layer to `index` in the draw order, clamped to the end.
    pub fn move_layer(&mut self, id: LayerId, index: usize) -> bool {
        self.layers.move_to(id, index)
    }

    /// Position of a layer in the draw order.
    #[must_use]
    pub fn layer_index(&self, id: LayerId) -> Option<usize> {
        self.layers.position(id)
    }

    /// Layers in draw order.
    pub fn layers(&self) -> impl Iterator<Item = LayerId> + '_ {
        self.layers.ids()
    }

    /// Registers an application-owned point as draggable.
    ///
    /// See [`Registry::register_draggable`].
    pub fn register_draggable(
        &mut self,
        point: &SharedPoint,
        radius: f64,
        style: Option<HandleStyle>,
    ) -> DraggableId {
        self.registry.register_draggable(point, radius, style)
    }

    /// Removes a draggable and its handle.
    pub fn unregister_draggable(&mut self, point: &SharedPoint) -> bool {
        self.registry.unregister_draggable(point)
    }

    /// Attaches drag callbacks to a registered point.
    pub fn add_drag_events(&mut self, point: &SharedPoint, events: DragEvents) -> bool {
        self.registry.add_drag_events(point, events)
    }

    /// Registers a clickable rectangle, in world coordinates.
    pub fn register_clickable(
        &mut self,
        corner1: Point,
        corner2: Point,
        on_click: impl FnMut() + 'static,
    ) -> ClickableId {
        self.registry.register_clickable(corner1, corner2, on_click)
    }

    /// Removes a clickable rectangle.
    pub fn unregister_clickable(&mut self, id: ClickableId) -> bool {
        self.registry.unregister_clickable(id)
    }

    /// Adds an affordance drawn on top of every layer.
    pub fn add_ui_element(&mut self, affordance: Affordance) -> AffordanceId {
        self.registry.add_ui_element(affordance)
    }

    /// Removes an affordance.
    pub fn remove_ui_element(&mut self, id: AffordanceId) -> bool {
        self.registry.remove_ui_element(id)
    }

    /// Pans by a screen-space delta. No-op while unzoomed.
    pub fn move_origin(&mut self, delta: Vec2) {
        self.viewport.move_origin(delta);
    }

    /// Zooms by `factor` keeping `anchor` fixed on screen.
    pub fn scale_at(&mut self, anchor: Point, factor: f64) {
        self.viewport.scale_at(anchor, factor);
    }

    /// Changes the zoom ceiling.
    pub fn set_max_scale(&mut self, max_scale: f64) {
        self.viewport.set_max_scale(max_scale);
        self.options.max_scale = self.viewport.max_scale();
    }

    /// Maps a world point to the screen.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.viewport.world_to_screen(pt)
    }

    /// Maps a screen point to the world.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.viewport.screen_to_world(pt)
    }

    /// The current viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// The gesture tracker.
    #[must_use]
    pub fn tracker(&self) -> &GestureTracker {
        &self.tracker
    }

    /// The registry of interactive elements.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Options the easel was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// The drawing surface, mutably.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

fn draw_affordance<S: Surface>(surface: &mut S, affordance: &Affordance) {
    let style = affordance.style();
    match affordance {
        Affordance::Circle { center, radius, .. } => {
            let center = center.get();
            if style.fills() {
                surface.fill_circle(center, *radius, style.fill_color);
            }
            if style.strokes() {
                surface.stroke_circle(center, *radius, style.stroke_color, style.weight);
            }
        }
        Affordance::Square { .. } | Affordance::Rect { .. } => {
            let rect = affordance.bounds();
            if style.fills() {
                surface.fill_rect(rect, style.fill_color);
            }
            if style.strokes() {
                surface.stroke_rect(rect, style.stroke_color, style.weight);
            }
        }
    }
}
