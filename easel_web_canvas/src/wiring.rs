// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use easel::{Easel, InitError, InputEvent, Options, Touches};
use kurbo::Point;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, HtmlCanvasElement, MouseEvent, TouchEvent, WheelEvent, Window};

use crate::WebCanvasSurface;
use crate::convert::{interval_ms, timestamp_ms, touches_relative};

/// Easel driving a canvas, shared between the DOM callbacks.
pub type SharedEasel = Rc<RefCell<Easel<WebCanvasSurface>>>;

type Listener = Closure<dyn FnMut(Event)>;

/// An [`Easel`] attached to a canvas element.
///
/// Attaching wires the canvas's mouse, wheel and touch events into
/// [`Easel::handle_input`] and ticks the easel from `setInterval` at the
/// configured framerate. Dropping the handle detaches everything.
///
/// Events arriving while the easel is borrowed elsewhere (for example from
/// inside one of its own callbacks) are dropped.
pub struct WebEasel {
    easel: SharedEasel,
    canvas: HtmlCanvasElement,
    window: Window,
    listeners: Vec<(&'static str, Listener)>,
    interval: Option<(i32, Closure<dyn FnMut()>)>,
}

impl fmt::Debug for WebEasel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebEasel")
            .field("listeners", &self.listeners.len())
            .field("interval", &self.interval.as_ref().map(|(id, _)| *id))
            .finish_non_exhaustive()
    }
}

impl WebEasel {
    /// Builds an easel over `canvas` and starts its render loop.
    pub fn attach(canvas: HtmlCanvasElement, options: Options) -> Result<Self, InitError> {
        let window = web_sys::window().ok_or(InitError::SurfaceUnavailable)?;
        let surface = WebCanvasSurface::new(canvas.clone())?;
        let easel = Rc::new(RefCell::new(Easel::new(surface, options)?));

        let mut this = Self {
            easel,
            canvas,
            window,
            listeners: Vec::new(),
            interval: None,
        };
        this.wire_input()?;
        this.start()?;
        debug!(listeners = this.listeners.len(), "canvas attached");
        Ok(this)
    }

    /// Shared handle to the easel, for registering layers and draggables.
    #[must_use]
    pub fn easel(&self) -> SharedEasel {
        Rc::clone(&self.easel)
    }

    /// The canvas element.
    #[must_use]
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Starts ticking from `setInterval`. No-op if already running.
    pub fn start(&mut self) -> Result<(), InitError> {
        if self.interval.is_some() {
            return Ok(());
        }
        let easel = Rc::clone(&self.easel);
        let tick = Closure::wrap(Box::new(move || {
            if let Ok(mut easel) = easel.try_borrow_mut() {
                easel.tick();
            }
        }) as Box<dyn FnMut()>);
        let delay = interval_ms(self.easel.borrow().options().framerate);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                tick.as_ref().unchecked_ref(),
                delay,
            )
            .map_err(|_| {
                warn!("setInterval failed");
                InitError::SurfaceUnavailable
            })?;
        self.interval = Some((id, tick));
        Ok(())
    }

    /// Stops the render loop. Input keeps being handled.
    pub fn stop(&mut self) {
        if let Some((id, _tick)) = self.interval.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    fn wire_input(&mut self) -> Result<(), InitError> {
        self.listen("mousedown", |event, _| {
            let e = event.dyn_ref::<MouseEvent>()?;
            e.prevent_default();
            Some(InputEvent::PointerDown {
                position: offset(e),
            })
        })?;
        self.listen("mousemove", |event, _| {
            let e = event.dyn_ref::<MouseEvent>()?;
            Some(InputEvent::PointerMove {
                position: offset(e),
            })
        })?;
        self.listen("mouseup", |event, _| {
            let e = event.dyn_ref::<MouseEvent>()?;
            e.prevent_default();
            Some(InputEvent::PointerUp {
                position: offset(e),
            })
        })?;
        self.listen("mouseleave", |_, _| Some(InputEvent::PointerLeave))?;
        self.listen("wheel", |event, _| {
            let e = event.dyn_ref::<WheelEvent>()?;
            e.prevent_default();
            Some(InputEvent::Wheel {
                delta_y: e.delta_y(),
            })
        })?;
        self.listen("dblclick", |event, _| {
            event.prevent_default();
            Some(InputEvent::DoubleClick)
        })?;
        self.listen("touchstart", |event, canvas| {
            let e = event.dyn_ref::<TouchEvent>()?;
            e.prevent_default();
            Some(InputEvent::TouchStart {
                touches: touches(e, canvas),
                time_ms: timestamp_ms(event.time_stamp()),
            })
        })?;
        self.listen("touchmove", |event, canvas| {
            let e = event.dyn_ref::<TouchEvent>()?;
            e.prevent_default();
            Some(InputEvent::TouchMove {
                touches: touches(e, canvas),
            })
        })?;
        self.listen("touchend", |event, canvas| {
            let e = event.dyn_ref::<TouchEvent>()?;
            Some(InputEvent::TouchEnd {
                touches: touches(e, canvas),
            })
        })?;
        Ok(())
    }

    fn listen(
        &mut self,
        kind: &'static str,
        translate: impl Fn(&Event, &HtmlCanvasElement) -> Option<InputEvent> + 'static,
    ) -> Result<(), InitError> {
        let easel = Rc::clone(&self.easel);
        let canvas = self.canvas.clone();
        let listener = Closure::wrap(Box::new(move |event: Event| {
            let Some(input) = translate(&event, &canvas) else {
                return;
            };
            if let Ok(mut easel) = easel.try_borrow_mut() {
                easel.handle_input(&input);
            }
        }) as Box<dyn FnMut(Event)>);
        self.canvas
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            .map_err(|_| {
                warn!(kind, "addEventListener failed");
                InitError::SurfaceUnavailable
            })?;
        self.listeners.push((kind, listener));
        Ok(())
    }
}

impl Drop for WebEasel {
    fn drop(&mut self) {
        self.stop();
        for (kind, listener) in self.listeners.drain(..) {
            let _ = self
                .canvas
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref());
        }
    }
}

fn offset(e: &MouseEvent) -> Point {
    Point::new(f64::from(e.offset_x()), f64::from(e.offset_y()))
}

fn touches(e: &TouchEvent, canvas: &HtmlCanvasElement) -> Touches {
    let bounds = canvas.get_bounding_client_rect();
    let list = e.touches();
    let points = (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| Point::new(f64::from(t.client_x()), f64::from(t.client_y())));
    touches_relative(points, Point::new(bounds.x(), bounds.y()))
}
