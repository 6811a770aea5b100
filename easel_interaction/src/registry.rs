// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Registration storage and hit testing for draggables, clickables and affordances.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Vec2};
use smallvec::SmallVec;

use crate::{Affordance, AffordanceId, HandleShape, HandleStyle, SharedPoint, Style};

/// Identifier of a registered draggable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DraggableId(u64);

/// Identifier of a registered clickable region.
///
/// Closures have no identity, so this handle is what unregisters a clickable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClickableId(u64);

type DragCallback = Box<dyn FnMut()>;
type DragMoveCallback = Box<dyn FnMut(Vec2)>;

/// Optional callbacks attached to a draggable.
#[derive(Default)]
pub struct DragEvents {
    /// Fired when a press grabs the draggable.
    pub on_drag_start: Option<DragCallback>,
    /// Fired for every move while grabbed, with the screen-space delta.
    pub on_drag: Option<DragMoveCallback>,
    /// Fired when the press is released.
    pub on_drag_end: Option<DragCallback>,
}

impl DragEvents {
    /// No callbacks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the drag-start callback.
    #[must_use]
    pub fn on_drag_start(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_start = Some(Box::new(f));
        self
    }

    /// Sets the drag callback.
    #[must_use]
    pub fn on_drag(mut self, f: impl FnMut(Vec2) + 'static) -> Self {
        self.on_drag = Some(Box::new(f));
        self
    }

    /// Sets the drag-end callback.
    #[must_use]
    pub fn on_drag_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_drag_end = Some(Box::new(f));
        self
    }
}

impl fmt::Debug for DragEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragEvents")
            .field("on_drag_start", &self.on_drag_start.is_some())
            .field("on_drag", &self.on_drag.is_some())
            .field("on_drag_end", &self.on_drag_end.is_some())
            .finish()
    }
}

/// A registered draggable point.
#[derive(Debug)]
pub struct Draggable {
    point: SharedPoint,
    radius: f64,
    style: Option<HandleStyle>,
    affordance: AffordanceId,
    events: DragEvents,
}

impl Draggable {
    /// Returns the shared position.
    #[must_use]
    pub fn point(&self) -> &SharedPoint {
        &self.point
    }

    /// Returns the grab radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the handle style given at registration.
    #[must_use]
    pub fn style(&self) -> Option<&HandleStyle> {
        self.style.as_ref()
    }

    /// Returns the affordance drawn for this draggable.
    #[must_use]
    pub fn affordance(&self) -> AffordanceId {
        self.affordance
    }

    /// Returns `true` if `pos` is within the grab radius (inclusive).
    #[must_use]
    pub fn contains(&self, pos: Point) -> bool {
        self.point.get().distance(pos) <= self.radius
    }
}

/// A registered clickable region.
pub struct Clickable {
    bounds: Rect,
    affordance: AffordanceId,
    on_click: Box<dyn FnMut()>,
}

impl Clickable {
    /// Returns the normalized bounds.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the affordance drawn for this region.
    #[must_use]
    pub fn affordance(&self) -> AffordanceId {
        self.affordance
    }

    /// Returns `true` if `pos` lies inside the bounds, edges included.
    #[must_use]
    pub fn contains(&self, pos: Point) -> bool {
        pos.x >= self.bounds.x0
            && pos.x <= self.bounds.x1
            && pos.y >= self.bounds.y0
            && pos.y <= self.bounds.y1
    }
}

impl fmt::Debug for Clickable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Clickable")
            .field("bounds", &self.bounds)
            .field("affordance", &self.affordance)
            .finish_non_exhaustive()
    }
}

/// Registry of interactive elements.
///
/// Entries are keyed by monotonically increasing ids, so iteration follows
/// registration order and removal does not disturb the order of the rest.
/// Draggables are additionally indexed by point identity.
#[derive(Default)]
pub struct Registry {
    next_id: u64,
    draggables: BTreeMap<DraggableId, Draggable>,
    by_point: HashMap<usize, DraggableId>,
    clickables: BTreeMap<ClickableId, Clickable>,
    affordances: BTreeMap<AffordanceId, Affordance>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("draggables", &self.draggables.len())
            .field("clickables", &self.clickables.len())
            .field("affordances", &self.affordances.len())
            .finish_non_exhaustive()
    }
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn fresh_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    /// Registers `point` as draggable within `radius`.
    ///
    /// If this exact point is already registered the call is a no-op and the
    /// existing id is returned. Otherwise a handle affordance is created using
    /// `style`, or [`Style::handle`] in a circle when `style` is `None`.
    pub fn register_draggable(
        &mut self,
        point: &SharedPoint,
        radius: f64,
        style: Option<HandleStyle>,
    ) -> DraggableId {
        if let Some(&id) = self.by_point.get(&point.key()) {
            tracing::trace!(?id, "draggable already registered");
            return id;
        }
        let look = style.unwrap_or(HandleStyle {
            shape: HandleShape::Circle,
            style: Style::handle(),
        });
        let affordance = self.add_ui_element(match look.shape {
            HandleShape::Circle => Affordance::Circle {
                center: point.clone(),
                radius,
                style: look.style,
            },
            HandleShape::Square => Affordance::Square {
                center: point.clone(),
                half_extent: radius,
                style: look.style,
            },
        });
        let id = DraggableId(self.fresh_id());
        self.by_point.insert(point.key(), id);
        self.draggables.insert(
            id,
            Draggable {
                point: point.clone(),
                radius,
                style,
                affordance,
                events: DragEvents::default(),
            },
        );
        id
    }

    /// Removes the draggable registered for `point` along with its affordance.
    ///
    /// Returns `false` if the point was not registered.
    pub fn unregister_draggable(&mut self, point: &SharedPoint) -> bool {
        let Some(id) = self.by_point.remove(&point.key()) else {
            return false;
        };
        if let Some(d) = self.draggables.remove(&id) {
            self.affordances.remove(&d.affordance);
        }
        true
    }

    /// Attaches drag callbacks to an already registered point, replacing any
    /// previous ones.
    ///
    /// Returns `false` (and drops `events`) if the point is not registered.
    pub fn add_drag_events(&mut self, point: &SharedPoint, events: DragEvents) -> bool {
        let Some(d) = self
            .draggable_id(point)
            .and_then(|id| self.draggables.get_mut(&id))
        else {
            return false;
        };
        d.events = events;
        true
    }

    /// Returns the id registered for `point`, if any.
    #[must_use]
    pub fn draggable_id(&self, point: &SharedPoint) -> Option<DraggableId> {
        self.by_point.get(&point.key()).copied()
    }

    /// Returns a registered draggable.
    #[must_use]
    pub fn draggable(&self, id: DraggableId) -> Option<&Draggable> {
        self.draggables.get(&id)
    }

    /// Returns the number of registered draggables.
    #[must_use]
    pub fn draggable_count(&self) -> usize {
        self.draggables.len()
    }

    /// Iterates draggables in registration order.
    pub fn draggables(&self) -> impl Iterator<Item = (DraggableId, &Draggable)> + '_ {
        self.draggables.iter().map(|(&id, d)| (id, d))
    }

    /// Hit-tests a world-space position against every draggable.
    ///
    /// All draggables are tested in registration order and later matches
    /// override earlier ones, so among overlapping draggables the last
    /// registered wins.
    #[must_use]
    pub fn hit_draggable(&self, pos: Point) -> Option<DraggableId> {
        let mut hit = None;
        for (&id, d) in &self.draggables {
            if d.contains(pos) {
                hit = Some(id);
            }
        }
        hit
    }

    /// Fires the drag-start callback of `id`.
    pub fn begin_drag(&mut self, id: DraggableId) -> bool {
        let Some(d) = self.draggables.get_mut(&id) else {
            return false;
        };
        if let Some(f) = d.events.on_drag_start.as_mut() {
            f();
        }
        true
    }

    /// Moves the point of `id` by `delta` and fires its drag callback.
    pub fn drag_by(&mut self, id: DraggableId, delta: Vec2) -> bool {
        let Some(d) = self.draggables.get_mut(&id) else {
            return false;
        };
        d.point.translate(delta);
        if let Some(f) = d.events.on_drag.as_mut() {
            f(delta);
        }
        true
    }

    /// Fires the drag-end callback of `id`.
    pub fn end_drag(&mut self, id: DraggableId) -> bool {
        let Some(d) = self.draggables.get_mut(&id) else {
            return false;
        };
        if let Some(f) = d.events.on_drag_end.as_mut() {
            f();
        }
        true
    }

    /// Registers a clickable rectangle spanned by two opposite corners.
    ///
    /// The corners may be given in any order. The region includes its edges.
    pub fn register_clickable(
        &mut self,
        corner1: Point,
        corner2: Point,
        on_click: impl FnMut() + 'static,
    ) -> ClickableId {
        let bounds = Rect::from_points(corner1, corner2);
        let affordance = self.add_ui_element(Affordance::Rect {
            rect: bounds,
            style: Style::region(),
        });
        let id = ClickableId(self.fresh_id());
        self.clickables.insert(
            id,
            Clickable {
                bounds,
                affordance,
                on_click: Box::new(on_click),
            },
        );
        id
    }

    /// Removes a clickable region and its affordance.
    pub fn unregister_clickable(&mut self, id: ClickableId) -> bool {
        let Some(c) = self.clickables.remove(&id) else {
            return false;
        };
        self.affordances.remove(&c.affordance);
        true
    }

    /// Returns a registered clickable.
    #[must_use]
    pub fn clickable(&self, id: ClickableId) -> Option<&Clickable> {
        self.clickables.get(&id)
    }

    /// Returns the number of registered clickables.
    #[must_use]
    pub fn clickable_count(&self) -> usize {
        self.clickables.len()
    }

    /// Returns every clickable containing `pos`, in registration order.
    #[must_use]
    pub fn clickables_at(&self, pos: Point) -> SmallVec<[ClickableId; 4]> {
        self.clickables
            .iter()
            .filter(|(_, c)| c.contains(pos))
            .map(|(&id, _)| id)
            .collect()
    }

    /// Fires the callback of every clickable containing `pos`.
    ///
    /// Returns how many fired.
    pub fn click(&mut self, pos: Point) -> usize {
        let mut fired = 0;
        for c in self.clickables.values_mut() {
            if c.contains(pos) {
                (c.on_click)();
                fired += 1;
            }
        }
        fired
    }

    /// Adds an affordance drawn after every layer.
    pub fn add_ui_element(&mut self, affordance: Affordance) -> AffordanceId {
        let id = AffordanceId(self.fresh_id());
        self.affordances.insert(id, affordance);
        id
    }

    /// Removes an affordance.
    pub fn remove_ui_element(&mut self, id: AffordanceId) -> bool {
        self.affordances.remove(&id).is_some()
    }

    /// Iterates affordances in creation order.
    pub fn affordances(&self) -> impl Iterator<Item = (AffordanceId, &Affordance)> + '_ {
        self.affordances.iter().map(|(&id, a)| (id, a))
    }
}

#[cfg(test)]
mod tests {
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::{Cell, RefCell};

    use kurbo::{Point, Rect, Vec2};

    use super::{DragEvents, Registry};
    use crate::{Affordance, HandleShape, HandleStyle, SharedPoint, Style};

    #[test]
    fn duplicate_registration_is_absorbed() {
        let mut reg = Registry::new();
        let p = SharedPoint::new(Point::new(30.0, 30.0));

        let first = reg.register_draggable(&p, 20.0, None);
        let second = reg.register_draggable(&p.clone(), 99.0, None);

        assert_eq!(first, second);
        assert_eq!(reg.draggable_count(), 1);
        assert_eq!(reg.affordances().count(), 1);
        assert_eq!(reg.draggable(first).map(|d| d.radius()), Some(20.0));
    }

    #[test]
    fn equal_coordinates_register_separately() {
        let mut reg = Registry::new();
        let a = SharedPoint::new(Point::new(1.0, 1.0));
        let b = SharedPoint::new(Point::new(1.0, 1.0));

        assert_ne!(
            reg.register_draggable(&a, 5.0, None),
            reg.register_draggable(&b, 5.0, None)
        );
        assert_eq!(reg.draggable_count(), 2);
    }

    #[test]
    fn unregister_removes_entry_and_affordance() {
        let mut reg = Registry::new();
        let p = SharedPoint::new(Point::new(30.0, 30.0));
        reg.register_draggable(&p, 20.0, None);

        assert!(reg.unregister_draggable(&p));
        assert_eq!(reg.draggable_count(), 0);
        assert_eq!(reg.affordances().count(), 0);
        assert_eq!(reg.hit_draggable(Point::new(30.0, 30.0)), None);

        // Unknown point: absorbed.
        assert!(!reg.unregister_draggable(&p));
    }

    #[test]
    fn hit_uses_inclusive_radius() {
        let mut reg = Registry::new();
        let p = SharedPoint::new(Point::new(0.0, 0.0));
        let id = reg.register_draggable(&p, 5.0, None);

        assert_eq!(reg.hit_draggable(Point::new(3.0, 4.0)), Some(id));
        assert_eq!(reg.hit_draggable(Point::new(3.0, 4.1)), None);
    }

    #[test]
    fn last_registered_overlapping_draggable_wins() {
        let mut reg = Registry::new();
        let near = SharedPoint::new(Point::new(10.0, 10.0));
        let far = SharedPoint::new(Point::new(20.0, 10.0));
        let _near_id = reg.register_draggable(&near, 15.0, None);
        let far_id = reg.register_draggable(&far, 15.0, None);

        // The press is right on `near`, but `far` was registered later.
        assert_eq!(reg.hit_draggable(Point::new(10.0, 10.0)), Some(far_id));
    }

    #[test]
    fn drag_moves_shared_point_and_fires_callbacks() {
        let mut reg = Registry::new();
        let p = SharedPoint::new(Point::new(30.0, 30.0));
        let id = reg.register_draggable(&p, 20.0, None);

        let log = Rc::new(RefCell::new(Vec::new()));
        let (l1, l2, l3) = (log.clone(), log.clone(), log.clone());
        assert!(
            reg.add_drag_events(
                &p,
                DragEvents::new()
                    .on_drag_start(move || l1.borrow_mut().push("start"))
                    .on_drag(move |_| l2.borrow_mut().push("drag"))
                    .on_drag_end(move || l3.borrow_mut().push("end")),
            )
        );

        reg.begin_drag(id);
        reg.drag_by(id, Vec2::new(5.0, 5.0));
        reg.end_drag(id);

        assert_eq!(p.get(), Point::new(35.0, 35.0));
        assert_eq!(*log.borrow(), ["start", "drag", "end"]);
    }

    #[test]
    fn drag_events_on_unknown_point_are_dropped() {
        let mut reg = Registry::new();
        let p = SharedPoint::new(Point::ZERO);
        assert!(!reg.add_drag_events(&p, DragEvents::new()));
    }

    #[test]
    fn clickable_corners_are_normalized_and_edges_count() {
        let mut reg = Registry::new();
        let id = reg.register_clickable(Point::new(10.0, 20.0), Point::new(0.0, 0.0), || {});

        assert_eq!(
            reg.clickable(id).map(|c| c.bounds()),
            Some(Rect::new(0.0, 0.0, 10.0, 20.0))
        );
        assert_eq!(reg.clickables_at(Point::new(10.0, 20.0)).as_slice(), &[id]);
        assert_eq!(reg.clickables_at(Point::new(0.0, 0.0)).as_slice(), &[id]);
        assert!(reg.clickables_at(Point::new(10.1, 5.0)).is_empty());
    }

    #[test]
    fn overlapping_clickables_all_fire() {
        let mut reg = Registry::new();
        let hits = Rc::new(Cell::new(0));
        let (h1, h2, h3) = (hits.clone(), hits.clone(), hits.clone());
        reg.register_clickable(Point::ZERO, Point::new(10.0, 10.0), move || {
            h1.set(h1.get() + 1);
        });
        reg.register_clickable(Point::new(5.0, 5.0), Point::new(15.0, 15.0), move || {
            h2.set(h2.get() + 1);
        });
        reg.register_clickable(Point::new(50.0, 50.0), Point::new(60.0, 60.0), move || {
            h3.set(h3.get() + 100);
        });

        assert_eq!(reg.click(Point::new(7.0, 7.0)), 2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn unregister_clickable_by_id() {
        let mut reg = Registry::new();
        let id = reg.register_clickable(Point::ZERO, Point::new(1.0, 1.0), || {});
        assert_eq!(reg.affordances().count(), 1);

        assert!(reg.unregister_clickable(id));
        assert_eq!(reg.clickable_count(), 0);
        assert_eq!(reg.affordances().count(), 0);
        assert!(!reg.unregister_clickable(id));
    }

    #[test]
    fn square_handle_style_produces_square_affordance() {
        let mut reg = Registry::new();
        let p = SharedPoint::new(Point::new(5.0, 5.0));
        reg.register_draggable(
            &p,
            2.0,
            Some(HandleStyle {
                shape: HandleShape::Square,
                style: Style::default(),
            }),
        );
        let (_, a) = reg.affordances().next().unwrap();
        assert!(matches!(a, Affordance::Square { .. }));
        assert_eq!(a.bounds(), Rect::new(3.0, 3.0, 7.0, 7.0));
    }

    #[test]
    fn ui_elements_keep_creation_order() {
        let mut reg = Registry::new();
        let a = reg.add_ui_element(Affordance::Rect {
            rect: Rect::new(0.0, 0.0, 1.0, 1.0),
            style: Style::default(),
        });
        let b = reg.add_ui_element(Affordance::Rect {
            rect: Rect::new(1.0, 1.0, 2.0, 2.0),
            style: Style::default(),
        });
        let order: Vec<_> = reg.affordances().map(|(id, _)| id).collect();
        assert_eq!(order, [a, b]);

        assert!(reg.remove_ui_element(a));
        assert!(!reg.remove_ui_element(a));
        assert_eq!(reg.affordances().count(), 1);
    }
}
