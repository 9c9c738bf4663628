// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Scene: a small retained element tree for region maps.
//!
//! The scene holds groups, polygons, and text elements behind generational
//! [`ElementId`] handles. It is deliberately dumb: it knows nothing about
//! regions, datasets, or labels as concepts — only about elements, their
//! paint for the two visual states, and how to hit-test a point against
//! them. Policy (which label shows when, what a click means) lives in the
//! draw crate.
//!
//! - Groups carry a translation + scale transform and a [`VisualState`];
//!   descendant polygons resolve their active paint against the nearest
//!   ancestor group's state.
//! - Polygons are closed outlines carrying normal and emphasis [`Paint`].
//! - Text carries its own per-axis scale (for counter-scaling under zoom),
//!   an `ignore` flag toggled live to show/hide it, and is typically
//!   silent (never hit).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use regionmap_scene::{Scene, Hit};
//! use regionmap_style::Paint;
//!
//! let mut scene = Scene::new();
//! let root = scene.add_group(None);
//! let region = scene.add_group(Some(root));
//! let square = [
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(10.0, 10.0),
//!     Point::new(0.0, 10.0),
//! ];
//! let shape = scene.add_polygon(region, &square, Paint::default(), Paint::default());
//!
//! let hit = scene.hit_test(root, Point::new(5.0, 5.0));
//! assert_eq!(hit, Some(Hit { element: shape, group: region }));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod types;

use alloc::vec::Vec;
use kurbo::{BezPath, Point, Shape as _, Vec2};
use regionmap_style::{Paint, VisualState};

pub use types::{ElementFlags, ElementId, GroupNode, Hit, PolygonNode, TextDesc, TextNode, TextPaint};

use types::{Kind, Node};

const NO_CHILDREN: &[ElementId] = &[];

struct Slot {
    generation: u32,
    node: Option<Node>,
}

/// Container managing scene elements and hit testing.
///
/// See the [crate docs](crate) for an overview.
#[derive(Default)]
pub struct Scene {
    slots: Vec<Slot>,
    free: Vec<u32>,
    live: usize,
}

impl core::fmt::Debug for Scene {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Scene")
            .field("slots", &self.slots.len())
            .field("free", &self.free.len())
            .field("live", &self.live)
            .finish()
    }
}

impl Scene {
    /// Creates an empty scene.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            live: 0,
        }
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live
    }

    /// Returns `true` if the scene has no live elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Returns `true` if `id` still refers to a live element.
    #[must_use]
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.node(id).is_some()
    }

    /// Adds a group, optionally attached to a parent group.
    ///
    /// If `parent` is stale or not a group, the new group is created
    /// detached (it can still serve as a root).
    pub fn add_group(&mut self, parent: Option<ElementId>) -> ElementId {
        self.insert(parent, Kind::Group(GroupNode::default()))
    }

    /// Adds a closed polygon under `parent` from an ordered point loop.
    ///
    /// The outline is closed implicitly; callers pass each vertex once.
    pub fn add_polygon(
        &mut self,
        parent: ElementId,
        points: &[Point],
        normal: Paint,
        emphasis: Paint,
    ) -> ElementId {
        let mut path = BezPath::new();
        if let Some((first, rest)) = points.split_first() {
            path.move_to(*first);
            for pt in rest {
                path.line_to(*pt);
            }
            path.close_path();
        }
        self.insert(
            Some(parent),
            Kind::Polygon(PolygonNode {
                path,
                normal,
                emphasis,
                flags: ElementFlags::default(),
            }),
        )
    }

    /// Adds a text element under `parent`.
    pub fn add_text(&mut self, parent: ElementId, desc: TextDesc) -> ElementId {
        let mut flags = ElementFlags::default();
        if desc.silent {
            flags.remove(ElementFlags::PICKABLE);
        }
        self.insert(
            Some(parent),
            Kind::Text(TextNode {
                content: desc.content,
                position: desc.position,
                scale: desc.scale,
                ignore: desc.ignore,
                z_bias: desc.z_bias,
                normal: desc.normal,
                emphasis: desc.emphasis,
                flags,
            }),
        )
    }

    /// Returns the parent of `id`, if it is live and attached.
    #[must_use]
    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.node(id).and_then(|n| n.parent)
    }

    /// Returns the children of a group in paint order, or an empty slice
    /// for stale handles and non-groups.
    #[must_use]
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        match self.node(id) {
            Some(Node {
                kind: Kind::Group(group),
                ..
            }) => &group.children,
            _ => NO_CHILDREN,
        }
    }

    /// Removes `id` and its entire subtree. Stale handles are a no-op.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        if let Some(parent) = self.parent(id)
            && let Some(Kind::Group(group)) = self.kind_mut(parent)
        {
            group.children.retain(|c| *c != id);
        }
        self.free_subtree(id);
    }

    /// Removes all children of a group, keeping the group itself.
    pub fn remove_all(&mut self, id: ElementId) {
        let children = match self.kind_mut(id) {
            Some(Kind::Group(group)) => core::mem::take(&mut group.children),
            _ => return,
        };
        for child in children {
            self.free_subtree(child);
        }
    }

    /// Returns a group's payload.
    #[must_use]
    pub fn group(&self, id: ElementId) -> Option<&GroupNode> {
        match self.node(id) {
            Some(Node {
                kind: Kind::Group(group),
                ..
            }) => Some(group),
            _ => None,
        }
    }

    /// Returns a polygon's payload.
    #[must_use]
    pub fn polygon(&self, id: ElementId) -> Option<&PolygonNode> {
        match self.node(id) {
            Some(Node {
                kind: Kind::Polygon(polygon),
                ..
            }) => Some(polygon),
            _ => None,
        }
    }

    /// Returns a text element's payload.
    #[must_use]
    pub fn text(&self, id: ElementId) -> Option<&TextNode> {
        match self.node(id) {
            Some(Node {
                kind: Kind::Text(text),
                ..
            }) => Some(text),
            _ => None,
        }
    }

    /// Sets a group's translation and scale. Returns `false` on stale or
    /// non-group handles.
    pub fn set_group_transform(&mut self, id: ElementId, position: Vec2, scale: Vec2) -> bool {
        match self.kind_mut(id) {
            Some(Kind::Group(group)) => {
                group.position = position;
                group.scale = scale;
                true
            }
            _ => false,
        }
    }

    /// Sets a group's visual state. Descendant polygons resolve their
    /// active paint against it; see [`Scene::polygon_paint`].
    pub fn set_group_state(&mut self, id: ElementId, state: VisualState) -> bool {
        match self.kind_mut(id) {
            Some(Kind::Group(group)) => {
                group.state = state;
                true
            }
            _ => false,
        }
    }

    /// Returns a group's visual state.
    #[must_use]
    pub fn group_state(&self, id: ElementId) -> Option<VisualState> {
        self.group(id).map(|g| g.state)
    }

    /// Returns the paint a polygon currently renders with: its emphasis
    /// paint when the nearest ancestor group is in the emphasis state, its
    /// normal paint otherwise.
    #[must_use]
    pub fn polygon_paint(&self, id: ElementId) -> Option<Paint> {
        let polygon = self.polygon(id)?;
        let mut cursor = self.parent(id);
        while let Some(ancestor) = cursor {
            if let Some(group) = self.group(ancestor) {
                return Some(match group.state {
                    VisualState::Normal => polygon.normal,
                    VisualState::Emphasis => polygon.emphasis,
                });
            }
            cursor = self.parent(ancestor);
        }
        Some(polygon.normal)
    }

    /// Sets a text element's ignore flag. Returns `false` on stale or
    /// non-text handles.
    pub fn set_text_ignore(&mut self, id: ElementId, ignore: bool) -> bool {
        match self.kind_mut(id) {
            Some(Kind::Text(text)) => {
                text.ignore = ignore;
                true
            }
            _ => false,
        }
    }

    /// Sets a text element's per-axis glyph scale.
    pub fn set_text_scale(&mut self, id: ElementId, scale: Vec2) -> bool {
        match self.kind_mut(id) {
            Some(Kind::Text(text)) => {
                text.scale = scale;
                true
            }
            _ => false,
        }
    }

    /// Visits every live text element in the subtree rooted at `root`,
    /// depth-first in paint order.
    pub fn for_each_text(&self, root: ElementId, mut f: impl FnMut(ElementId)) {
        self.walk_texts(root, &mut f);
    }

    fn walk_texts(&self, id: ElementId, f: &mut impl FnMut(ElementId)) {
        match self.node(id) {
            Some(Node {
                kind: Kind::Group(group),
                ..
            }) => {
                for child in &group.children {
                    self.walk_texts(*child, f);
                }
            }
            Some(Node {
                kind: Kind::Text(_),
                ..
            }) => f(id),
            _ => {}
        }
    }

    /// Hit-tests a point (in the space `root` lives in) against the subtree
    /// rooted at `root`, returning the topmost pickable polygon and its
    /// owning group.
    ///
    /// Later siblings are painted on top of earlier ones, so the traversal
    /// prefers them. Text elements never participate, and groups with a
    /// degenerate (zero) scale component are skipped.
    #[must_use]
    pub fn hit_test(&self, root: ElementId, point: Point) -> Option<Hit> {
        let group = self.group(root)?;
        if group.scale.x == 0.0 || group.scale.y == 0.0 {
            return None;
        }
        let local = Point::new(
            (point.x - group.position.x) / group.scale.x,
            (point.y - group.position.y) / group.scale.y,
        );
        for child in group.children.iter().rev() {
            match self.node(*child) {
                Some(Node {
                    kind: Kind::Group(_),
                    ..
                }) => {
                    if let Some(hit) = self.hit_test(*child, local) {
                        return Some(hit);
                    }
                }
                Some(Node {
                    kind: Kind::Polygon(polygon),
                    ..
                }) => {
                    if polygon.flags.contains(ElementFlags::PICKABLE | ElementFlags::VISIBLE)
                        && polygon.path.contains(local)
                    {
                        return Some(Hit {
                            element: *child,
                            group: root,
                        });
                    }
                }
                _ => {}
            }
        }
        None
    }

    fn insert(&mut self, parent: Option<ElementId>, kind: Kind) -> ElementId {
        // Re-validate the parent before linking; a stale parent leaves the
        // new element detached rather than resurrecting a freed slot.
        let parent = parent.filter(|p| matches!(self.kind(*p), Some(Kind::Group(_))));

        let id = if let Some(idx) = self.free.pop() {
            let slot = &mut self.slots[idx as usize];
            slot.generation += 1;
            slot.node = Some(Node { parent, kind });
            ElementId::new(idx, slot.generation)
        } else {
            let idx = u32::try_from(self.slots.len()).expect("scene slot count exceeds u32");
            self.slots.push(Slot {
                generation: 1,
                node: Some(Node { parent, kind }),
            });
            ElementId::new(idx, 1)
        };
        self.live += 1;

        if let Some(parent) = parent
            && let Some(Kind::Group(group)) = self.kind_mut(parent)
        {
            group.children.push(id);
        }
        id
    }

    fn free_subtree(&mut self, id: ElementId) {
        let Some(node) = self.slots.get_mut(id.idx()).and_then(|s| {
            if s.generation == id.1 {
                s.node.take()
            } else {
                None
            }
        }) else {
            return;
        };
        self.live -= 1;
        self.free.push(id.0);
        if let Kind::Group(group) = node.kind {
            for child in group.children {
                self.free_subtree(child);
            }
        }
    }

    fn node(&self, id: ElementId) -> Option<&Node> {
        self.slots
            .get(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.node.as_ref())
    }

    fn kind(&self, id: ElementId) -> Option<&Kind> {
        self.node(id).map(|n| &n.kind)
    }

    fn kind_mut(&mut self, id: ElementId) -> Option<&mut Kind> {
        self.slots
            .get_mut(id.idx())
            .filter(|s| s.generation == id.1)
            .and_then(|s| s.node.as_mut())
            .map(|n| &mut n.kind)
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use kurbo::{Point, Vec2};
    use peniko::Color;
    use regionmap_style::{FontSpec, Paint, VisualState};

    use super::{ElementFlags, Scene, TextDesc, TextPaint};

    fn square(origin: Point, size: f64) -> [Point; 4] {
        [
            origin,
            Point::new(origin.x + size, origin.y),
            Point::new(origin.x + size, origin.y + size),
            Point::new(origin.x, origin.y + size),
        ]
    }

    fn label(content: &str) -> TextDesc {
        let paint = TextPaint {
            color: Color::BLACK,
            font: FontSpec::default(),
        };
        TextDesc {
            content: String::from(content),
            position: Point::ZERO,
            scale: Vec2::new(1.0, 1.0),
            ignore: false,
            silent: true,
            z_bias: 10,
            normal: paint.clone(),
            emphasis: paint,
        }
    }

    #[test]
    fn stale_ids_do_not_alias_reused_slots() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let a = scene.add_group(Some(root));
        scene.remove(a);
        let b = scene.add_group(Some(root));

        assert!(!scene.is_alive(a));
        assert!(scene.is_alive(b));
        assert_ne!(a, b);
        assert_eq!(scene.children(root), &[b]);
    }

    #[test]
    fn remove_all_keeps_the_group_and_frees_the_subtree() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let region = scene.add_group(Some(root));
        let shape = scene.add_polygon(
            region,
            &square(Point::ZERO, 10.0),
            Paint::default(),
            Paint::default(),
        );
        let text = scene.add_text(region, label("a"));

        scene.remove_all(root);

        assert!(scene.is_alive(root));
        assert!(!scene.is_alive(region));
        assert!(!scene.is_alive(shape));
        assert!(!scene.is_alive(text));
        assert!(scene.children(root).is_empty());
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn group_state_drives_polygon_paint() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let region = scene.add_group(Some(root));
        let normal = Paint {
            fill: Color::from_rgba8(1, 1, 1, 255),
            stroke: None,
        };
        let emphasis = Paint {
            fill: Color::from_rgba8(2, 2, 2, 255),
            stroke: None,
        };
        let shape = scene.add_polygon(region, &square(Point::ZERO, 10.0), normal, emphasis);

        assert_eq!(scene.polygon_paint(shape), Some(normal));
        assert!(scene.set_group_state(region, VisualState::Emphasis));
        assert_eq!(scene.polygon_paint(shape), Some(emphasis));
        assert!(scene.set_group_state(region, VisualState::Normal));
        assert_eq!(scene.polygon_paint(shape), Some(normal));
    }

    #[test]
    fn hit_test_maps_through_the_root_transform() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        scene.set_group_transform(root, Vec2::new(100.0, 50.0), Vec2::new(2.0, 2.0));
        let region = scene.add_group(Some(root));
        let shape = scene.add_polygon(
            region,
            &square(Point::ZERO, 10.0),
            Paint::default(),
            Paint::default(),
        );

        // Local (5, 5) maps to screen (110, 60).
        let hit = scene.hit_test(root, Point::new(110.0, 60.0)).unwrap();
        assert_eq!(hit.element, shape);
        assert_eq!(hit.group, region);

        assert!(scene.hit_test(root, Point::new(90.0, 40.0)).is_none());
    }

    #[test]
    fn later_siblings_win_hit_testing() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let below = scene.add_group(Some(root));
        scene.add_polygon(
            below,
            &square(Point::ZERO, 10.0),
            Paint::default(),
            Paint::default(),
        );
        let above = scene.add_group(Some(root));
        scene.add_polygon(
            above,
            &square(Point::new(5.0, 5.0), 10.0),
            Paint::default(),
            Paint::default(),
        );

        // Overlap area: the later region is on top.
        let hit = scene.hit_test(root, Point::new(7.0, 7.0)).unwrap();
        assert_eq!(hit.group, above);
        // Outside the overlap, the earlier region is still reachable.
        let hit = scene.hit_test(root, Point::new(2.0, 2.0)).unwrap();
        assert_eq!(hit.group, below);
    }

    #[test]
    fn silent_text_is_never_hit() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let region = scene.add_group(Some(root));
        let text = scene.add_text(region, label("name"));

        assert!(!scene.text(text).unwrap().flags.contains(ElementFlags::PICKABLE));
        assert!(scene.hit_test(root, Point::ZERO).is_none());
    }

    #[test]
    fn text_ignore_and_scale_are_mutable_in_place() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let region = scene.add_group(Some(root));
        let text = scene.add_text(region, label("name"));

        assert!(scene.set_text_ignore(text, true));
        assert!(scene.text(text).unwrap().ignore);
        assert!(scene.set_text_scale(text, Vec2::new(0.5, 0.25)));
        assert_eq!(scene.text(text).unwrap().scale, Vec2::new(0.5, 0.25));

        // Setters reject stale handles.
        scene.remove(text);
        assert!(!scene.set_text_ignore(text, false));
    }

    #[test]
    fn for_each_text_walks_nested_groups() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let a = scene.add_group(Some(root));
        let b = scene.add_group(Some(root));
        let t1 = scene.add_text(a, label("a"));
        scene.add_polygon(
            b,
            &square(Point::ZERO, 1.0),
            Paint::default(),
            Paint::default(),
        );
        let t2 = scene.add_text(b, label("b"));

        let mut seen = alloc::vec::Vec::new();
        scene.for_each_text(root, |id| seen.push(id));
        assert_eq!(seen, [t1, t2]);
    }
}
