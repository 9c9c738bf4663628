// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: element identifiers, flags, and node payloads.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{BezPath, Point, Vec2};
use peniko::Color;
use regionmap_style::{FontSpec, Paint, VisualState};

/// Identifier for an element in the scene.
///
/// This is a small, copyable handle that stays stable across updates but
/// becomes invalid when the underlying slot is reused. It consists of a slot
/// index and a generation counter.
///
/// - Inserting allocates a slot with generation `1`.
/// - Removing frees the slot; any `ElementId` that pointed at it is stale
///   from then on.
/// - Reusing a freed slot bumps its generation, so the new element gets a
///   distinct `ElementId`.
///
/// Stale `ElementId`s never alias a different live element because the
/// generation must match. Use [`Scene::is_alive`](crate::Scene::is_alive)
/// to check liveness.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Element flags controlling visibility and picking.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ElementFlags: u8 {
        /// Element is visible (participates in rendering).
        const VISIBLE  = 0b0000_0001;
        /// Element is pickable (participates in hit testing).
        const PICKABLE = 0b0000_0010;
    }
}

impl Default for ElementFlags {
    fn default() -> Self {
        Self::VISIBLE | Self::PICKABLE
    }
}

/// A group element: an ordered container with a translation + scale
/// transform and a visual state that its descendant shapes render with.
#[derive(Clone, Debug)]
pub struct GroupNode {
    /// Child elements in paint order (later children on top).
    pub(crate) children: Vec<ElementId>,
    /// Translation applied to all descendants.
    pub position: Vec2,
    /// Per-axis scale applied to all descendants.
    pub scale: Vec2,
    /// Visual state descendant shapes resolve their paint against.
    pub state: VisualState,
}

impl Default for GroupNode {
    fn default() -> Self {
        Self {
            children: Vec::new(),
            position: Vec2::ZERO,
            scale: Vec2::new(1.0, 1.0),
            state: VisualState::Normal,
        }
    }
}

/// A filled (and optionally stroked) closed shape.
///
/// The polygon carries paint for both visual states; which one is active is
/// decided by the owning group's state, not stored here.
#[derive(Clone, Debug)]
pub struct PolygonNode {
    /// Closed outline in group-local coordinates.
    pub path: BezPath,
    /// Paint in the normal state.
    pub normal: Paint,
    /// Paint in the emphasis state.
    pub emphasis: Paint,
    /// Visibility/picking flags.
    pub flags: ElementFlags,
}

/// Text fill and font for one visual state.
#[derive(Clone, Debug, PartialEq)]
pub struct TextPaint {
    /// Glyph fill color.
    pub color: Color,
    /// Font.
    pub font: FontSpec,
}

/// A text element, positioned at a point and scaled independently of its
/// owning group (used for counter-scaling under zoom).
#[derive(Clone, Debug)]
pub struct TextNode {
    /// Text content.
    pub content: String,
    /// Anchor position in group-local coordinates; glyphs are centered on it.
    pub position: Point,
    /// Per-axis scale applied to the glyphs only.
    pub scale: Vec2,
    /// When set, the text is skipped during rendering. Toggled live; the
    /// element is not reconstructed to show or hide it.
    pub ignore: bool,
    /// Paint bias above sibling shapes.
    pub z_bias: i32,
    /// Fill and font in the normal state.
    pub normal: TextPaint,
    /// Fill and font in the emphasis state.
    pub emphasis: TextPaint,
    /// Visibility/picking flags. Silent text clears `PICKABLE`.
    pub flags: ElementFlags,
}

/// Parameters for [`Scene::add_text`](crate::Scene::add_text).
#[derive(Clone, Debug)]
pub struct TextDesc {
    /// Text content.
    pub content: String,
    /// Anchor position in group-local coordinates.
    pub position: Point,
    /// Initial per-axis glyph scale.
    pub scale: Vec2,
    /// Initial ignore state.
    pub ignore: bool,
    /// When set, the text never intercepts pointer events.
    pub silent: bool,
    /// Paint bias above sibling shapes.
    pub z_bias: i32,
    /// Fill and font in the normal state.
    pub normal: TextPaint,
    /// Fill and font in the emphasis state.
    pub emphasis: TextPaint,
}

/// Result of a point hit test: the shape that was hit and the group that
/// directly owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Hit {
    /// The hit polygon.
    pub element: ElementId,
    /// The polygon's parent group.
    pub group: ElementId,
}

/// Node payload stored per slot.
#[derive(Clone, Debug)]
pub(crate) enum Kind {
    Group(GroupNode),
    Polygon(PolygonNode),
    Text(TextNode),
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) parent: Option<ElementId>,
    pub(crate) kind: Kind,
}
