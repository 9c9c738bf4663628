// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capability traits and input values consumed by the draw cycle.
//!
//! The draw core does not own geometry, styling configuration, or selection
//! state; it consumes them through [`MapModel`] and (optionally)
//! [`RegionDataset`]. Regions and the coordinate view are plain values
//! borrowed for the duration of one draw call.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use regionmap_style::{ItemStyle, LabelStyle, VisualState};

/// A named region: one or more closed contours plus a label anchor.
///
/// Owned by the external geometry source and borrowed per draw cycle.
/// Names are unique within one cycle and join against
/// [`RegionDataset::index_of_name`].
#[derive(Clone, Debug)]
pub struct Region {
    /// Region identity, unique within a draw cycle.
    pub name: String,
    /// Ordered contours, each an ordered closed point loop.
    pub contours: Vec<Vec<Point>>,
    /// Anchor for label placement.
    pub center: Point,
}

/// Snapshot of the coordinate system at draw time.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CoordinateView {
    /// Root group translation.
    pub position: Vec2,
    /// Root group per-axis scale.
    pub scale: Vec2,
    /// View rectangle used to scope roam interaction.
    pub view_rect: Rect,
}

/// The owning map (or geo) model: shared styles, roam/selection
/// configuration, and selection state keyed by region name.
pub trait MapModel {
    /// Model instance name, carried on emitted roam envelopes.
    fn name(&self) -> &str;

    /// Component kind (for example `"map"` or `"geo"`), carried on emitted
    /// roam envelopes.
    fn component(&self) -> &str;

    /// Whether pan/zoom interaction is enabled. Off by default.
    fn roam(&self) -> bool {
        false
    }

    /// Whether click-to-select is enabled. Off by default.
    fn selected_mode(&self) -> bool {
        false
    }

    /// Returns whether the named region is currently selected.
    fn is_selected(&self, name: &str) -> bool;

    /// Toggles the named region's selection state.
    fn toggle_selected(&mut self, name: &str);

    /// Shared area style for the given state, used when no dataset is bound.
    fn item_style(&self, state: VisualState) -> &ItemStyle;

    /// Shared label style for the given state, used when no dataset is bound.
    fn label_style(&self, state: VisualState) -> &LabelStyle;
}

/// An optional bound dataset: per-index values, styles, and layout hints.
///
/// Indices join to regions through [`RegionDataset::index_of_name`]. A NaN
/// value means "no value" and is an expected state, not an error.
pub trait RegionDataset {
    /// Resolves a region name to its data index, if present.
    fn index_of_name(&self, name: &str) -> Option<usize>;

    /// The bound numeric value at `index`; NaN when the item has no value.
    fn value(&self, index: usize) -> f64;

    /// Per-item area style for the given state.
    fn item_style(&self, index: usize, state: VisualState) -> &ItemStyle;

    /// Per-item label style for the given state.
    fn label_style(&self, index: usize, state: VisualState) -> &LabelStyle;

    /// Data-driven fill override (for example from a value-to-color
    /// mapping), taking precedence over the item style's fill.
    fn visual_color(&self, index: usize) -> Option<Color>;

    /// Layout hint forcing a label even when the show flags would hide it
    /// (used when the region's name is its only series indicator).
    fn show_label_hint(&self, index: usize) -> bool;
}
