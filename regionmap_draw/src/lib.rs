// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Draw: the interactive region-map drawing core.
//!
//! This crate turns a list of named regions into an interactive group of
//! vector shapes inside a [`regionmap_scene::Scene`], and keeps that group
//! consistent while three things change underneath it:
//!
//! - **Style**: each region resolves an immutable normal/emphasis style
//!   bundle per draw cycle, either from the optional bound dataset
//!   (including data-driven fill overrides) or from the owning model's
//!   shared styles.
//! - **Labels**: a per-region visibility policy decides whether a name
//!   label is built at all; once built, hover and selection toggle its
//!   `ignore` flag live instead of reconstructing it.
//! - **Transforms**: stroke widths and label scales are expressed relative
//!   to the view scale so line thickness and text size stay constant on
//!   screen across zoom levels; accepted zoom gestures counter-scale
//!   labels immediately when the instance owns the live transform.
//!
//! The core consumes its collaborators through capabilities: geometry
//! arrives as resolved [`Region`] values, styling and selection state
//! through [`MapModel`], per-item data through [`RegionDataset`], and the
//! drawing surface is the scene crate. Roam gestures are re-emitted as
//! [`RoamEnvelope`] intents for an external coordinator to persist; the
//! core never updates pan/zoom state on its own (except for the optional
//! live label counter-scaling).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use peniko::Color;
//! use regionmap_draw::{CoordinateView, MapDraw, MapModel, Region};
//! use regionmap_scene::Scene;
//! use regionmap_style::{ItemStyle, LabelStyle, VisualState};
//!
//! struct Geo {
//!     item: ItemStyle,
//!     label: LabelStyle,
//! }
//!
//! impl MapModel for Geo {
//!     fn name(&self) -> &str {
//!         "world"
//!     }
//!     fn component(&self) -> &str {
//!         "geo"
//!     }
//!     fn is_selected(&self, _name: &str) -> bool {
//!         false
//!     }
//!     fn toggle_selected(&mut self, _name: &str) {}
//!     fn item_style(&self, _state: VisualState) -> &ItemStyle {
//!         &self.item
//!     }
//!     fn label_style(&self, _state: VisualState) -> &LabelStyle {
//!         &self.label
//!     }
//! }
//!
//! let model = Geo {
//!     item: ItemStyle::default(),
//!     label: LabelStyle {
//!         show: true,
//!         color: Color::BLACK,
//!         ..LabelStyle::default()
//!     },
//! };
//! let regions = [Region {
//!     name: "alpha".into(),
//!     contours: vec![vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(10.0, 10.0),
//!         Point::new(0.0, 10.0),
//!     ]],
//!     center: Point::new(5.0, 5.0),
//! }];
//! let view = CoordinateView {
//!     position: Vec2::ZERO,
//!     scale: Vec2::new(1.0, 1.0),
//!     view_rect: Rect::new(0.0, 0.0, 800.0, 600.0),
//! };
//!
//! let mut scene = Scene::new();
//! let mut map = MapDraw::new(&mut scene, false);
//! map.draw(&mut scene, &model, &regions, &view);
//!
//! // Unbound draw: the label exists and is visible per the show flag.
//! let label = map.label_of("alpha").unwrap();
//! assert!(!scene.text(label).unwrap().ignore);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod draw;
mod model;
mod policy;
mod renderer;

pub use draw::MapDraw;
pub use model::{CoordinateView, MapModel, Region, RegionDataset};
pub use policy::LabelPlan;
pub use renderer::{RegionGraphic, render_region};

// Re-exported so dispatchers only need this crate to consume intents.
pub use regionmap_roam::{RoamEnvelope, RoamIntent};
