// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draw-cycle orchestrator.

use alloc::string::String;
use alloc::vec::Vec;
use kurbo::{Point, Vec2};
use peniko::Color;
use regionmap_roam::{RoamController, RoamEnvelope, RoamIntent};
use regionmap_scene::{ElementId, Scene};
use regionmap_style::{ItemStyle, LabelStyle, StateStyles, VisualState, resolve_states};

use crate::model::{CoordinateView, MapModel, Region, RegionDataset};
use crate::policy::LabelPlan;
use crate::renderer::render_region;

/// Per-region bookkeeping for the current draw cycle.
#[derive(Clone, Debug)]
struct RegionEntry {
    name: String,
    group: ElementId,
    label: Option<(ElementId, LabelPlan)>,
    data_index: Option<usize>,
    selected: bool,
}

/// Stand-in dataset for unbound draws. Uninhabited, so its methods can
/// never be reached.
enum NoData {}

impl RegionDataset for NoData {
    fn index_of_name(&self, _name: &str) -> Option<usize> {
        match *self {}
    }

    fn value(&self, _index: usize) -> f64 {
        match *self {}
    }

    fn item_style(&self, _index: usize, _state: VisualState) -> &ItemStyle {
        match *self {}
    }

    fn label_style(&self, _index: usize, _state: VisualState) -> &LabelStyle {
        match *self {}
    }

    fn visual_color(&self, _index: usize) -> Option<Color> {
        match *self {}
    }

    fn show_label_hint(&self, _index: usize) -> bool {
        match *self {}
    }
}

/// Draws a set of regions into a scene and keeps the rendered group
/// consistent across redraws, clicks, hovers, and roam gestures.
///
/// One `MapDraw` instance exclusively owns one root group in the scene and
/// one [`RoamController`]. All per-cycle graphics are discarded and rebuilt
/// by every draw call; only the controller and the model's selection state
/// persist across cycles.
///
/// Pointer and gesture events are fed in through [`MapDraw::hover`],
/// [`MapDraw::click`], [`MapDraw::pan`], and [`MapDraw::zoom`]. These are
/// dispatch-time entry points rather than stored callbacks, so repeated
/// draws can never stack handlers: one click produces exactly one
/// selection toggle no matter how many draws preceded it.
///
/// After [`MapDraw::remove`] the instance is inert: draw calls are no-ops
/// and gestures yield `None`. Reuse after removal is unsupported.
#[derive(Debug)]
pub struct MapDraw {
    group: ElementId,
    controller: RoamController,
    live_transform: bool,
    entries: Vec<RegionEntry>,
    by_index: Vec<Option<usize>>,
    hovered: Option<usize>,
    removed: bool,
}

impl MapDraw {
    /// Creates a map drawer owning a fresh root group in `scene`.
    ///
    /// When `live_transform` is set, accepted zoom gestures are applied to
    /// the root group immediately (with labels counter-scaled to match)
    /// instead of waiting for the external coordinator to re-render.
    pub fn new(scene: &mut Scene, live_transform: bool) -> Self {
        Self {
            group: scene.add_group(None),
            controller: RoamController::new(),
            live_transform,
            entries: Vec::new(),
            by_index: Vec::new(),
            hovered: None,
            removed: false,
        }
    }

    /// The root group owned by this instance.
    #[must_use]
    pub fn group(&self) -> ElementId {
        self.group
    }

    /// The roam controller owned by this instance.
    #[must_use]
    pub fn controller(&self) -> &RoamController {
        &self.controller
    }

    /// Returns the current group of the named region, if drawn.
    #[must_use]
    pub fn graphic_of(&self, name: &str) -> Option<ElementId> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.group)
    }

    /// Returns the current group registered for a data index, if any.
    #[must_use]
    pub fn graphic_at(&self, index: usize) -> Option<ElementId> {
        let slot = (*self.by_index.get(index)?)?;
        Some(self.entries[slot].group)
    }

    /// Returns the named region's label element, if one was built this cycle.
    #[must_use]
    pub fn label_of(&self, name: &str) -> Option<ElementId> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .and_then(|e| e.label.map(|(id, _)| id))
    }

    /// Runs one draw cycle without a bound dataset.
    ///
    /// Every region shares the model's styles, and every region gets a
    /// label whose visibility is driven purely by per-state `ignore`
    /// toggling.
    pub fn draw<M: MapModel + ?Sized>(
        &mut self,
        scene: &mut Scene,
        model: &M,
        regions: &[Region],
        view: &CoordinateView,
    ) {
        self.draw_cycle::<M, NoData>(scene, model, regions, view, None);
    }

    /// Runs one draw cycle against a bound dataset.
    ///
    /// Regions resolve per-item styles (including the data-driven fill
    /// override) through their data index; regions missing from the
    /// dataset degrade to the shared model styles. After all regions are
    /// built, the model's selection state is reflected onto the fresh
    /// groups.
    pub fn draw_with_data<M, D>(
        &mut self,
        scene: &mut Scene,
        model: &M,
        regions: &[Region],
        view: &CoordinateView,
        data: &D,
    ) where
        M: MapModel + ?Sized,
        D: RegionDataset + ?Sized,
    {
        self.draw_cycle(scene, model, regions, view, Some(data));
    }

    /// Clears the prior children of the root group, copies the coordinate
    /// view's position/scale onto it, renders every region in source order
    /// (later regions paint on top of earlier ones; no sorting), rebuilds
    /// the index-to-group side table, and refreshes the roam controller
    /// from the model and view.
    fn draw_cycle<M, D>(
        &mut self,
        scene: &mut Scene,
        model: &M,
        regions: &[Region],
        view: &CoordinateView,
        data: Option<&D>,
    ) where
        M: MapModel + ?Sized,
        D: RegionDataset + ?Sized,
    {
        if self.removed {
            return;
        }
        scene.remove_all(self.group);
        self.entries.clear();
        self.by_index.clear();
        self.hovered = None;

        scene.set_group_transform(self.group, view.position, view.scale);

        // Without a dataset every region shares one resolved bundle.
        let shared = if data.is_none() {
            Some(shared_styles(model, view.scale))
        } else {
            None
        };

        for region in regions {
            let data_index = data.and_then(|d| d.index_of_name(&region.name));
            let styles = match (data, data_index) {
                (Some(d), Some(idx)) => resolve_states(
                    d.item_style(idx, VisualState::Normal),
                    d.item_style(idx, VisualState::Emphasis),
                    d.label_style(idx, VisualState::Normal),
                    d.label_style(idx, VisualState::Emphasis),
                    d.visual_color(idx),
                    view.scale,
                ),
                _ => shared
                    .clone()
                    .unwrap_or_else(|| shared_styles(model, view.scale)),
            };

            let value_is_nan = match (data, data_index) {
                (Some(d), Some(idx)) => d.value(idx).is_nan(),
                (Some(_), None) => true,
                (None, _) => false,
            };
            let layout_hint =
                matches!((data, data_index), (Some(d), Some(idx)) if d.show_label_hint(idx));
            let plan = LabelPlan::evaluate(
                data.is_some(),
                value_is_nan,
                styles.label_normal.show,
                styles.label_emphasis.show,
                layout_hint,
            );

            let graphic = render_region(scene, self.group, region, &styles, plan, view.scale);

            if let Some(idx) = data_index {
                if self.by_index.len() <= idx {
                    self.by_index.resize(idx + 1, None);
                }
                // Overwrites any prior registration for this index within
                // the cycle; the last rendered region wins.
                self.by_index[idx] = Some(self.entries.len());
            }
            self.entries.push(RegionEntry {
                name: region.name.clone(),
                group: graphic.group,
                label: graphic.label.zip(plan),
                data_index,
                selected: false,
            });
        }

        self.controller.enable(model.roam());
        self.controller.set_rect(view.view_rect);

        if data.is_some() {
            self.reflect_selection(scene, model);
        }
    }

    /// Feeds a pointer position for hover tracking.
    ///
    /// Entering a region puts its group into the emphasis state and applies
    /// the label's emphasis visibility; leaving restores the selected state
    /// (emphasis while selected, normal otherwise).
    pub fn hover(&mut self, scene: &mut Scene, point: Point) {
        if self.removed {
            return;
        }
        let slot = scene
            .hit_test(self.group, point)
            .and_then(|hit| self.slot_of_group(hit.group));
        if slot == self.hovered {
            return;
        }
        if let Some(old) = self.hovered {
            let state = if self.entries[old].selected {
                VisualState::Emphasis
            } else {
                VisualState::Normal
            };
            self.apply_state(scene, old, state);
        }
        if let Some(new) = slot {
            self.apply_state(scene, new, VisualState::Emphasis);
        }
        self.hovered = slot;
    }

    /// Feeds a click. Returns `true` when a selection toggle happened.
    ///
    /// Active only while the model's selected mode is enabled, and only
    /// for regions that resolved a data index during the last draw (so
    /// unbound draws never select). A click that resolves to no region is
    /// silently ignored. After a toggle the selection is re-reflected onto
    /// all regions so multi-region selections stay visually consistent.
    pub fn click<M: MapModel + ?Sized>(
        &mut self,
        scene: &mut Scene,
        point: Point,
        model: &mut M,
    ) -> bool {
        if self.removed || !model.selected_mode() {
            return false;
        }
        let Some(hit) = scene.hit_test(self.group, point) else {
            return false;
        };
        let Some(slot) = self.slot_of_group(hit.group) else {
            return false;
        };
        if self.entries[slot].data_index.is_none() {
            return false;
        }
        let name = self.entries[slot].name.clone();
        model.toggle_selected(&name);
        self.reflect_selection(scene, model);
        true
    }

    /// Feeds a pan gesture, re-emitting it as an intent for the external
    /// coordinator. Panning never mutates local state.
    #[must_use]
    pub fn pan<M: MapModel + ?Sized>(
        &self,
        model: &M,
        origin: Point,
        delta: Vec2,
    ) -> Option<RoamEnvelope> {
        let delta = self.controller.pan(origin, delta)?;
        Some(RoamEnvelope {
            component: String::from(model.component()),
            name: String::from(model.name()),
            intent: RoamIntent::Pan {
                dx: delta.x,
                dy: delta.y,
            },
        })
    }

    /// Feeds a zoom gesture, re-emitting it as an intent for the external
    /// coordinator.
    ///
    /// When this instance owns the live transform, the root group's scale
    /// and position are updated immediately around the gesture origin, and
    /// every descendant label's scale is rewritten to the inverse of the
    /// group's new scale so text stays legible without waiting for the
    /// next full draw.
    pub fn zoom<M: MapModel + ?Sized>(
        &mut self,
        scene: &mut Scene,
        model: &M,
        origin: Point,
        factor: f64,
    ) -> Option<RoamEnvelope> {
        let factor = self.controller.zoom(origin, factor)?;

        if self.live_transform
            && let Some((position, scale)) = scene.group(self.group).map(|g| (g.position, g.scale))
        {
            let scale = Vec2::new(scale.x * factor, scale.y * factor);
            let anchor = origin.to_vec2();
            let position = anchor + (position - anchor) * factor;
            scene.set_group_transform(self.group, position, scale);

            let inverse = Vec2::new(1.0 / scale.x, 1.0 / scale.y);
            let mut labels = Vec::new();
            scene.for_each_text(self.group, |id| labels.push(id));
            for label in labels {
                scene.set_text_scale(label, inverse);
            }
        }

        Some(RoamEnvelope {
            component: String::from(model.component()),
            name: String::from(model.name()),
            intent: RoamIntent::Zoom {
                zoom: factor,
                origin,
            },
        })
    }

    /// Tears the instance down: clears the root group's children and
    /// disposes the roam controller. The instance is inert afterwards and
    /// must not be reused.
    pub fn remove(&mut self, scene: &mut Scene) {
        scene.remove_all(self.group);
        self.controller.dispose();
        self.entries.clear();
        self.by_index.clear();
        self.hovered = None;
        self.removed = true;
    }

    /// Forces every data-bound region into the state mandated by the
    /// model's selection. Idempotent; runs after every selection mutation.
    fn reflect_selection<M: MapModel + ?Sized>(&mut self, scene: &mut Scene, model: &M) {
        for slot in 0..self.entries.len() {
            if self.entries[slot].data_index.is_none() {
                continue;
            }
            let selected = model.is_selected(&self.entries[slot].name);
            self.entries[slot].selected = selected;
            let state = if selected {
                VisualState::Emphasis
            } else {
                VisualState::Normal
            };
            self.apply_state(scene, slot, state);
        }
    }

    fn apply_state(&self, scene: &mut Scene, slot: usize, state: VisualState) {
        let entry = &self.entries[slot];
        scene.set_group_state(entry.group, state);
        if let Some((label, plan)) = entry.label {
            scene.set_text_ignore(label, plan.ignore_for(state));
        }
    }

    fn slot_of_group(&self, group: ElementId) -> Option<usize> {
        self.entries.iter().position(|e| e.group == group)
    }
}

fn shared_styles<M: MapModel + ?Sized>(model: &M, scale: Vec2) -> StateStyles {
    resolve_states(
        model.item_style(VisualState::Normal),
        model.item_style(VisualState::Emphasis),
        model.label_style(VisualState::Normal),
        model.label_style(VisualState::Emphasis),
        None,
        scale,
    )
}
