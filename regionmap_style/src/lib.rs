// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Style: style models and paint resolution for region maps.
//!
//! This crate holds the plain-old-data style vocabulary shared by the rest
//! of the Regionmap workspace:
//!
//! - [`ItemStyle`]: the configured appearance of a region's area (fill,
//!   optional area-color override, optional stroke).
//! - [`Paint`]: the concrete, scale-normalized paint produced from an
//!   [`ItemStyle`] for a given zoom scale.
//! - [`LabelStyle`] / [`FontSpec`]: the configured appearance of a region's
//!   name label per visual state.
//! - [`StateStyles`]: the immutable normal/emphasis bundle resolved once
//!   per region, built by [`resolve_states`].
//!
//! Resolution is a pure function of its inputs. There is no cascading
//! lookup and no shared mutable state: callers resolve a bundle per region
//! and hand it to the renderer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Vec2;
//! use peniko::Color;
//! use regionmap_style::ItemStyle;
//!
//! let style = ItemStyle {
//!     fill: Color::from_rgba8(200, 200, 200, 255),
//!     stroke: Some(Color::BLACK),
//!     stroke_width: Some(4.0),
//!     ..ItemStyle::default()
//! };
//!
//! // At zoom scale [2, 2] the stroke thins to 2 so that the on-screen
//! // line width stays constant.
//! let paint = style.resolve(Vec2::new(2.0, 2.0));
//! assert_eq!(paint.stroke.unwrap().width, 2.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use kurbo::Vec2;
use peniko::Color;

/// The two visual states a rendered region can be in.
///
/// `Normal` is the default appearance; `Emphasis` is applied on hover and
/// while the region is selected.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualState {
    /// Default appearance.
    #[default]
    Normal,
    /// Hovered or selected appearance.
    Emphasis,
}

/// Configured appearance of a region's area.
///
/// All fields are optional overrides except `fill`; absent fields fall back
/// to the style's own defaults during [`ItemStyle::resolve`].
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStyle {
    /// Base area fill color.
    pub fill: Color,
    /// Explicit area color. When set, it takes precedence over `fill`.
    pub area_color: Option<Color>,
    /// Outline color. Falls back to black when a width is set without one.
    pub stroke: Option<Color>,
    /// Outline width in world units, before scale normalization.
    pub stroke_width: Option<f64>,
}

impl Default for ItemStyle {
    fn default() -> Self {
        Self {
            fill: Color::from_rgba8(221, 221, 221, 255),
            area_color: None,
            stroke: None,
            stroke_width: None,
        }
    }
}

impl ItemStyle {
    /// Resolves this style into concrete paint for the given zoom scale.
    ///
    /// - `area_color`, when set, wins over `fill`.
    /// - `stroke_width`, when set, is divided by `scale.x` so that the
    ///   on-screen stroke thickness is invariant to zoom.
    ///
    /// Only the x component of `scale` is used for stroke normalization,
    /// even when the scale is non-uniform; under non-uniform zoom this
    /// yields visually asymmetric stroke thickness. This is a deliberate,
    /// documented asymmetry carried over from the behavior this crate
    /// models, not something `resolve` attempts to correct.
    #[must_use]
    pub fn resolve(&self, scale: Vec2) -> Paint {
        let fill = self.area_color.unwrap_or(self.fill);
        let stroke = self.stroke_width.map(|width| StrokePaint {
            color: self.stroke.unwrap_or(Color::BLACK),
            width: width / scale.x,
        });
        Paint { fill, stroke }
    }
}

/// Concrete stroke paint: color plus scale-normalized width.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StrokePaint {
    /// Outline color.
    pub color: Color,
    /// Outline width after scale normalization.
    pub width: f64,
}

/// Concrete paint for a region's shapes, produced by [`ItemStyle::resolve`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Paint {
    /// Area fill color.
    pub fill: Color,
    /// Optional outline.
    pub stroke: Option<StrokePaint>,
}

impl Default for Paint {
    fn default() -> Self {
        ItemStyle::default().resolve(Vec2::new(1.0, 1.0))
    }
}

/// Font description for a region label.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Font family name.
    pub family: String,
    /// Font size in logical pixels (labels are counter-scaled, so this is
    /// also the on-screen size).
    pub size: f64,
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: String::from("sans-serif"),
            size: 12.0,
        }
    }
}

/// Configured appearance of a region's name label for one visual state.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Whether the label is shown in this state.
    pub show: bool,
    /// Label text color.
    pub color: Color,
    /// Label font.
    pub font: FontSpec,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            show: false,
            color: Color::BLACK,
            font: FontSpec::default(),
        }
    }
}

/// The immutable normal/emphasis style bundle resolved once per region.
///
/// The renderer consumes this as a value; nothing in the bundle refers back
/// to the models it was resolved from.
#[derive(Clone, Debug, PartialEq)]
pub struct StateStyles {
    /// Paint applied in the normal state.
    pub normal: Paint,
    /// Paint applied in the emphasis state.
    pub emphasis: Paint,
    /// Label style for the normal state.
    pub label_normal: LabelStyle,
    /// Label style for the emphasis state.
    pub label_emphasis: LabelStyle,
}

impl StateStyles {
    /// Returns the paint for the given visual state.
    #[must_use]
    pub fn paint(&self, state: VisualState) -> Paint {
        match state {
            VisualState::Normal => self.normal,
            VisualState::Emphasis => self.emphasis,
        }
    }

    /// Returns the label style for the given visual state.
    #[must_use]
    pub fn label(&self, state: VisualState) -> &LabelStyle {
        match state {
            VisualState::Normal => &self.label_normal,
            VisualState::Emphasis => &self.label_emphasis,
        }
    }
}

/// Resolves a full normal/emphasis bundle for one region.
///
/// `fill_override` is the data-driven visual color (for example from a
/// value-to-color mapping); when present it replaces the resolved normal
/// fill, including any `area_color`. The emphasis fill is left untouched.
#[must_use]
pub fn resolve_states(
    item_normal: &ItemStyle,
    item_emphasis: &ItemStyle,
    label_normal: &LabelStyle,
    label_emphasis: &LabelStyle,
    fill_override: Option<Color>,
    scale: Vec2,
) -> StateStyles {
    let mut normal = item_normal.resolve(scale);
    if let Some(color) = fill_override {
        normal.fill = color;
    }
    StateStyles {
        normal,
        emphasis: item_emphasis.resolve(scale),
        label_normal: label_normal.clone(),
        label_emphasis: label_emphasis.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stroke_width_is_normalized_by_x_scale() {
        let style = ItemStyle {
            stroke_width: Some(4.0),
            ..ItemStyle::default()
        };
        let paint = style.resolve(Vec2::new(2.0, 2.0));
        assert_eq!(paint.stroke.unwrap().width, 2.0);
    }

    #[test]
    fn non_uniform_scale_uses_only_x() {
        let style = ItemStyle {
            stroke_width: Some(6.0),
            ..ItemStyle::default()
        };
        // y scale differs; width still divides by x only.
        let paint = style.resolve(Vec2::new(3.0, 12.0));
        assert_eq!(paint.stroke.unwrap().width, 2.0);
    }

    #[test]
    fn area_color_wins_over_fill() {
        let area = Color::from_rgba8(10, 20, 30, 255);
        let style = ItemStyle {
            fill: Color::from_rgba8(1, 2, 3, 255),
            area_color: Some(area),
            ..ItemStyle::default()
        };
        assert_eq!(style.resolve(Vec2::new(1.0, 1.0)).fill, area);
    }

    #[test]
    fn missing_stroke_width_yields_no_stroke() {
        let style = ItemStyle {
            stroke: Some(Color::BLACK),
            ..ItemStyle::default()
        };
        assert!(style.resolve(Vec2::new(1.0, 1.0)).stroke.is_none());
    }

    #[test]
    fn fill_override_replaces_normal_fill_only() {
        let over = Color::from_rgba8(200, 0, 0, 255);
        let normal = ItemStyle {
            area_color: Some(Color::from_rgba8(0, 200, 0, 255)),
            ..ItemStyle::default()
        };
        let emphasis = ItemStyle::default();
        let styles = resolve_states(
            &normal,
            &emphasis,
            &LabelStyle::default(),
            &LabelStyle::default(),
            Some(over),
            Vec2::new(1.0, 1.0),
        );
        assert_eq!(styles.normal.fill, over);
        assert_eq!(styles.emphasis.fill, emphasis.resolve(Vec2::new(1.0, 1.0)).fill);
    }

    #[test]
    fn bundle_lookup_by_state() {
        let styles = resolve_states(
            &ItemStyle::default(),
            &ItemStyle {
                area_color: Some(Color::from_rgba8(9, 9, 9, 255)),
                ..ItemStyle::default()
            },
            &LabelStyle {
                show: true,
                ..LabelStyle::default()
            },
            &LabelStyle::default(),
            None,
            Vec2::new(1.0, 1.0),
        );
        assert_ne!(
            styles.paint(VisualState::Normal).fill,
            styles.paint(VisualState::Emphasis).fill
        );
        assert!(styles.label(VisualState::Normal).show);
        assert!(!styles.label(VisualState::Emphasis).show);
    }
}
