// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-region rendering: builds one group per region with its contour
//! polygons and, when the label plan calls for one, a counter-scaled name
//! label.

use kurbo::Vec2;
use regionmap_scene::{ElementId, Scene, TextDesc, TextPaint};
use regionmap_style::{LabelStyle, StateStyles};

use crate::model::Region;
use crate::policy::LabelPlan;

/// Paint bias applied to labels so they render above sibling shapes.
const LABEL_Z_BIAS: i32 = 10;

/// One region's graphical representation for the current draw cycle.
#[derive(Copy, Clone, Debug)]
pub struct RegionGraphic {
    /// The region's group, owning its shapes and label.
    pub group: ElementId,
    /// The region's label element, when one was built.
    pub label: Option<ElementId>,
}

/// Builds the graphical representation of a single region under `parent`.
///
/// Every contour becomes one polygon carrying the resolved normal and
/// emphasis paints; all contours of a region share the same paints. When
/// `plan` is present, exactly one text element is created at the region's
/// center:
///
/// - counter-scaled by `[1/scale.x, 1/scale.y]` so glyphs keep a constant
///   on-screen size regardless of zoom;
/// - silent, so it never intercepts pointer events meant for the shapes
///   underneath;
/// - starting with `ignore = !normal_show` per the plan.
pub fn render_region(
    scene: &mut Scene,
    parent: ElementId,
    region: &Region,
    styles: &StateStyles,
    plan: Option<LabelPlan>,
    scale: Vec2,
) -> RegionGraphic {
    let group = scene.add_group(Some(parent));

    for contour in &region.contours {
        scene.add_polygon(group, contour, styles.normal, styles.emphasis);
    }

    let label = plan.map(|plan| {
        scene.add_text(
            group,
            TextDesc {
                content: region.name.clone(),
                position: region.center,
                scale: Vec2::new(1.0 / scale.x, 1.0 / scale.y),
                ignore: plan.initial_ignore(),
                silent: true,
                z_bias: LABEL_Z_BIAS,
                normal: text_paint(&styles.label_normal),
                emphasis: text_paint(&styles.label_emphasis),
            },
        )
    });

    RegionGraphic { group, label }
}

fn text_paint(style: &LabelStyle) -> TextPaint {
    TextPaint {
        color: style.color,
        font: style.font.clone(),
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;
    use alloc::vec;
    use kurbo::{Point, Vec2};
    use regionmap_scene::Scene;
    use regionmap_style::{ItemStyle, LabelStyle, resolve_states};

    use super::*;

    fn region() -> Region {
        Region {
            name: String::from("alpha"),
            contours: vec![
                vec![
                    Point::new(0.0, 0.0),
                    Point::new(10.0, 0.0),
                    Point::new(10.0, 10.0),
                    Point::new(0.0, 10.0),
                ],
                vec![
                    Point::new(20.0, 0.0),
                    Point::new(30.0, 0.0),
                    Point::new(25.0, 10.0),
                ],
            ],
            center: Point::new(5.0, 5.0),
        }
    }

    fn styles() -> StateStyles {
        resolve_states(
            &ItemStyle::default(),
            &ItemStyle::default(),
            &LabelStyle {
                show: true,
                ..LabelStyle::default()
            },
            &LabelStyle::default(),
            None,
            Vec2::new(2.0, 4.0),
        )
    }

    #[test]
    fn one_polygon_per_contour() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let graphic = render_region(&mut scene, root, &region(), &styles(), None, Vec2::new(1.0, 1.0));

        let shapes: alloc::vec::Vec<_> = scene
            .children(graphic.group)
            .iter()
            .filter(|id| scene.polygon(**id).is_some())
            .collect();
        assert_eq!(shapes.len(), 2);
        assert!(graphic.label.is_none());
    }

    #[test]
    fn label_is_counter_scaled_and_silent() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let plan = LabelPlan {
            normal_show: true,
            hover_show: false,
        };
        let graphic = render_region(
            &mut scene,
            root,
            &region(),
            &styles(),
            Some(plan),
            Vec2::new(2.0, 4.0),
        );

        let text = scene.text(graphic.label.unwrap()).unwrap();
        assert_eq!(text.scale, Vec2::new(0.5, 0.25));
        assert_eq!(text.position, Point::new(5.0, 5.0));
        assert_eq!(text.content, "alpha");
        assert!(!text.ignore);
        // Silent: clicking through the label must reach the shape.
        assert!(scene.hit_test(root, Point::new(5.0, 5.0)).is_some());
    }

    #[test]
    fn hover_only_label_starts_ignored() {
        let mut scene = Scene::new();
        let root = scene.add_group(None);
        let plan = LabelPlan {
            normal_show: false,
            hover_show: true,
        };
        let graphic = render_region(
            &mut scene,
            root,
            &region(),
            &styles(),
            Some(plan),
            Vec2::new(1.0, 1.0),
        );
        assert!(scene.text(graphic.label.unwrap()).unwrap().ignore);
    }
}
