// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regionmap Roam: pan/zoom controller state and roam intents.
//!
//! Roaming is the combined pan + zoom navigation of a rendered map. This
//! crate holds the headless half of that interaction:
//!
//! - [`RoamController`]: gates incoming pan/zoom gestures on an enabled
//!   flag, an interaction rectangle, and a disposed bit. It performs no
//!   transform math of its own; it only decides whether a gesture counts.
//! - [`RoamIntent`] / [`RoamEnvelope`]: the externally-dispatchable form of
//!   an accepted gesture. The map core never mutates pan/zoom state
//!   locally; it emits an envelope and an external coordinator persists
//!   the new offset/zoom and triggers a re-render.
//!
//! Pointer tracking and inertia live upstream; callers feed already
//! recognized gestures (deltas with an origin) into the controller.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Vec2};
//! use regionmap_roam::RoamController;
//!
//! let mut roam = RoamController::new();
//! roam.set_rect(Rect::new(0.0, 0.0, 800.0, 600.0));
//!
//! // Default-off: gestures are ignored until enabled.
//! assert!(roam.pan(Point::new(10.0, 10.0), Vec2::new(3.0, 4.0)).is_none());
//!
//! roam.enable(true);
//! let delta = roam.pan(Point::new(10.0, 10.0), Vec2::new(3.0, 4.0)).unwrap();
//! assert_eq!(delta, Vec2::new(3.0, 4.0));
//!
//! // Origins outside the interaction rect never roam.
//! assert!(roam.zoom(Point::new(900.0, 10.0), 2.0).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::string::String;
use kurbo::{Point, Rect, Vec2};

/// An accepted roam gesture, ready to be applied by an external coordinator.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RoamIntent {
    /// Pan by a delta in view coordinates.
    Pan {
        /// Horizontal delta.
        dx: f64,
        /// Vertical delta.
        dy: f64,
    },
    /// Zoom by a factor around an origin in view coordinates.
    Zoom {
        /// Multiplicative zoom factor (`2.0` doubles the scale).
        zoom: f64,
        /// Anchor point that should stay fixed under the zoom.
        origin: Point,
    },
}

/// A [`RoamIntent`] tagged with the emitting component and model name, the
/// unit an external dispatcher consumes.
#[derive(Clone, Debug, PartialEq)]
pub struct RoamEnvelope {
    /// Component kind of the emitting model (for example `"map"` or `"geo"`).
    pub component: String,
    /// Name of the emitting model instance.
    pub name: String,
    /// The accepted gesture.
    pub intent: RoamIntent,
}

/// Gates pan/zoom gestures for one rendered group.
///
/// The controller persists across draw cycles: each draw refreshes the
/// enabled flag and interaction rectangle, while [`RoamController::dispose`]
/// (called from the owner's teardown) makes it permanently inert.
#[derive(Clone, Debug)]
pub struct RoamController {
    enabled: bool,
    rect: Rect,
    disposed: bool,
}

impl Default for RoamController {
    fn default() -> Self {
        Self::new()
    }
}

impl RoamController {
    /// Creates a disabled controller with an empty interaction rect.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            enabled: false,
            rect: Rect::ZERO,
            disposed: false,
        }
    }

    /// Turns gesture recognition on or off. Off is the default.
    pub fn enable(&mut self, flag: bool) {
        self.enabled = flag;
    }

    /// Returns `true` while gestures are being recognized.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled && !self.disposed
    }

    /// Sets the interaction rectangle. Gestures whose origin falls outside
    /// it are ignored. Refreshed by the owner on every draw.
    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }

    /// Returns the current interaction rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Makes the controller permanently inert. All further gestures yield
    /// `None`; there is no way to re-arm a disposed controller.
    pub fn dispose(&mut self) {
        self.disposed = true;
        self.enabled = false;
    }

    /// Returns `true` once the controller has been disposed.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Feeds a pan gesture. Returns the delta to re-emit, or `None` when
    /// the controller is disabled, disposed, or the origin is outside the
    /// interaction rect.
    #[must_use]
    pub fn pan(&self, origin: Point, delta: Vec2) -> Option<Vec2> {
        if !self.accepts(origin) {
            return None;
        }
        Some(delta)
    }

    /// Feeds a zoom gesture. Returns the factor to re-emit under the same
    /// gating as [`RoamController::pan`]; non-positive factors are rejected.
    #[must_use]
    pub fn zoom(&self, origin: Point, factor: f64) -> Option<f64> {
        if factor <= 0.0 || !self.accepts(origin) {
            return None;
        }
        Some(factor)
    }

    fn accepts(&self, origin: Point) -> bool {
        self.is_enabled() && self.rect.contains(origin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn armed() -> RoamController {
        let mut roam = RoamController::new();
        roam.set_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        roam.enable(true);
        roam
    }

    #[test]
    fn new_controller_is_off() {
        let roam = RoamController::new();
        assert!(!roam.is_enabled());
        assert!(!roam.is_disposed());
        assert!(roam.pan(Point::ZERO, Vec2::new(1.0, 1.0)).is_none());
    }

    #[test]
    fn enabled_controller_passes_gestures_through() {
        let roam = armed();
        assert_eq!(
            roam.pan(Point::new(50.0, 50.0), Vec2::new(3.0, -4.0)),
            Some(Vec2::new(3.0, -4.0))
        );
        assert_eq!(roam.zoom(Point::new(50.0, 50.0), 2.0), Some(2.0));
    }

    #[test]
    fn origin_outside_rect_is_ignored() {
        let roam = armed();
        assert!(roam.pan(Point::new(150.0, 50.0), Vec2::new(1.0, 0.0)).is_none());
        assert!(roam.zoom(Point::new(-1.0, 50.0), 2.0).is_none());
    }

    #[test]
    fn rect_refresh_changes_gating() {
        let mut roam = armed();
        assert!(roam.zoom(Point::new(50.0, 50.0), 2.0).is_some());
        roam.set_rect(Rect::new(200.0, 200.0, 300.0, 300.0));
        assert!(roam.zoom(Point::new(50.0, 50.0), 2.0).is_none());
        assert!(roam.zoom(Point::new(250.0, 250.0), 2.0).is_some());
    }

    #[test]
    fn non_positive_zoom_factors_are_rejected() {
        let roam = armed();
        assert!(roam.zoom(Point::new(50.0, 50.0), 0.0).is_none());
        assert!(roam.zoom(Point::new(50.0, 50.0), -2.0).is_none());
    }

    #[test]
    fn disable_stops_gestures_without_disposing() {
        let mut roam = armed();
        roam.enable(false);
        assert!(roam.pan(Point::new(50.0, 50.0), Vec2::new(1.0, 1.0)).is_none());
        roam.enable(true);
        assert!(roam.pan(Point::new(50.0, 50.0), Vec2::new(1.0, 1.0)).is_some());
    }

    #[test]
    fn dispose_is_permanent() {
        let mut roam = armed();
        roam.dispose();
        assert!(roam.is_disposed());
        assert!(!roam.is_enabled());
        assert!(roam.pan(Point::new(50.0, 50.0), Vec2::new(1.0, 1.0)).is_none());

        // Re-enabling a disposed controller has no effect.
        roam.enable(true);
        assert!(!roam.is_enabled());
        assert!(roam.zoom(Point::new(50.0, 50.0), 2.0).is_none());
    }
}
