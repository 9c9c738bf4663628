// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label visibility policy.
//!
//! Decides per region whether a name label is constructed at all, and with
//! which show flags. Once constructed, a label is never rebuilt to show or
//! hide it: its `ignore` flag is toggled live as the region moves between
//! the normal and emphasis states.

use regionmap_style::VisualState;

/// The visibility plan for one region's label.
///
/// `None` from [`LabelPlan::evaluate`] means no label element is built for
/// the region this cycle.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LabelPlan {
    /// Whether the label is visible in the normal state.
    pub normal_show: bool,
    /// Whether the label is visible in the emphasis state.
    pub hover_show: bool,
}

impl LabelPlan {
    /// Evaluates whether a label should be constructed.
    ///
    /// A label is built when any of the following holds:
    /// - no dataset is bound at all (visibility is then driven purely by
    ///   toggling `ignore` per state);
    /// - a dataset is bound, the value is NaN, and either show flag is set;
    /// - a dataset is bound, the value is valid, and either show flag is
    ///   set (when only the hover flag is set, the label appears on
    ///   emphasis only);
    /// - the layout hint explicitly requests a label.
    #[must_use]
    pub fn evaluate(
        has_data: bool,
        value_is_nan: bool,
        normal_show: bool,
        hover_show: bool,
        layout_hint: bool,
    ) -> Option<Self> {
        let plan = Self {
            normal_show,
            hover_show,
        };
        if !has_data {
            return Some(plan);
        }
        if value_is_nan && (normal_show || hover_show) {
            return Some(plan);
        }
        if !value_is_nan && (normal_show || hover_show) {
            return Some(plan);
        }
        if layout_hint {
            return Some(plan);
        }
        None
    }

    /// The initial `ignore` value for a freshly built label.
    #[must_use]
    pub fn initial_ignore(&self) -> bool {
        !self.normal_show
    }

    /// The `ignore` value for the given visual state.
    #[must_use]
    pub fn ignore_for(&self, state: VisualState) -> bool {
        match state {
            VisualState::Normal => !self.normal_show,
            VisualState::Emphasis => !self.hover_show,
        }
    }
}
