//! Input events consumed by the chart.
//!
//! The app translates raw egui input into [`ChartEvent`]s and hands them to
//! [`AxisSelectionController::handle`](crate::controller::AxisSelectionController::handle).
//! Label clicks carry the label's string key, exactly as a misconfigured label
//! could carry it, so key validation happens at this boundary.

use egui::Pos2;

use crate::data::AxisKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// A label in `axis`'s group was clicked.
    LabelClicked { axis: AxisKind, key: String },
    /// The pointer moved onto (or within) marker `index`.
    PointerEntered { index: usize, pointer: Pos2 },
    /// The pointer left marker `index`.
    PointerLeft { index: usize },
}

impl ChartEvent {
    pub fn label_clicked(axis: AxisKind, key: impl Into<String>) -> Self {
        ChartEvent::LabelClicked {
            axis,
            key: key.into(),
        }
    }
}

/// Result of a label click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The axis switched to a new dimension and the pipeline ran.
    Changed,
    /// The dimension was already active; nothing ran.
    Unchanged,
    /// The dimension belongs to the other axis's group; nothing ran.
    Ignored,
}
