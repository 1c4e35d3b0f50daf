//! Placement of the clickable axis-group labels, relative to the plot origin.
//!
//! Horizontal labels stack below the x axis, centered on the plot width.
//! Vertical labels are rotated -90° and stack leftwards of the y axis.

use egui::{pos2, vec2, Pos2, Rect, Vec2};

use crate::data::AxisKind;

/// Gap between stacked labels of the same group.
pub const LABEL_SPACING: f32 = 20.0;
/// Distance of the first horizontal label's center below the x axis.
pub const X_LABEL_FIRST: f32 = 32.0;
/// Distance of the first vertical label's center left of the y axis.
pub const Y_LABEL_FIRST: f32 = 35.0;
/// Font size of the label for the active dimension.
pub const ACTIVE_LABEL_SIZE: f32 = 15.0;
/// Font size of the other labels in a group.
pub const INACTIVE_LABEL_SIZE: f32 = 13.0;
/// Offset of the second pass that thickens an emphasized label's strokes.
pub const EMPHASIS_STROKE_OFFSET: f32 = 0.6;

pub fn label_font_size(emphasized: bool) -> f32 {
    if emphasized {
        ACTIVE_LABEL_SIZE
    } else {
        INACTIVE_LABEL_SIZE
    }
}

/// Shift along the reading direction for the thickening pass. Vertical labels
/// read bottom to top.
pub fn emphasis_stroke_offset(axis: AxisKind) -> Vec2 {
    match axis {
        AxisKind::Horizontal => vec2(EMPHASIS_STROKE_OFFSET, 0.0),
        AxisKind::Vertical => vec2(0.0, -EMPHASIS_STROKE_OFFSET),
    }
}

/// Center of the label in `slot` (index into `axis.choices()`).
pub fn axis_label_center(axis: AxisKind, slot: usize, plot_size: Vec2) -> Pos2 {
    let step = LABEL_SPACING * slot as f32;
    match axis {
        AxisKind::Horizontal => pos2(plot_size.x / 2.0, plot_size.y + X_LABEL_FIRST + step),
        AxisKind::Vertical => pos2(-(Y_LABEL_FIRST + step), plot_size.y / 2.0),
    }
}

/// Clickable area of a label whose unrotated text measures `text_size`.
pub fn axis_label_rect(axis: AxisKind, center: Pos2, text_size: Vec2) -> Rect {
    match axis {
        AxisKind::Horizontal => Rect::from_center_size(center, text_size),
        AxisKind::Vertical => Rect::from_center_size(center, vec2(text_size.y, text_size.x)),
    }
}

/// Where a rotated galley must start so that it ends up centered on `center`.
/// `TextShape` rotates around its top-left position.
pub fn rotated_text_origin(center: Pos2, text_size: Vec2) -> Pos2 {
    pos2(center.x - text_size.y / 2.0, center.y + text_size.x / 2.0)
}
