//! Hover tooltips for markers.
//!
//! A binding captures the active dimension pair at bind time. The controller
//! replaces the whole binding whenever either dimension changes, so a tooltip
//! never shows a stale pair.

use egui::{Pos2, Vec2};

use crate::data::{Dimension, Record};

// ─────────────────────────────────────────────────────────────────────────────
// Per-dimension value formatting
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitPlacement {
    Prefix,
    Suffix,
}

/// How a dimension's value is decorated in the tooltip. The value itself is
/// printed as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatRule {
    pub symbol: &'static str,
    pub placement: UnitPlacement,
}

impl FormatRule {
    pub const PERCENT: FormatRule = FormatRule {
        symbol: "%",
        placement: UnitPlacement::Suffix,
    };
    pub const DOLLARS: FormatRule = FormatRule {
        symbol: "$",
        placement: UnitPlacement::Prefix,
    };

    pub fn apply(&self, value: f64) -> String {
        match self.placement {
            UnitPlacement::Prefix => format!("{}{}", self.symbol, value),
            UnitPlacement::Suffix => format!("{}{}", value, self.symbol),
        }
    }
}

/// Dimensions with a non-default rule. Everything else is a percentage.
const FORMAT_RULES: &[(Dimension, FormatRule)] = &[(Dimension::Income, FormatRule::DOLLARS)];

pub fn format_rule(dimension: Dimension) -> FormatRule {
    FORMAT_RULES
        .iter()
        .find(|(d, _)| *d == dimension)
        .map(|(_, rule)| *rule)
        .unwrap_or(FormatRule::PERCENT)
}

// ─────────────────────────────────────────────────────────────────────────────
// Template
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TooltipTemplate {
    pub x: Dimension,
    pub y: Dimension,
}

impl TooltipTemplate {
    /// `label`, then one `key: value` line per axis.
    pub fn render(&self, record: &Record) -> String {
        format!(
            "{}\n{}: {}\n{}: {}",
            record.label,
            self.x.key(),
            format_rule(self.x).apply(record.value(self.x)),
            self.y.key(),
            format_rule(self.y).apply(record.value(self.y)),
        )
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Binder
// ─────────────────────────────────────────────────────────────────────────────

/// The tooltip currently on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ShownTooltip {
    pub index: usize,
    pub text: String,
    /// Top-left of the tooltip box, pointer position plus the configured offset.
    pub anchor: Pos2,
}

#[derive(Debug, Clone, Copy)]
struct Binding {
    template: TooltipTemplate,
    marker_count: usize,
}

#[derive(Debug, Clone)]
pub struct TooltipBinder {
    offset: Vec2,
    binding: Option<Binding>,
    generation: u64,
    shown: Option<ShownTooltip>,
}

impl TooltipBinder {
    pub fn new(offset: Vec2) -> Self {
        Self {
            offset,
            binding: None,
            generation: 0,
            shown: None,
        }
    }

    /// Replace the current binding. Any tooltip shown under the old one is hidden.
    pub fn rebind(&mut self, x: Dimension, y: Dimension, marker_count: usize) {
        self.binding = Some(Binding {
            template: TooltipTemplate { x, y },
            marker_count,
        });
        self.generation += 1;
        self.shown = None;
    }

    pub fn template(&self) -> Option<TooltipTemplate> {
        self.binding.map(|b| b.template)
    }

    /// Incremented on every rebind.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Show the tooltip for marker `index`, replacing whatever was shown.
    /// Returns `false` when nothing is bound or the index is out of range.
    pub fn hover_in(&mut self, index: usize, pointer: Pos2, records: &[Record]) -> bool {
        let Some(binding) = self.binding else {
            return false;
        };
        let Some(record) = records.get(index).filter(|_| index < binding.marker_count) else {
            return false;
        };
        let anchor = pointer + self.offset;
        if let Some(shown) = self.shown.as_mut().filter(|s| s.index == index) {
            shown.anchor = anchor;
        } else {
            self.shown = Some(ShownTooltip {
                index,
                text: binding.template.render(record),
                anchor,
            });
        }
        true
    }

    /// Hide the tooltip if it belongs to marker `index`.
    pub fn hover_out(&mut self, index: usize) {
        if self.shown.as_ref().is_some_and(|s| s.index == index) {
            self.shown = None;
        }
    }

    pub fn shown(&self) -> Option<&ShownTooltip> {
        self.shown.as_ref()
    }
}
