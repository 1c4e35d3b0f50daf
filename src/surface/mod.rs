//! Persistent visual elements of the chart and their transitions.
//!
//! [`RenderSurface`] keeps one marker and one label per record, keyed by
//! dataset index, plus a tick group per axis and the per-axis label emphasis.
//! It holds no egui state: the app reads positions at paint time through
//! [`RenderSurface::marker_center`] and friends. All coordinates are pixels
//! relative to the top-left corner of the inner plot area.

pub mod axis;
pub mod tween;

use egui::{pos2, Pos2};

use crate::config::ChartConfig;
use crate::data::{AxisKind, AxisPair, Dimension, Record};
use crate::scale::ScaleMapping;

pub use axis::{AxisTicks, Tick, TickView};
pub use tween::Tween;

// ─────────────────────────────────────────────────────────────────────────────
// ChartSurface – what the controller drives
// ─────────────────────────────────────────────────────────────────────────────

/// Operations the selection controller performs on the rendering side.
///
/// Updates are fire-and-forget: calling one while a previous transition is in
/// flight retargets from the currently displayed state.
pub trait ChartSurface {
    /// Create all markers, labels and ticks at their initial positions.
    fn initialize(&mut self, records: &[Record], x: &ScaleMapping, y: &ScaleMapping, now: f64);
    /// Move markers and labels horizontally to `x`. Vertical positions are untouched.
    fn update_horizontal(&mut self, records: &[Record], x: &ScaleMapping, now: f64);
    /// Move markers and labels vertically to `y`. Horizontal positions are untouched.
    fn update_vertical(&mut self, records: &[Record], y: &ScaleMapping, now: f64);
    /// Regenerate the ticks of `mapping.axis`.
    fn update_axis_ticks(&mut self, mapping: &ScaleMapping, now: f64);
    /// Emphasize `dimension`'s label among the labels of `axis`.
    fn set_emphasis(&mut self, axis: AxisKind, dimension: Dimension);
}

// ─────────────────────────────────────────────────────────────────────────────
// Elements
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct Marker {
    /// Index of the record this marker was created for.
    pub record: usize,
    pub cx: Tween,
    pub cy: Tween,
}

#[derive(Debug, Clone)]
pub struct PointLabel {
    pub record: usize,
    pub text: String,
    pub x: Tween,
    pub y: Tween,
}

// ─────────────────────────────────────────────────────────────────────────────
// RenderSurface
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct RenderSurface {
    /// Transition length in seconds.
    pub duration: f64,
    pub marker_radius: f32,
    /// Labels sit at `y(value - label_value_offset)`, offset in data units.
    pub label_value_offset: f64,
    markers: Vec<Marker>,
    labels: Vec<PointLabel>,
    ticks: AxisPair<AxisTicks>,
    /// Last dimension passed to `set_emphasis` per axis. Empty until the controller sets it.
    emphasis: AxisPair<Option<Dimension>>,
}

impl RenderSurface {
    pub fn new(config: &ChartConfig) -> Self {
        Self {
            duration: config.transition_ms as f64 / 1000.0,
            marker_radius: config.marker_radius,
            label_value_offset: config.label_value_offset,
            markers: Vec::new(),
            labels: Vec::new(),
            ticks: AxisPair::new(
                AxisTicks::new(AxisKind::Horizontal, config.tick_count),
                AxisTicks::new(AxisKind::Vertical, config.tick_count),
            ),
            emphasis: AxisPair::new(None, None),
        }
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn labels(&self) -> &[PointLabel] {
        &self.labels
    }

    pub fn ticks(&self, axis: AxisKind) -> &AxisTicks {
        self.ticks.get(axis)
    }

    pub fn emphasis(&self, axis: AxisKind) -> Option<Dimension> {
        *self.emphasis.get(axis)
    }

    pub fn is_emphasized(&self, axis: AxisKind, dimension: Dimension) -> bool {
        self.emphasis(axis) == Some(dimension)
    }

    pub fn marker_center(&self, index: usize, now: f64) -> Option<Pos2> {
        self.markers
            .get(index)
            .map(|m| pos2(m.cx.value_at(now), m.cy.value_at(now)))
    }

    pub fn label_anchor(&self, index: usize, now: f64) -> Option<Pos2> {
        self.labels
            .get(index)
            .map(|l| pos2(l.x.value_at(now), l.y.value_at(now)))
    }

    /// Topmost marker under `pos`. Later markers are drawn over earlier ones.
    pub fn hit_test(&self, pos: Pos2, now: f64) -> Option<usize> {
        (0..self.markers.len())
            .rev()
            .find(|&i| {
                self.marker_center(i, now)
                    .is_some_and(|c| c.distance(pos) <= self.marker_radius)
            })
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.markers
            .iter()
            .any(|m| m.cx.is_running(now) || m.cy.is_running(now))
            || self
                .labels
                .iter()
                .any(|l| l.x.is_running(now) || l.y.is_running(now))
            || AxisKind::BOTH
                .iter()
                .any(|a| self.ticks.get(*a).is_animating(now))
    }

    fn label_y(&self, y: &ScaleMapping, record: &Record) -> f32 {
        y.map(record.value(y.dimension) - self.label_value_offset) as f32
    }
}

impl ChartSurface for RenderSurface {
    fn initialize(&mut self, records: &[Record], x: &ScaleMapping, y: &ScaleMapping, _now: f64) {
        self.markers = records
            .iter()
            .enumerate()
            .map(|(i, r)| Marker {
                record: i,
                cx: Tween::fixed(x.map(r.value(x.dimension)) as f32),
                cy: Tween::fixed(y.map(r.value(y.dimension)) as f32),
            })
            .collect();
        self.labels = records
            .iter()
            .enumerate()
            .map(|(i, r)| PointLabel {
                record: i,
                text: r.code.clone(),
                x: Tween::fixed(x.map(r.value(x.dimension)) as f32),
                y: Tween::fixed(self.label_y(y, r)),
            })
            .collect();
        self.ticks.x.place(x.scale);
        self.ticks.y.place(y.scale);
    }

    fn update_horizontal(&mut self, records: &[Record], x: &ScaleMapping, now: f64) {
        let duration = self.duration;
        for (marker, label) in self.markers.iter_mut().zip(self.labels.iter_mut()) {
            let Some(record) = records.get(marker.record) else {
                continue;
            };
            let px = x.map(record.value(x.dimension)) as f32;
            marker.cx.retarget(px, now, duration);
            label.x.retarget(px, now, duration);
        }
    }

    fn update_vertical(&mut self, records: &[Record], y: &ScaleMapping, now: f64) {
        let duration = self.duration;
        for i in 0..self.markers.len() {
            let Some(record) = records.get(self.markers[i].record) else {
                continue;
            };
            let py = y.map(record.value(y.dimension)) as f32;
            let label_py = self.label_y(y, record);
            self.markers[i].cy.retarget(py, now, duration);
            self.labels[i].y.retarget(label_py, now, duration);
        }
    }

    fn update_axis_ticks(&mut self, mapping: &ScaleMapping, now: f64) {
        let duration = self.duration;
        self.ticks.get_mut(mapping.axis).transition(mapping.scale, now, duration);
    }

    fn set_emphasis(&mut self, axis: AxisKind, dimension: Dimension) {
        *self.emphasis.get_mut(axis) = Some(dimension);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::ScaleBuilder;

    fn fixture() -> (Vec<Record>, ScaleBuilder) {
        let records = vec![
            Record::new("Alabama", "AL")
                .with(Dimension::Poverty, 10.0)
                .with(Dimension::Age, 40.0)
                .with(Dimension::Healthcare, 5.0),
            Record::new("Alaska", "AK")
                .with(Dimension::Poverty, 20.0)
                .with(Dimension::Age, 30.0)
                .with(Dimension::Healthcare, 10.0),
            Record::new("Arizona", "AZ")
                .with(Dimension::Poverty, 30.0)
                .with(Dimension::Age, 35.0)
                .with(Dimension::Healthcare, 15.0),
        ];
        (records, ScaleBuilder::new(740.0, 370.0))
    }

    fn initialized() -> (RenderSurface, Vec<Record>, ScaleBuilder) {
        let (records, b) = fixture();
        let x = b.build(&records, Dimension::Poverty, AxisKind::Horizontal).unwrap();
        let y = b.build(&records, Dimension::Healthcare, AxisKind::Vertical).unwrap();
        let mut s = RenderSurface::new(&ChartConfig::default());
        s.initialize(&records, &x, &y, 0.0);
        (s, records, b)
    }

    #[test]
    fn initialize_creates_one_marker_and_label_per_record() {
        let (s, records, _) = initialized();
        assert_eq!(s.markers().len(), records.len());
        assert_eq!(s.labels().len(), records.len());
        for (i, (m, l)) in s.markers().iter().zip(s.labels()).enumerate() {
            assert_eq!(m.record, i);
            assert_eq!(l.record, i);
            assert_eq!(l.text, records[i].code);
        }
        // Poverty 10 sits at 0.9*10=9 .. 30 over 740px.
        let c = s.marker_center(0, 0.0).unwrap();
        assert!((c.x - 740.0 / 21.0).abs() < 1e-3);
        assert!(!s.is_animating(0.0));
    }

    #[test]
    fn horizontal_update_animates_x_only() {
        let (mut s, records, b) = initialized();
        let before: Vec<f32> = (0..3).map(|i| s.marker_center(i, 0.0).unwrap().y).collect();
        let x = b.build(&records, Dimension::Age, AxisKind::Horizontal).unwrap();
        s.update_horizontal(&records, &x, 1.0);

        assert!(s.is_animating(1.5));
        assert!(!s.is_animating(2.0));
        for i in 0..3 {
            let c = s.marker_center(i, 2.0).unwrap();
            let expected = x.map(records[i].age) as f32;
            assert!((c.x - expected).abs() < 1e-3);
            assert_eq!(c.y, before[i]);
            assert_eq!(s.label_anchor(i, 2.0).unwrap().x, c.x);
        }
    }

    #[test]
    fn vertical_update_keeps_label_offset() {
        let (mut s, records, b) = initialized();
        let y = b.build(&records, Dimension::Healthcare, AxisKind::Vertical).unwrap();
        s.update_vertical(&records, &y, 0.0);
        for i in 0..3 {
            let m = s.marker_center(i, 5.0).unwrap();
            let l = s.label_anchor(i, 5.0).unwrap();
            let expected = y.map(records[i].healthcare - 0.3) as f32;
            assert!((l.y - expected).abs() < 1e-3);
            // Lower value means larger pixel on the inverted axis.
            assert!(l.y > m.y);
        }
    }

    #[test]
    fn hit_test_prefers_topmost_marker() {
        let (s, _, _) = initialized();
        let c0 = s.marker_center(0, 0.0).unwrap();
        assert_eq!(s.hit_test(c0, 0.0), Some(0));
        assert_eq!(s.hit_test(pos2(-500.0, -500.0), 0.0), None);
    }

    #[test]
    fn emphasis_is_only_what_set_emphasis_wrote() {
        let (mut s, _, _) = initialized();
        for axis in AxisKind::BOTH {
            assert_eq!(s.emphasis(axis), None);
            assert!(axis.choices().iter().all(|d| !s.is_emphasized(axis, *d)));
        }

        s.set_emphasis(AxisKind::Horizontal, Dimension::Age);
        s.set_emphasis(AxisKind::Horizontal, Dimension::Income);
        let n = AxisKind::Horizontal
            .choices()
            .iter()
            .filter(|d| s.is_emphasized(AxisKind::Horizontal, **d))
            .count();
        assert_eq!(n, 1);
        assert!(s.is_emphasized(AxisKind::Horizontal, Dimension::Income));
        assert_eq!(s.emphasis(AxisKind::Vertical), None);
    }
}
