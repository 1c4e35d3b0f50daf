//! Axis selection state machine.
//!
//! The controller owns the dataset and the per-axis state (active dimension and
//! its scale). A label click either does nothing (already active, or a label of
//! the other group) or runs the pipeline for that axis only:
//! scale → markers/labels → ticks → tooltip rebind → emphasis.

use egui::vec2;

use crate::config::ChartConfig;
use crate::data::{AxisKind, AxisPair, Dataset, Dimension, Record};
use crate::error::Result;
use crate::events::{ChartEvent, Selection};
use crate::scale::{ScaleBuilder, ScaleMapping};
use crate::surface::{ChartSurface, RenderSurface};
use crate::tooltip::TooltipBinder;

pub struct AxisSelectionController<S: ChartSurface = RenderSurface> {
    dataset: Dataset,
    builder: ScaleBuilder,
    active: AxisPair<Dimension>,
    scales: AxisPair<ScaleMapping>,
    /// Bumped each time an axis gets a freshly built scale.
    revisions: AxisPair<u64>,
    surface: S,
    tooltips: TooltipBinder,
}

impl AxisSelectionController<RenderSurface> {
    pub fn new(dataset: Dataset, config: &ChartConfig, now: f64) -> Result<Self> {
        let surface = RenderSurface::new(config);
        Self::with_surface(dataset, config, surface, now)
    }
}

impl<S: ChartSurface> AxisSelectionController<S> {
    /// Build initial scales for the configured default dimensions, lay out the
    /// surface, bind tooltips and set the initial emphasis.
    pub fn with_surface(dataset: Dataset, config: &ChartConfig, mut surface: S, now: f64) -> Result<Self> {
        config.validate()?;
        let builder = config.scale_builder();
        let active = AxisPair::new(config.default_x, config.default_y);
        let records = dataset.records();
        let x = builder.build(records, active.x, AxisKind::Horizontal)?;
        let y = builder.build(records, active.y, AxisKind::Vertical)?;

        surface.initialize(records, &x, &y, now);
        let mut tooltips = TooltipBinder::new(vec2(config.tooltip_offset[0], config.tooltip_offset[1]));
        tooltips.rebind(active.x, active.y, records.len());
        for axis in AxisKind::BOTH {
            surface.set_emphasis(axis, *active.get(axis));
        }
        tracing::debug!(
            "Chart initialized with {} records, x={}, y={}",
            records.len(),
            active.x,
            active.y
        );

        Ok(Self {
            dataset,
            builder,
            active,
            scales: AxisPair::new(x, y),
            revisions: AxisPair::new(1, 1),
            surface,
            tooltips,
        })
    }

    /// Make `dimension` the active dimension of `axis`.
    pub fn select(&mut self, axis: AxisKind, dimension: Dimension, now: f64) -> Result<Selection> {
        if dimension.axis() != axis {
            return Ok(Selection::Ignored);
        }
        if *self.active.get(axis) == dimension {
            return Ok(Selection::Unchanged);
        }

        let records = self.dataset.records();
        let mapping = self.builder.build(records, dimension, axis)?;
        *self.active.get_mut(axis) = dimension;
        *self.scales.get_mut(axis) = mapping;
        *self.revisions.get_mut(axis) += 1;

        match axis {
            AxisKind::Horizontal => self.surface.update_horizontal(records, &mapping, now),
            AxisKind::Vertical => self.surface.update_vertical(records, &mapping, now),
        }
        self.surface.update_axis_ticks(&mapping, now);
        self.tooltips.rebind(self.active.x, self.active.y, records.len());
        self.surface.set_emphasis(axis, dimension);

        tracing::debug!(
            "{} axis switched to '{}', domain {:?}",
            axis,
            dimension,
            mapping.domain()
        );
        Ok(Selection::Changed)
    }

    /// Like [`select`](Self::select) but takes the label's string key.
    /// Unknown keys fail with `InvalidInput` before any data is touched.
    pub fn select_key(&mut self, axis: AxisKind, key: &str, now: f64) -> Result<Selection> {
        let dimension: Dimension = key.parse()?;
        self.select(axis, dimension, now)
    }

    /// Dispatch one input event. Returns the selection outcome for label clicks.
    pub fn handle(&mut self, event: ChartEvent, now: f64) -> Result<Option<Selection>> {
        match event {
            ChartEvent::LabelClicked { axis, key } => self.select_key(axis, &key, now).map(Some),
            ChartEvent::PointerEntered { index, pointer } => {
                self.tooltips.hover_in(index, pointer, self.dataset.records());
                Ok(None)
            }
            ChartEvent::PointerLeft { index } => {
                self.tooltips.hover_out(index);
                Ok(None)
            }
        }
    }

    pub fn active(&self, axis: AxisKind) -> Dimension {
        *self.active.get(axis)
    }

    pub fn scale(&self, axis: AxisKind) -> &ScaleMapping {
        self.scales.get(axis)
    }

    pub fn scale_revision(&self, axis: AxisKind) -> u64 {
        *self.revisions.get(axis)
    }

    pub fn records(&self) -> &[Record] {
        self.dataset.records()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn tooltips(&self) -> &TooltipBinder {
        &self.tooltips
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AxisplotError;
    use egui::pos2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Initialize,
        Horizontal(Dimension),
        Vertical(Dimension),
        Ticks(AxisKind),
        Emphasis(AxisKind, Dimension),
    }

    #[derive(Default)]
    struct Recording {
        calls: Vec<Call>,
    }

    impl ChartSurface for Recording {
        fn initialize(&mut self, _: &[Record], _: &ScaleMapping, _: &ScaleMapping, _: f64) {
            self.calls.push(Call::Initialize);
        }
        fn update_horizontal(&mut self, _: &[Record], x: &ScaleMapping, _: f64) {
            self.calls.push(Call::Horizontal(x.dimension));
        }
        fn update_vertical(&mut self, _: &[Record], y: &ScaleMapping, _: f64) {
            self.calls.push(Call::Vertical(y.dimension));
        }
        fn update_axis_ticks(&mut self, m: &ScaleMapping, _: f64) {
            self.calls.push(Call::Ticks(m.axis));
        }
        fn set_emphasis(&mut self, axis: AxisKind, d: Dimension) {
            self.calls.push(Call::Emphasis(axis, d));
        }
    }

    fn dataset() -> Dataset {
        let rows = [
            ("Alabama", "AL", 10.0, 35.0, 40000.0, 14.0, 30.0, 20.0),
            ("Alaska", "AK", 20.0, 33.0, 70000.0, 15.0, 28.0, 18.0),
            ("Arizona", "AZ", 30.0, 37.0, 50000.0, 12.0, 26.0, 16.0),
        ];
        let records = rows
            .iter()
            .map(|(l, c, p, a, i, h, o, s)| {
                Record::new(*l, *c)
                    .with(Dimension::Poverty, *p)
                    .with(Dimension::Age, *a)
                    .with(Dimension::Income, *i)
                    .with(Dimension::Healthcare, *h)
                    .with(Dimension::Obesity, *o)
                    .with(Dimension::Smokes, *s)
            })
            .collect();
        Dataset::new(records).unwrap()
    }

    fn recording() -> AxisSelectionController<Recording> {
        AxisSelectionController::with_surface(dataset(), &ChartConfig::default(), Recording::default(), 0.0)
            .unwrap()
    }

    #[test]
    fn startup_initializes_then_emphasizes_defaults() {
        let c = recording();
        assert_eq!(
            c.surface().calls,
            vec![
                Call::Initialize,
                Call::Emphasis(AxisKind::Horizontal, Dimension::Poverty),
                Call::Emphasis(AxisKind::Vertical, Dimension::Healthcare),
            ]
        );
        assert_eq!(c.scale(AxisKind::Horizontal).domain(), [9.0, 30.0]);
        assert_eq!(c.tooltips().template().unwrap().x, Dimension::Poverty);
    }

    #[test]
    fn transition_runs_pipeline_in_order_for_one_axis() {
        let mut c = recording();
        let y_before = *c.scale(AxisKind::Vertical);
        let y_rev = c.scale_revision(AxisKind::Vertical);
        let gen = c.tooltips().generation();

        let out = c.select(AxisKind::Horizontal, Dimension::Income, 1.0).unwrap();
        assert_eq!(out, Selection::Changed);
        assert_eq!(
            c.surface().calls[3..],
            [
                Call::Horizontal(Dimension::Income),
                Call::Ticks(AxisKind::Horizontal),
                Call::Emphasis(AxisKind::Horizontal, Dimension::Income),
            ]
        );
        assert_eq!(c.scale(AxisKind::Horizontal).domain(), [36000.0, 70000.0]);
        assert_eq!(*c.scale(AxisKind::Vertical), y_before);
        assert_eq!(c.scale_revision(AxisKind::Vertical), y_rev);
        assert_eq!(c.tooltips().generation(), gen + 1);
        let t = c.tooltips().template().unwrap();
        assert_eq!((t.x, t.y), (Dimension::Income, Dimension::Healthcare));
    }

    #[test]
    fn repeated_selection_is_a_no_op() {
        let mut c = recording();
        c.select(AxisKind::Vertical, Dimension::Smokes, 0.0).unwrap();
        let calls = c.surface().calls.len();
        let rev = c.scale_revision(AxisKind::Vertical);
        let gen = c.tooltips().generation();
        for i in 0..5 {
            let out = c.select(AxisKind::Vertical, Dimension::Smokes, i as f64).unwrap();
            assert_eq!(out, Selection::Unchanged);
        }
        assert_eq!(c.surface().calls.len(), calls);
        assert_eq!(c.scale_revision(AxisKind::Vertical), rev);
        assert_eq!(c.tooltips().generation(), gen);
        assert_eq!(c.active(AxisKind::Vertical), Dimension::Smokes);
    }

    #[test]
    fn clicking_active_default_vertical_label_changes_nothing() {
        let mut c = recording();
        let before = c.surface().calls.clone();
        let rev = c.scale_revision(AxisKind::Vertical);
        let out = c
            .handle(ChartEvent::label_clicked(AxisKind::Vertical, "healthcare"), 0.5)
            .unwrap();
        assert_eq!(out, Some(Selection::Unchanged));
        assert_eq!(c.surface().calls, before);
        assert_eq!(c.scale_revision(AxisKind::Vertical), rev);
        assert_eq!(c.active(AxisKind::Vertical), Dimension::Healthcare);
    }

    #[test]
    fn label_of_other_group_is_ignored() {
        let mut c = recording();
        let before = c.surface().calls.len();
        let out = c.select(AxisKind::Horizontal, Dimension::Obesity, 0.0).unwrap();
        assert_eq!(out, Selection::Ignored);
        assert_eq!(c.active(AxisKind::Horizontal), Dimension::Poverty);
        assert_eq!(c.active(AxisKind::Vertical), Dimension::Healthcare);
        assert_eq!(c.surface().calls.len(), before);
    }

    #[test]
    fn unknown_key_is_invalid_input() {
        let mut c = recording();
        let err = c
            .handle(ChartEvent::label_clicked(AxisKind::Horizontal, "gdp"), 0.0)
            .unwrap_err();
        assert!(matches!(err, AxisplotError::InvalidInput(_)));
        assert_eq!(c.active(AxisKind::Horizontal), Dimension::Poverty);
    }

    #[test]
    fn hover_follows_pointer_between_markers() {
        let mut c = recording();
        c.handle(ChartEvent::PointerEntered { index: 0, pointer: pos2(10.0, 10.0) }, 0.0)
            .unwrap();
        let text = c.tooltips().shown().unwrap().text.clone();
        assert!(text.contains("Alabama"));
        assert!(text.contains("poverty: 10%"));
        assert!(text.contains("healthcare: 14%"));

        c.handle(ChartEvent::PointerEntered { index: 2, pointer: pos2(50.0, 10.0) }, 0.0)
            .unwrap();
        let text = &c.tooltips().shown().unwrap().text;
        assert!(text.contains("Arizona"));
        assert!(!text.contains("Alabama"));

        c.handle(ChartEvent::PointerLeft { index: 2 }, 0.0).unwrap();
        assert!(c.tooltips().shown().is_none());
    }

    #[test]
    fn surface_emphasis_comes_from_controller_state() {
        let config = ChartConfig {
            default_x: Dimension::Age,
            default_y: Dimension::Smokes,
            ..ChartConfig::default()
        };
        let c = AxisSelectionController::new(dataset(), &config, 0.0).unwrap();
        for axis in AxisKind::BOTH {
            assert_eq!(c.surface().emphasis(axis), Some(c.active(axis)));
        }
        assert!(!c.surface().is_emphasized(AxisKind::Horizontal, Dimension::Poverty));
    }

    #[test]
    fn real_surface_keeps_exactly_one_emphasis_and_pairing() {
        let mut c = AxisSelectionController::new(dataset(), &ChartConfig::default(), 0.0).unwrap();
        let picks = [
            (AxisKind::Horizontal, Dimension::Age),
            (AxisKind::Vertical, Dimension::Obesity),
            (AxisKind::Horizontal, Dimension::Income),
            (AxisKind::Horizontal, Dimension::Income),
            (AxisKind::Vertical, Dimension::Smokes),
            (AxisKind::Horizontal, Dimension::Poverty),
        ];
        for (step, (axis, dim)) in picks.into_iter().enumerate() {
            c.select(axis, dim, step as f64 * 0.3).unwrap();
            for a in AxisKind::BOTH {
                let emphasized: Vec<_> = a
                    .choices()
                    .iter()
                    .filter(|d| c.surface().is_emphasized(a, **d))
                    .collect();
                assert_eq!(emphasized, vec![&c.active(a)]);
            }
            for (i, (m, l)) in c.surface().markers().iter().zip(c.surface().labels()).enumerate() {
                assert_eq!(m.record, i);
                assert_eq!(l.record, i);
                assert_eq!(l.text, c.records()[i].code);
            }
        }

        // Once settled, marker i sits where record i maps under both active scales.
        let settled = 100.0;
        for (i, r) in c.records().iter().enumerate() {
            let p = c.surface().marker_center(i, settled).unwrap();
            let x = c.scale(AxisKind::Horizontal);
            let y = c.scale(AxisKind::Vertical);
            assert!((p.x - x.map(r.value(x.dimension)) as f32).abs() < 1e-3);
            assert!((p.y - y.map(r.value(y.dimension)) as f32).abs() < 1e-3);
        }
    }
}
