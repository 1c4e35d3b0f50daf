//! Data-to-pixel mappings for the two axes.
//!
//! The horizontal axis pads its lower bound by 0.9 × min; the vertical axis is
//! inverted (max at pixel 0) and pads with 0.8 × min. The two factors differ on
//! purpose and are kept as-is.

use crate::data::{AxisKind, Dimension, Record};
use crate::error::{AxisplotError, Result};

pub const HORIZONTAL_MIN_FACTOR: f64 = 0.9;
pub const VERTICAL_MIN_FACTOR: f64 = 0.8;

// ─────────────────────────────────────────────────────────────────────────────
// LinearScale
// ─────────────────────────────────────────────────────────────────────────────

/// Affine map from `domain` to `range`. Either interval may be descending.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> [f64; 2] {
        self.domain
    }

    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Map a data value to a pixel coordinate. A zero-width domain maps everything
    /// to the start of the range.
    pub fn map(&self, value: f64) -> f64 {
        let d = self.domain[1] - self.domain[0];
        if d == 0.0 {
            return self.range[0];
        }
        let t = (value - self.domain[0]) / d;
        self.range[0] + t * (self.range[1] - self.range[0])
    }

    /// Spacing of roughly `count` "nice" ticks (1, 2 or 5 × 10^k) over the domain.
    pub fn tick_step(&self, count: usize) -> f64 {
        let (lo, hi) = self.sorted_domain();
        let raw = (hi - lo) / count.max(1) as f64;
        if !(raw.is_finite() && raw > 0.0) {
            return 0.0;
        }
        let power = raw.log10().floor();
        let base = 10f64.powf(power);
        let err = raw / base;
        let factor = if err >= 50f64.sqrt() {
            10.0
        } else if err >= 10f64.sqrt() {
            5.0
        } else if err >= 2f64.sqrt() {
            2.0
        } else {
            1.0
        };
        factor * base
    }

    /// Nice tick values inside the domain, ascending.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = self.sorted_domain();
        if lo == hi {
            return vec![lo];
        }
        let step = self.tick_step(count);
        if step <= 0.0 {
            return Vec::new();
        }
        // Work in integer multiples of the step to avoid accumulating error.
        let first = (lo / step).ceil() as i64;
        let last = (hi / step).floor() as i64;
        (first..=last).map(|i| round_to_step(i as f64 * step, step)).collect()
    }

    fn sorted_domain(&self) -> (f64, f64) {
        let [a, b] = self.domain;
        if a <= b { (a, b) } else { (b, a) }
    }
}

fn round_to_step(v: f64, step: f64) -> f64 {
    let decimals = tick_decimals(step) as i32;
    let m = 10f64.powi(decimals);
    (v * m).round() / m
}

/// Number of fractional digits needed to print ticks spaced by `step`.
pub fn tick_decimals(step: f64) -> usize {
    if !(step.is_finite() && step > 0.0) {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}

/// Format a tick value with the given precision and thousands separators, e.g. `45,000`.
pub fn format_tick(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if value < 0.0 && text.chars().any(|c| c != '0' && c != '.') { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ScaleMapping / ScaleBuilder
// ─────────────────────────────────────────────────────────────────────────────

/// A scale together with the dimension and axis it was built for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleMapping {
    pub axis: AxisKind,
    pub dimension: Dimension,
    pub scale: LinearScale,
}

impl ScaleMapping {
    pub fn map(&self, value: f64) -> f64 {
        self.scale.map(value)
    }

    pub fn domain(&self) -> [f64; 2] {
        self.scale.domain()
    }
}

/// Builds per-axis scales against a fixed inner plot size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleBuilder {
    pub plot_width: f64,
    pub plot_height: f64,
}

impl ScaleBuilder {
    pub fn new(plot_width: f64, plot_height: f64) -> Self {
        Self { plot_width, plot_height }
    }

    pub fn build(&self, records: &[Record], dimension: Dimension, axis: AxisKind) -> Result<ScaleMapping> {
        if dimension.axis() != axis {
            return Err(AxisplotError::invalid(format!(
                "dimension '{dimension}' cannot drive the {axis} axis"
            )));
        }
        let (min, max) = extent(records, dimension)?;
        let scale = match axis {
            AxisKind::Horizontal => {
                LinearScale::new([min * HORIZONTAL_MIN_FACTOR, max], [0.0, self.plot_width])
            }
            AxisKind::Vertical => {
                LinearScale::new([max, min * VERTICAL_MIN_FACTOR], [0.0, self.plot_height])
            }
        };
        Ok(ScaleMapping { axis, dimension, scale })
    }
}

/// Min and max of the finite values of `dimension`.
fn extent(records: &[Record], dimension: Dimension) -> Result<(f64, f64)> {
    if records.is_empty() {
        return Err(AxisplotError::invalid("cannot build a scale over zero records"));
    }
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in records.iter().map(|r| r.value(dimension)).filter(|v| v.is_finite()) {
        min = min.min(v);
        max = max.max(v);
    }
    if min > max {
        return Err(AxisplotError::invalid(format!(
            "dimension '{dimension}' has no finite values"
        )));
    }
    Ok((min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(dim: Dimension, values: &[f64]) -> Vec<Record> {
        values
            .iter()
            .enumerate()
            .map(|(i, v)| Record::new(format!("r{i}"), format!("R{i}")).with(dim, *v))
            .collect()
    }

    #[test]
    fn horizontal_domain_pads_min_by_point_nine() {
        let rs = records(Dimension::Poverty, &[10.0, 20.0, 30.0]);
        let m = ScaleBuilder::new(740.0, 370.0)
            .build(&rs, Dimension::Poverty, AxisKind::Horizontal)
            .unwrap();
        assert_eq!(m.domain(), [9.0, 30.0]);
        assert_eq!(m.scale.range(), [0.0, 740.0]);
    }

    #[test]
    fn vertical_domain_is_inverted_and_pads_by_point_eight() {
        let rs = records(Dimension::Obesity, &[20.0, 25.0, 35.0]);
        let m = ScaleBuilder::new(740.0, 370.0)
            .build(&rs, Dimension::Obesity, AxisKind::Vertical)
            .unwrap();
        assert_eq!(m.domain(), [35.0, 16.0]);
        assert_eq!(m.map(35.0), 0.0);
        assert!(m.map(20.0) > m.map(25.0));
    }

    #[test]
    fn mapped_pixels_stay_inside_plot() {
        let b = ScaleBuilder::new(740.0, 370.0);
        let values = [3.2, 7.7, 11.0, 19.9, 0.5, 14.1];
        for dim in Dimension::ALL {
            let rs = records(dim, &values);
            let m = b.build(&rs, dim, dim.axis()).unwrap();
            let limit = match dim.axis() {
                AxisKind::Horizontal => 740.0,
                AxisKind::Vertical => 370.0,
            };
            for r in &rs {
                let px = m.map(r.value(dim));
                assert!(px >= 0.0 && px <= limit, "{dim}: {px}");
            }
        }
    }

    #[test]
    fn empty_records_and_wrong_axis_are_invalid() {
        let b = ScaleBuilder::new(740.0, 370.0);
        assert!(matches!(
            b.build(&[], Dimension::Age, AxisKind::Horizontal),
            Err(AxisplotError::InvalidInput(_))
        ));
        let rs = records(Dimension::Age, &[30.0]);
        assert!(matches!(
            b.build(&rs, Dimension::Age, AxisKind::Vertical),
            Err(AxisplotError::InvalidInput(_))
        ));
    }

    #[test]
    fn nan_values_are_skipped() {
        let rs = records(Dimension::Age, &[f64::NAN, 30.0, 40.0]);
        let m = ScaleBuilder::new(100.0, 100.0)
            .build(&rs, Dimension::Age, AxisKind::Horizontal)
            .unwrap();
        assert_eq!(m.domain(), [27.0, 40.0]);

        let all_nan = records(Dimension::Age, &[f64::NAN]);
        assert!(ScaleBuilder::new(100.0, 100.0)
            .build(&all_nan, Dimension::Age, AxisKind::Horizontal)
            .is_err());
    }

    #[test]
    fn single_value_domain_does_not_divide_by_zero() {
        let s = LinearScale::new([5.0, 5.0], [0.0, 100.0]);
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.ticks(10), vec![5.0]);
    }

    #[test]
    fn ticks_are_nice_and_inside_domain() {
        let s = LinearScale::new([9.0, 30.0], [0.0, 740.0]);
        assert_eq!(s.tick_step(10), 2.0);
        assert_eq!(s.ticks(10), vec![10.0, 12.0, 14.0, 16.0, 18.0, 20.0, 22.0, 24.0, 26.0, 28.0, 30.0]);

        let inverted = LinearScale::new([25.0, 3.2], [0.0, 370.0]);
        let t = inverted.ticks(10);
        assert_eq!(t.first(), Some(&4.0));
        assert_eq!(t.last(), Some(&24.0));
    }

    #[test]
    fn tick_format_groups_thousands() {
        assert_eq!(format_tick(45000.0, 0), "45,000");
        assert_eq!(format_tick(1234567.0, 0), "1,234,567");
        assert_eq!(format_tick(12.5, 1), "12.5");
        assert_eq!(format_tick(-1500.0, 0), "-1,500");
        assert_eq!(tick_decimals(0.5), 1);
        assert_eq!(tick_decimals(2000.0), 0);
    }
}
