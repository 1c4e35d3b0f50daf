//! Tick marks for one axis, with enter/update/exit transitions.
//!
//! When the scale changes, ticks present before and after slide to their new
//! position; new ticks appear where the old scale would have put them and fade
//! in; dropped ticks slide with the new scale while fading out.

use crate::data::AxisKind;
use crate::scale::{format_tick, tick_decimals, LinearScale};
use crate::surface::tween::Tween;

#[derive(Debug, Clone)]
pub struct Tick {
    pub value: f64,
    pub label: String,
    /// Pixel offset along the axis, relative to the plot origin.
    pub position: Tween,
    pub opacity: Tween,
    exiting: bool,
}

impl Tick {
    pub fn is_exiting(&self) -> bool {
        self.exiting
    }
}

/// A tick as it should be drawn at a given instant.
#[derive(Debug, Clone, PartialEq)]
pub struct TickView<'a> {
    pub value: f64,
    pub label: &'a str,
    pub position: f32,
    pub opacity: f32,
}

#[derive(Debug, Clone)]
pub struct AxisTicks {
    axis: AxisKind,
    count: usize,
    scale: Option<LinearScale>,
    ticks: Vec<Tick>,
}

impl AxisTicks {
    pub fn new(axis: AxisKind, count: usize) -> Self {
        Self {
            axis,
            count,
            scale: None,
            ticks: Vec::new(),
        }
    }

    pub fn axis(&self) -> AxisKind {
        self.axis
    }

    pub fn scale(&self) -> Option<&LinearScale> {
        self.scale.as_ref()
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Lay ticks out for `scale` without animating.
    pub fn place(&mut self, scale: LinearScale) {
        let decimals = tick_decimals(scale.tick_step(self.count));
        self.ticks = scale
            .ticks(self.count)
            .into_iter()
            .map(|value| Tick {
                value,
                label: format_tick(value, decimals),
                position: Tween::fixed(scale.map(value) as f32),
                opacity: Tween::fixed(1.0),
                exiting: false,
            })
            .collect();
        self.scale = Some(scale);
    }

    /// Move to `scale`, animating over `duration` seconds starting at `now`.
    pub fn transition(&mut self, scale: LinearScale, now: f64, duration: f64) {
        let Some(old) = self.scale else {
            self.place(scale);
            return;
        };
        self.ticks.retain(|t| !(t.exiting && !t.opacity.is_running(now)));

        let decimals = tick_decimals(scale.tick_step(self.count));
        let values = scale.ticks(self.count);

        for tick in self.ticks.iter_mut() {
            if !values.iter().any(|v| same_value(*v, tick.value)) {
                tick.exiting = true;
                tick.position.retarget(scale.map(tick.value) as f32, now, duration);
                tick.opacity.retarget(0.0, now, duration);
            }
        }

        for value in values {
            let target = scale.map(value) as f32;
            let label = format_tick(value, decimals);
            match self.ticks.iter_mut().find(|t| same_value(t.value, value)) {
                Some(tick) => {
                    tick.exiting = false;
                    tick.label = label;
                    tick.position.retarget(target, now, duration);
                    tick.opacity.retarget(1.0, now, duration);
                }
                None => {
                    let mut position = Tween::fixed(old.map(value) as f32);
                    position.retarget(target, now, duration);
                    let mut opacity = Tween::fixed(0.0);
                    opacity.retarget(1.0, now, duration);
                    self.ticks.push(Tick {
                        value,
                        label,
                        position,
                        opacity,
                        exiting: false,
                    });
                }
            }
        }
        self.scale = Some(scale);
    }

    /// Ticks to draw at `now`, skipping ones that have fully faded out.
    pub fn visible(&self, now: f64) -> impl Iterator<Item = TickView<'_>> {
        self.ticks.iter().filter_map(move |t| {
            let opacity = t.opacity.value_at(now);
            if t.exiting && opacity <= 0.0 {
                return None;
            }
            Some(TickView {
                value: t.value,
                label: &t.label,
                position: t.position.value_at(now),
                opacity,
            })
        })
    }

    pub fn is_animating(&self, now: f64) -> bool {
        self.ticks
            .iter()
            .any(|t| t.position.is_running(now) || t.opacity.is_running(now))
    }
}

fn same_value(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}
