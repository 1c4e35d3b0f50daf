//! Configuration for the scatter chart.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::data::{AxisKind, Dimension};
use crate::error::{AxisplotError, Result};
use crate::scale::ScaleBuilder;

// ─────────────────────────────────────────────────────────────────────────────
// Canvas geometry
// ─────────────────────────────────────────────────────────────────────────────

/// Fixed canvas size in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 500.0,
        }
    }
}

/// Space reserved around the inner plot area for axes and axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            top: 50.0,
            right: 80.0,
            bottom: 80.0,
            left: 80.0,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// ChartConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration.
///
/// | Field                | Purpose |
/// |----------------------|---------|
/// | `canvas`, `margin`   | Fixed drawing area and the inner plot rectangle |
/// | `transition_ms`      | Duration of every rescale animation |
/// | `marker_*`           | Point marker styling |
/// | `label_value_offset` | Vertical nudge of point labels, in data units |
/// | `tooltip_offset`     | Tooltip position relative to the pointer |
/// | `default_x/y`        | Dimensions active at startup |
///
/// Every field has a default, so a config file only needs the fields it changes.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Native window title.
    pub title: String,
    pub canvas: CanvasSize,
    pub margin: Margins,
    /// Transition duration in milliseconds. Default: `1000`.
    pub transition_ms: u64,
    /// Marker circle radius in pixels. Default: `15.0`.
    pub marker_radius: f32,
    /// Marker fill opacity in `0.0..=1.0`. Default: `0.5`.
    pub marker_opacity: f32,
    /// Point labels are placed at `y(value - label_value_offset)`. Default: `0.3`.
    pub label_value_offset: f64,
    /// Tooltip offset `[dx, dy]` from the pointer. Default: `[-60.0, 40.0]`.
    pub tooltip_offset: [f32; 2],
    /// Approximate number of ticks per axis. Default: `10`.
    pub tick_count: usize,
    pub default_x: Dimension,
    pub default_y: Dimension,
    /// Optional eframe native-window options.
    #[serde(skip)]
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "axisplot".to_string(),
            canvas: CanvasSize::default(),
            margin: Margins::default(),
            transition_ms: 1000,
            marker_radius: 15.0,
            marker_opacity: 0.5,
            label_value_offset: 0.3,
            tooltip_offset: [-60.0, 40.0],
            tick_count: 10,
            default_x: AxisKind::Horizontal.default_dimension(),
            default_y: AxisKind::Vertical.default_dimension(),
            native_options: None,
        }
    }
}

impl ChartConfig {
    /// Load a config from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| AxisplotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        let cfg: ChartConfig = match ext.as_deref() {
            Some("json") => serde_json::from_str(&text)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            _ => {
                return Err(AxisplotError::Config(format!(
                    "unsupported config file extension: {path:?}"
                )))
            }
        };
        cfg.validate()?;
        tracing::debug!("Loaded chart config from {:?}", path);
        Ok(cfg)
    }

    pub fn plot_width(&self) -> f32 {
        self.canvas.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f32 {
        self.canvas.height - self.margin.top - self.margin.bottom
    }

    pub fn scale_builder(&self) -> ScaleBuilder {
        ScaleBuilder::new(self.plot_width() as f64, self.plot_height() as f64)
    }

    pub fn validate(&self) -> Result<()> {
        if self.default_x.axis() != AxisKind::Horizontal {
            return Err(AxisplotError::invalid(format!(
                "default_x '{}' is not a horizontal dimension",
                self.default_x
            )));
        }
        if self.default_y.axis() != AxisKind::Vertical {
            return Err(AxisplotError::invalid(format!(
                "default_y '{}' is not a vertical dimension",
                self.default_y
            )));
        }
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(AxisplotError::Config(
                "margins leave no room for the plot area".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.marker_opacity) {
            return Err(AxisplotError::Config(format!(
                "marker_opacity {} is outside 0..=1",
                self.marker_opacity
            )));
        }
        Ok(())
    }
}
