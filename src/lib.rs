//! axisplot crate root: re-exports and module wiring.
//!
//! An interactive scatter chart built on egui/eframe. Each axis has a small
//! group of selectable dimensions; choosing one rescales that axis and animates
//! markers, labels and ticks to their new positions.
//!
//! - `data`: records, dimensions and CSV loading
//! - `scale`: per-axis data-to-pixel mappings
//! - `surface`: persistent visual elements and their transitions
//! - `tooltip`: hover tooltips bound to the active dimension pair
//! - `controller`: the axis selection state machine
//! - `app`: the eframe window

pub mod app;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod events;
pub mod scale;
pub mod surface;
pub mod tooltip;

// Public re-exports for a compact external API
pub use app::{run_scatter, run_scatter_from_path, ScatterApp};
pub use config::{CanvasSize, ChartConfig, Margins};
pub use controller::AxisSelectionController;
pub use data::{load_dataset, AxisKind, Dataset, Dimension, Record};
pub use error::{AxisplotError, Result};
pub use events::{ChartEvent, Selection};
pub use scale::{LinearScale, ScaleBuilder, ScaleMapping};
pub use surface::{ChartSurface, RenderSurface};
pub use tooltip::TooltipBinder;
