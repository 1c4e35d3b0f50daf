//! Entry points for running the chart as a native window.
//!
//! Loading the dataset is the gate: the window, the controller and every
//! interaction handler are only created once the load has succeeded.

use std::path::Path;

use eframe::egui;

use crate::config::ChartConfig;
use crate::data::{load_dataset, Dataset};
use crate::error::{AxisplotError, Result};

use super::ScatterApp;

/// Open the chart window for an already loaded dataset. Blocks until the window is closed.
pub fn run_scatter(dataset: Dataset, mut config: ChartConfig) -> Result<()> {
    let mut opts = config.native_options.take().unwrap_or_default();
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(config.canvas.width + 16.0, config.canvas.height + 16.0))
            .with_resizable(false);
    }
    let title = config.title.clone();
    let app = ScatterApp::new(dataset, config)
        .inspect_err(|e| tracing::error!("Failed to set up chart: {e}"))?;

    eframe::run_native(&title, opts, Box::new(|_cc| Ok(Box::new(app)))).map_err(|e| {
        tracing::error!("Window error: {e}");
        AxisplotError::Ui(e.to_string())
    })
}

/// Load the CSV at `path`, then run the chart. A load failure is logged and
/// returned without opening a window.
pub fn run_scatter_from_path(path: impl AsRef<Path>, config: ChartConfig) -> Result<()> {
    let path = path.as_ref();
    let dataset = match load_dataset(path) {
        Ok(ds) => ds,
        Err(e) => {
            tracing::error!("Failed to load dataset {:?}: {e}", path);
            return Err(e);
        }
    };
    run_scatter(dataset, config)
}
