use std::path::PathBuf;
use std::process::ExitCode;

use axisplot::{run_scatter_from_path, ChartConfig};
use tracing_subscriber::EnvFilter;

// Usage:
//   axisplot [--config <chart.json|chart.yaml>] <data.csv>
//
// Log verbosity follows RUST_LOG (default: info).

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut config_path: Option<PathBuf> = None;
    let mut data_path: Option<PathBuf> = None;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            config_path = args.next().map(PathBuf::from);
        } else if data_path.is_none() {
            data_path = Some(PathBuf::from(arg));
        }
    }
    let Some(data_path) = data_path else {
        eprintln!("usage: axisplot [--config <file.json|file.yaml>] <data.csv>");
        return ExitCode::from(2);
    };

    let config = match config_path {
        Some(path) => match ChartConfig::from_path(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::error!("Failed to load config {:?}: {e}", path);
                return ExitCode::FAILURE;
            }
        },
        None => ChartConfig::default(),
    };

    match run_scatter_from_path(&data_path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
