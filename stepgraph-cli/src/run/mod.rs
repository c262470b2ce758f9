//! Run entry points: run with default config, run_with_config, or run_with_options.
//!
//! Re-exports [`run`], [`run_with_config`], [`run_with_options`], [`draw_mermaid`],
//! [`RunReport`] and [`Error`].

pub use crate::config::Error;

mod common;
mod run_with_config;

use crate::config::{RunConfig, RunOptions};

pub use common::RunReport;
pub use run_with_config::{draw_mermaid, run_with_config};

/// Run the configured demo with default config (from .env), returns the run report.
///
/// Loads `.env` internally, then calls `run_with_config`.
pub fn run() -> Result<RunReport, Error> {
    dotenv::dotenv().ok();
    let config = RunConfig::from_env()?;
    run_with_config(&config)
}

/// Run a demo with config from env and optional overrides (e.g. from CLI or programmatic).
///
/// Loads `.env`, builds `RunConfig` from env, applies `options`, then runs the graph.
/// Interacts with [`RunConfig::apply_options`](crate::RunConfig::apply_options)
/// and [`run_with_config`](run_with_config).
pub fn run_with_options(options: &RunOptions) -> Result<RunReport, Error> {
    let config = config_with_options(options)?;
    run_with_config(&config)
}

/// Env config (after loading `.env`) with `options` applied.
pub fn config_with_options(options: &RunOptions) -> Result<RunConfig, Error> {
    dotenv::dotenv().ok();
    let mut config = RunConfig::from_env()?;
    config.apply_options(options);
    Ok(config)
}
