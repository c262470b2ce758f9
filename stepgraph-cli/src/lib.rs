//! stepgraph-cli library: reusable run logic for the demo graphs.
//!
//! Reads run config from env / .env, builds the selected demo graph, streams it
//! and returns the visited path plus the final state.
//!
//! ## Usage
//!
//! ```rust,no_run
//! let report = stepgraph_cli::run()?;
//! println!("{}", report.path.join(" -> "));
//! # Ok::<(), stepgraph_cli::Error>(())
//! ```

mod config;
mod middleware;
mod run;

pub use config::{Demo, Error, RunConfig, RunOptions, DEFAULT_QUESTION};
pub use middleware::{LoggingMiddleware, WithNodeLogging};
pub use run::{config_with_options, draw_mermaid, run, run_with_config, run_with_options, RunReport};

#[cfg(test)]
mod tests;
