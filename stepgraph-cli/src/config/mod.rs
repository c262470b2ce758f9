//! Configuration types for running a demo graph.
//!
//! Re-exports [`Demo`], [`RunConfig`], [`RunOptions`] and config [`Error`].

mod demo;
mod run_config;
mod run_options;

pub use demo::Demo;
pub use run_config::{Error, RunConfig, DEFAULT_QUESTION};
pub use run_options::RunOptions;
