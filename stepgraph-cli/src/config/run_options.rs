//! Optional overrides for a run (CLI args or programmatic).
//!
//! Used by [`RunConfig::apply_options`](super::RunConfig::apply_options) and
//! [`run_with_options`](crate::run_with_options). Callers build a `RunOptions` and
//! pass it to get env-based config with overrides applied.

use super::Demo;

/// Optional overrides for a run. Only set fields override the base config (from env).
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    /// Demo graph to run.
    pub demo: Option<Demo>,
    /// Seed for conditional branching.
    pub seed: Option<u64>,
    /// Step limit for the run.
    pub recursion_limit: Option<usize>,
    /// Question for the RAG demo.
    pub question: Option<String>,
    /// Rewrite budget for the RAG demo.
    pub max_rewrites: Option<u32>,
    /// Log node enter/exit and graph events.
    pub verbose: bool,
}
