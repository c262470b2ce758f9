//! Run config: demo, seed, recursion limit, RAG question. Can be filled from env / .env.
//!
//! Interacts with [`RunOptions`](super::RunOptions), [`run_with_config`](crate::run_with_config)
//! and stepgraph's [`RunnableConfig`](stepgraph::RunnableConfig).

use std::str::FromStr;

use stepgraph::{RunnableConfig, DEFAULT_RECURSION_LIMIT};
use stepgraph_demos::agentic_rag::DEFAULT_MAX_REWRITES;

use super::{Demo, RunOptions};

/// Error type used for config loading and runs.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Question used by the RAG demo when none is configured.
pub const DEFAULT_QUESTION: &str = "What does Lilian Weng say about the types of agent memory?";

/// Run config for one demo run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunConfig {
    /// Demo graph to run.
    pub demo: Demo,
    /// Seed for conditional branching; `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// Maximum node runs before the run fails.
    pub recursion_limit: usize,
    /// Question for the RAG demo.
    pub question: String,
    /// Rewritten questions the RAG agent retries with.
    pub max_rewrites: u32,
    /// When true, log node enter/exit around every node.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            demo: Demo::default(),
            seed: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
            question: DEFAULT_QUESTION.to_string(),
            max_rewrites: DEFAULT_MAX_REWRITES,
            verbose: false,
        }
    }
}

/// Reads `key`, parsing it when set. Unset or empty means `None`; unparseable is an error.
fn env_parse<T>(key: &str) -> Result<Option<T>, Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| format!("invalid {}={:?}: {}", key, raw, e).into()),
        _ => Ok(None),
    }
}

impl RunConfig {
    /// Fill config from env vars (and .env). Requires `dotenv::dotenv().ok()` or load inside `run()`.
    ///
    /// All optional: `STEPGRAPH_DEMO` (coffee|simple|rag), `STEPGRAPH_SEED`,
    /// `STEPGRAPH_RECURSION_LIMIT`, `STEPGRAPH_QUESTION`, `STEPGRAPH_MAX_REWRITES`.
    pub fn from_env() -> Result<Self, Error> {
        let defaults = Self::default();
        Ok(Self {
            demo: env_parse("STEPGRAPH_DEMO")?.unwrap_or(defaults.demo),
            seed: env_parse("STEPGRAPH_SEED")?,
            recursion_limit: env_parse("STEPGRAPH_RECURSION_LIMIT")?
                .unwrap_or(defaults.recursion_limit),
            question: std::env::var("STEPGRAPH_QUESTION")
                .ok()
                .filter(|q| !q.trim().is_empty())
                .unwrap_or(defaults.question),
            max_rewrites: env_parse("STEPGRAPH_MAX_REWRITES")?.unwrap_or(defaults.max_rewrites),
            verbose: false,
        })
    }

    /// Apply optional overrides from `RunOptions` to this config.
    pub fn apply_options(&mut self, options: &RunOptions) {
        if let Some(demo) = options.demo {
            self.demo = demo;
        }
        if options.seed.is_some() {
            self.seed = options.seed;
        }
        if let Some(limit) = options.recursion_limit {
            self.recursion_limit = limit;
        }
        if let Some(question) = &options.question {
            self.question = question.clone();
        }
        if let Some(max) = options.max_rewrites {
            self.max_rewrites = max;
        }
        self.verbose = options.verbose;
    }

    /// Fixes the seed for reproducible branching.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Per-run config passed to the compiled graph.
    pub fn runnable_config(&self) -> RunnableConfig {
        RunnableConfig {
            seed: self.seed,
            recursion_limit: self.recursion_limit,
        }
    }
}
