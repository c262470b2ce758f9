//! Per-run configuration: random seed and step limit.
//!
//! Passed to `CompiledStateGraph::invoke_with_config`. The seed makes conditional
//! branching reproducible; the recursion limit bounds graphs that cycle.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Default step limit, same as LangGraph's `recursion_limit`.
pub const DEFAULT_RECURSION_LIMIT: usize = 25;

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}

/// Config for one run of a compiled graph.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnableConfig {
    /// Seed for the run's random source. `None` seeds from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Maximum number of node runs before the run fails with `RecursionLimit`.
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

impl Default for RunnableConfig {
    fn default() -> Self {
        Self {
            seed: None,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl RunnableConfig {
    /// Config with a fixed seed and the default recursion limit.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Returns the same config with `recursion_limit` replaced.
    pub fn with_recursion_limit(self, recursion_limit: usize) -> Self {
        Self {
            recursion_limit,
            ..self
        }
    }

    /// Builds the random source for a run from `seed`.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
