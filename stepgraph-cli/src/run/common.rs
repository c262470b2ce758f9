//! Shared run logic: compile a demo graph, stream it and collect the visited path.
//!
//! Used by [`run_with_config`](super::run_with_config) for every demo, and by tests that
//! build their own graphs. Interacts with [`StateGraph`](stepgraph::StateGraph) and
//! [`Steps`](stepgraph::Steps).

use serde::Serialize;
use stepgraph::StateGraph;

use crate::config::{Demo, RunConfig};
use crate::middleware::WithNodeLogging;

use super::Error;

/// Outcome of one demo run.
#[derive(Clone, Debug, PartialEq)]
pub struct RunReport {
    pub demo: Demo,
    /// Node ids in execution order.
    pub path: Vec<String>,
    /// Final state, serialized with the demo state's field names.
    pub final_state: serde_json::Value,
}

/// Compiles `graph` (with node logging when `config.verbose`), streams it from `state`
/// and returns the visited node ids plus the final state.
///
/// Stops at the first error: compile errors, unknown steps, a failing node or the
/// recursion limit.
pub(crate) fn run_graph<S>(
    graph: StateGraph<S>,
    state: S,
    config: &RunConfig,
) -> Result<(Vec<String>, S), Error>
where
    S: Clone + Send + Sync + 'static,
{
    let graph = if config.verbose {
        graph.with_node_logging()
    } else {
        graph
    };
    let compiled = graph.compile()?;

    let mut steps = compiled.stream_with_config(state, &config.runnable_config());
    let mut path = Vec::new();
    for update in steps.by_ref() {
        let update = update?;
        tracing::debug!(node = %update.node_id, next = %update.next, "step");
        path.push(update.node_id);
    }
    let final_state = steps.into_state().ok_or("run ended without a final state")?;
    Ok((path, final_state))
}

/// Runs `graph` and packages the result as a [`RunReport`].
pub(crate) fn run_report<S>(
    graph: StateGraph<S>,
    state: S,
    config: &RunConfig,
) -> Result<RunReport, Error>
where
    S: Clone + Send + Sync + Serialize + 'static,
{
    let (path, final_state) = run_graph(graph, state, config)?;
    Ok(RunReport {
        demo: config.demo,
        path,
        final_state: serde_json::to_value(&final_state)?,
    })
}
