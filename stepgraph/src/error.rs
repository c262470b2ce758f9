//! Execution error types.
//!
//! [`StepError`] is returned by a single `Node::run`; [`RunError`] is returned by
//! `CompiledStateGraph::invoke` / `stream` when a run aborts.

use thiserror::Error;

/// Step execution error.
///
/// Returned by `Node::run` when a step cannot produce the next state. Kept to one
/// variant: steps in a transition graph are pure, so failure is just a message.
#[derive(Debug, Error)]
pub enum StepError {
    /// Execution failed with a message (e.g. a collaborator returned nothing usable).
    #[error("execution failed: {0}")]
    ExecutionFailed(String),
}

/// Run error: aborts the run and is surfaced to the caller of `invoke`.
///
/// All variants are fatal; there is no retry.
#[derive(Debug, Error)]
pub enum RunError {
    /// A decision function returned a name outside the candidate set declared for
    /// its conditional edge.
    #[error("unknown step '{to}' resolved from '{from}'")]
    UnknownStep { from: String, to: String },

    /// No outgoing edge for this id. `StateGraph::compile` rules this out, so it is
    /// only seen on graphs assembled some other way.
    #[error("no outgoing edge from '{0}'")]
    MissingEdge(String),

    /// More than `limit` steps ran without reaching END.
    #[error("recursion limit of {0} steps reached without hitting END")]
    RecursionLimit(usize),

    /// A step returned an error.
    #[error("step '{node_id}' failed: {source}")]
    Step {
        node_id: String,
        #[source]
        source: StepError,
    },
}

impl RunError {
    /// Wraps a step error with the id of the node that produced it.
    pub fn step(node_id: impl Into<String>, source: StepError) -> Self {
        Self::Step {
            node_id: node_id.into(),
            source,
        }
    }
}
