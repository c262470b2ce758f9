//! Graph compilation error.
//!
//! Returned by `StateGraph::compile` when the graph is misconfigured: an edge
//! references an unknown node, a node has no way out, or a conditional edge has
//! nothing to choose from.

use thiserror::Error;

/// Error when compiling a state graph.
///
/// Returned by `StateGraph::compile()`. Every misconfiguration is caught here so
/// that a run never starts on a graph that cannot finish.
#[derive(Debug, Error)]
pub enum CompilationError {
    /// A node id in an edge or candidate set was not registered via `add_node`
    /// (and is not START/END).
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// No edge leaves START, or more than one does.
    #[error("graph must have exactly one edge from START")]
    MissingStart,

    /// A registered node has neither a fixed nor a conditional outgoing edge.
    #[error("node has no outgoing edge: {0}")]
    MissingOutgoingEdge(String),

    /// A node has more than one outgoing edge (fixed or conditional).
    #[error("node has more than one outgoing edge: {0}")]
    DuplicateOutgoingEdge(String),

    /// A conditional edge was declared with an empty candidate set.
    #[error("conditional edge from {0} has no candidates")]
    EmptyCandidates(String),

    /// A registered node cannot be reached from START.
    #[error("node is unreachable from START: {0}")]
    Unreachable(String),

    /// An edge uses START or END in the wrong position (e.g. from END, to START).
    #[error("invalid edge: {0}")]
    InvalidEdge(String),
}
