//! Graph node trait: one step in a StateGraph.
//!
//! Receives state `S`, returns the updated `S`. Routing is not the node's
//! business: the graph resolves the next step from the node's outgoing edge.

use crate::error::StepError;

/// One step in a graph: state in, state out.
///
/// **Interaction**: Registered with `StateGraph::add_node`; called by
/// `CompiledStateGraph::invoke` / `stream` (optionally through a `NodeMiddleware`).
pub trait Node<S>: Send + Sync {
    /// Node id (e.g. `"take_order"`). Must be unique within a graph.
    fn id(&self) -> &str;

    /// One step: state in, state out.
    fn run(&self, state: S) -> Result<S, StepError>;
}

/// Adapts an infallible closure `Fn(S) -> S` to [`Node`].
///
/// Most steps in a transition graph are plain functions; this saves a struct +
/// impl per step.
pub struct FnNode<F> {
    id: String,
    f: F,
}

impl<F> FnNode<F> {
    /// Creates a node with the given id that runs `f`.
    pub fn new(id: impl Into<String>, f: F) -> Self {
        Self { id: id.into(), f }
    }
}

impl<S, F> Node<S> for FnNode<F>
where
    F: Fn(S) -> S + Send + Sync,
{
    fn id(&self) -> &str {
        &self.id
    }

    fn run(&self, state: S) -> Result<S, StepError> {
        Ok((self.f)(state))
    }
}
