//! Node middleware: wraps each `Node::run` during invoke / stream.
//!
//! Attach with `StateGraph::with_middleware` or `StateGraph::compile_with_middleware`.

use crate::error::StepError;

/// Wraps a single node run. Implementations must call `inner` exactly once
/// and return its result (optionally after observing it).
pub trait NodeMiddleware<S>: Send + Sync {
    fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: &dyn Fn(S) -> Result<S, StepError>,
    ) -> Result<S, StepError>;
}
