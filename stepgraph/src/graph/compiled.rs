//! Compiled state graph: immutable, supports invoke and stream.
//!
//! Built by `StateGraph::compile`. Holds nodes, one resolved outgoing edge per
//! source and optional middleware. `invoke` and the `Steps` iterator share one
//! step function, so both observe the same transitions.

use std::collections::HashMap;
use std::sync::Arc;

use rand::RngCore;

use crate::error::RunError;

use super::branch::Branch;
use super::config::{RunnableConfig, DEFAULT_RECURSION_LIMIT};
use super::logging::{
    log_graph_complete, log_graph_error, log_graph_start, log_node_complete, log_node_start,
};
use super::node_middleware::NodeMiddleware;
use super::{Node, END, START};

/// Outgoing edge of one node (or of START) after compilation.
pub(crate) enum Edge<S> {
    Fixed(String),
    Conditional(Branch<S>),
}

impl<S> Clone for Edge<S> {
    fn clone(&self) -> Self {
        match self {
            Edge::Fixed(to) => Edge::Fixed(to.clone()),
            Edge::Conditional(branch) => Edge::Conditional(branch.clone()),
        }
    }
}

impl<S> Edge<S> {
    /// Every id this edge can lead to.
    pub(crate) fn targets(&self) -> Vec<&str> {
        match self {
            Edge::Fixed(to) => vec![to.as_str()],
            Edge::Conditional(branch) => branch.targets().collect(),
        }
    }
}

/// Compiled graph: immutable structure, supports invoke and stream.
///
/// Created by `StateGraph::compile()`. Runs from the target of the START edge;
/// after each node, resolves the next node from that node's outgoing edge, until END.
pub struct CompiledStateGraph<S> {
    pub(super) nodes: HashMap<String, Arc<dyn Node<S>>>,
    pub(super) node_order: Vec<String>,
    pub(super) edges: HashMap<String, Edge<S>>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Clone for CompiledStateGraph<S> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes.clone(),
            node_order: self.node_order.clone(),
            edges: self.edges.clone(),
            middleware: self.middleware.clone(),
        }
    }
}

/// One executed step, as yielded by [`Steps`].
#[derive(Clone, Debug, PartialEq)]
pub struct StepUpdate<S> {
    /// Node that just ran.
    pub node_id: String,
    /// State after the node ran.
    pub state: S,
    /// Resolved next node id, or `END`.
    pub next: String,
}

enum Flow<S> {
    Ran { state: S, node_id: String, next: String },
    Done(S),
}

/// Run position shared by `invoke` and `Steps`.
struct Cursor<'g, S> {
    graph: &'g CompiledStateGraph<S>,
    /// Node to run next; `None` until the START edge is resolved.
    current: Option<String>,
    previous: String,
    executed: usize,
    recursion_limit: usize,
    finished: bool,
}

impl<'g, S> Cursor<'g, S> {
    fn new(graph: &'g CompiledStateGraph<S>, recursion_limit: usize) -> Self {
        Self {
            graph,
            current: None,
            previous: START.to_string(),
            executed: 0,
            recursion_limit,
            finished: false,
        }
    }

    fn step(&mut self, state: S, rng: &mut dyn RngCore) -> Result<Flow<S>, RunError> {
        let result = self.step_inner(state, rng);
        if let Err(e) = &result {
            self.finished = true;
            log_graph_error(e);
        }
        result
    }

    fn step_inner(&mut self, state: S, rng: &mut dyn RngCore) -> Result<Flow<S>, RunError> {
        let current = match self.current.take() {
            Some(id) => id,
            None => {
                let entry = self.graph.resolve_next(START, &state, rng)?;
                log_graph_start(&entry);
                entry
            }
        };

        if current == END {
            if !self.finished {
                self.finished = true;
                log_graph_complete(self.executed);
            }
            self.current = Some(current);
            return Ok(Flow::Done(state));
        }

        if self.executed >= self.recursion_limit {
            return Err(RunError::RecursionLimit(self.recursion_limit));
        }

        let node = self
            .graph
            .nodes
            .get(&current)
            .ok_or_else(|| RunError::UnknownStep {
                from: self.previous.clone(),
                to: current.clone(),
            })?;

        log_node_start(&current);
        let result = match &self.graph.middleware {
            Some(middleware) => middleware.around_run(&current, state, &|s: S| node.run(s)),
            None => node.run(state),
        };
        let state = result.map_err(|e| RunError::step(current.clone(), e))?;
        self.executed += 1;

        let next = self.graph.resolve_next(&current, &state, rng)?;
        log_node_complete(&current, &next);

        self.previous = current.clone();
        self.current = Some(next.clone());
        Ok(Flow::Ran {
            state,
            node_id: current,
            next,
        })
    }
}

/// Iterator over the steps of one run. Created by [`CompiledStateGraph::stream`].
///
/// Yields one `StepUpdate` per executed node. An error is yielded at most once and
/// ends the iteration. After the iterator is exhausted, [`Steps::into_state`]
/// returns the final state.
pub struct Steps<'g, S, R> {
    cursor: Cursor<'g, S>,
    rng: R,
    state: Option<S>,
}

impl<'g, S, R> Steps<'g, S, R> {
    /// Overrides the step limit for this run.
    pub fn recursion_limit(mut self, limit: usize) -> Self {
        self.cursor.recursion_limit = limit;
        self
    }

    /// Number of nodes run so far.
    pub fn executed(&self) -> usize {
        self.cursor.executed
    }

    /// State after the last executed step; `None` after an error.
    pub fn into_state(self) -> Option<S> {
        self.state
    }
}

impl<'g, S, R> Iterator for Steps<'g, S, R>
where
    S: Clone,
    R: RngCore,
{
    type Item = Result<StepUpdate<S>, RunError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.finished {
            return None;
        }
        let state = self.state.take()?;
        match self.cursor.step(state, &mut self.rng) {
            Ok(Flow::Ran {
                state,
                node_id,
                next,
            }) => {
                self.state = Some(state.clone());
                Some(Ok(StepUpdate {
                    node_id,
                    state,
                    next,
                }))
            }
            Ok(Flow::Done(state)) => {
                self.state = Some(state);
                None
            }
            Err(e) => Some(Err(e)),
        }
    }
}

impl<S> CompiledStateGraph<S> {
    /// Runs the graph with the given state and random source, using the default
    /// recursion limit. Returns the state after the last node before END.
    pub fn invoke(&self, state: S, rng: &mut dyn RngCore) -> Result<S, RunError> {
        self.run(state, rng, DEFAULT_RECURSION_LIMIT)
    }

    /// Runs the graph with a random source built from `config.seed` and the
    /// config's recursion limit.
    pub fn invoke_with_config(&self, state: S, config: &RunnableConfig) -> Result<S, RunError> {
        let mut rng = config.rng();
        self.run(state, &mut rng, config.recursion_limit)
    }

    fn run(&self, state: S, rng: &mut dyn RngCore, recursion_limit: usize) -> Result<S, RunError> {
        let mut cursor = Cursor::new(self, recursion_limit);
        let mut state = state;
        loop {
            match cursor.step(state, rng)? {
                Flow::Ran { state: s, .. } => state = s,
                Flow::Done(s) => return Ok(s),
            }
        }
    }

    /// Streams graph execution: one `StepUpdate` per node run, in order.
    pub fn stream<R: RngCore>(&self, state: S, rng: R) -> Steps<'_, S, R> {
        Steps {
            cursor: Cursor::new(self, DEFAULT_RECURSION_LIMIT),
            rng,
            state: Some(state),
        }
    }

    /// Like [`stream`](Self::stream), with the random source and limit taken from `config`.
    pub fn stream_with_config(
        &self,
        state: S,
        config: &RunnableConfig,
    ) -> Steps<'_, S, rand::rngs::StdRng> {
        self.stream(state, config.rng())
            .recursion_limit(config.recursion_limit)
    }

    /// Node ids in registration order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.node_order.iter().map(String::as_str)
    }

    /// Ids the given node (or START) can transition to, sorted. Empty for unknown ids.
    pub fn successors(&self, id: &str) -> Vec<&str> {
        let mut targets = self.edges.get(id).map(Edge::targets).unwrap_or_default();
        targets.sort_unstable();
        targets
    }

    fn resolve_next(
        &self,
        from: &str,
        state: &S,
        rng: &mut dyn RngCore,
    ) -> Result<String, RunError> {
        match self.edges.get(from) {
            Some(Edge::Fixed(to)) => Ok(to.clone()),
            Some(Edge::Conditional(branch)) => {
                branch
                    .resolve(state, rng)
                    .map_err(|label| RunError::UnknownStep {
                        from: from.to_string(),
                        to: label,
                    })
            }
            None => Err(RunError::MissingEdge(from.to_string())),
        }
    }
}
