//! State graph: nodes + explicit edges (from → to) + conditional edges.
//!
//! Add nodes with `add_node`, wire them with `add_edge(from, to)` or
//! `add_conditional_edges(from, route, candidates)` using `START` and `END` for
//! graph entry/exit, then `compile` to get a `CompiledStateGraph`.

use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;

use rand::RngCore;

use crate::graph::branch::Branch;
use crate::graph::compile_error::CompilationError;
use crate::graph::compiled::{CompiledStateGraph, Edge};
use crate::graph::node::{FnNode, Node};
use crate::graph::node_middleware::NodeMiddleware;

/// Sentinel for graph entry: use as `from_id` in `add_edge(START, first_node_id)`.
pub const START: &str = "__start__";

/// Sentinel for graph exit: use as `to_id` in `add_edge(last_node_id, END)`.
pub const END: &str = "__end__";

/// State graph: nodes plus fixed and conditional edges.
///
/// Generic over state type `S`. Build with `add_node` / `add_edge` /
/// `add_conditional_edges`, then `compile()` to obtain an executable graph.
///
/// **Interaction**: Accepts `Arc<dyn Node<S>>`; produces `CompiledStateGraph<S>`.
pub struct StateGraph<S> {
    nodes: HashMap<String, Arc<dyn Node<S>>>,
    /// Registration order of node ids; used for stable validation errors and rendering.
    node_order: Vec<String>,
    /// Fixed edges (from_id, to_id).
    edges: Vec<(String, String)>,
    /// Conditional edges (from_id, branch).
    branches: Vec<(String, Branch<S>)>,
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> Default for StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateGraph<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            node_order: Vec::new(),
            edges: Vec::new(),
            branches: Vec::new(),
            middleware: None,
        }
    }

    /// Attaches node middleware; every node run in the compiled graph goes through it.
    pub fn with_middleware(self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        Self {
            middleware: Some(middleware),
            ..self
        }
    }

    /// Adds a node; id must be unique. Replaces if same id.
    pub fn add_node(&mut self, id: impl Into<String>, node: Arc<dyn Node<S>>) -> &mut Self {
        let id = id.into();
        if !self.nodes.contains_key(&id) {
            self.node_order.push(id.clone());
        }
        self.nodes.insert(id, node);
        self
    }

    /// Adds a node backed by a plain `Fn(S) -> S`.
    pub fn add_fn_node<F>(&mut self, id: impl Into<String>, f: F) -> &mut Self
    where
        F: Fn(S) -> S + Send + Sync + 'static,
    {
        let id = id.into();
        let node = Arc::new(FnNode::new(id.clone(), f));
        self.add_node(id, node)
    }

    /// Adds a fixed edge from `from_id` to `to_id`.
    ///
    /// Use `START` for graph entry and `END` for graph exit.
    pub fn add_edge(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) -> &mut Self {
        self.edges.push((from_id.into(), to_id.into()));
        self
    }

    /// Adds a conditional edge out of `from_id`.
    ///
    /// After `from_id` runs, `route` is called with the new state and the run's
    /// random source; it must return one of `candidates` (node ids or `END`).
    /// Anything else fails the run with `RunError::UnknownStep`.
    pub fn add_conditional_edges<F, I, T>(
        &mut self,
        from_id: impl Into<String>,
        route: F,
        candidates: I,
    ) -> &mut Self
    where
        F: Fn(&S, &mut dyn RngCore) -> String + Send + Sync + 'static,
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.branches
            .push((from_id.into(), Branch::new(Arc::new(route), candidates)));
        self
    }

    /// Adds a conditional edge whose `route` returns labels mapped to targets by `path_map`.
    pub fn add_conditional_edges_with_map<F, I, K, V>(
        &mut self,
        from_id: impl Into<String>,
        route: F,
        path_map: I,
    ) -> &mut Self
    where
        F: Fn(&S, &mut dyn RngCore) -> String + Send + Sync + 'static,
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.branches.push((
            from_id.into(),
            Branch::with_path_map(Arc::new(route), path_map),
        ));
        self
    }

    /// Builds the executable graph.
    ///
    /// Validates that every edge endpoint exists, START has exactly one way out,
    /// every node has exactly one outgoing edge, no conditional edge has an empty
    /// candidate set, and every node is reachable from START.
    pub fn compile(self) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(None)
    }

    /// Builds the executable graph with node middleware (overrides `with_middleware`).
    pub fn compile_with_middleware(
        self,
        middleware: Arc<dyn NodeMiddleware<S>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        self.compile_internal(Some(middleware))
    }

    fn check_source(&self, from: &str) -> Result<(), CompilationError> {
        if from == END {
            return Err(CompilationError::InvalidEdge("edge from END".into()));
        }
        if from != START && !self.nodes.contains_key(from) {
            return Err(CompilationError::NodeNotFound(from.to_string()));
        }
        Ok(())
    }

    fn check_target(&self, from: &str, to: &str) -> Result<(), CompilationError> {
        if to == START {
            return Err(CompilationError::InvalidEdge(format!(
                "edge from {} to START",
                from
            )));
        }
        if to != END && !self.nodes.contains_key(to) {
            return Err(CompilationError::NodeNotFound(to.to_string()));
        }
        Ok(())
    }

    fn compile_internal(
        self,
        middleware: Option<Arc<dyn NodeMiddleware<S>>>,
    ) -> Result<CompiledStateGraph<S>, CompilationError> {
        for (from, to) in &self.edges {
            self.check_source(from)?;
            self.check_target(from, to)?;
        }
        for (from, branch) in &self.branches {
            self.check_source(from)?;
            if branch.is_empty() {
                return Err(CompilationError::EmptyCandidates(from.clone()));
            }
            for to in branch.targets() {
                self.check_target(from, to)?;
            }
        }

        let StateGraph {
            nodes,
            node_order,
            edges,
            branches,
            middleware: attached,
        } = self;

        let mut outgoing: HashMap<String, Edge<S>> = HashMap::new();
        let fixed = edges.into_iter().map(|(f, t)| (f, Edge::Fixed(t)));
        let conditional = branches
            .into_iter()
            .map(|(f, b)| (f, Edge::Conditional(b)));
        for (from, edge) in fixed.chain(conditional) {
            if outgoing.contains_key(&from) {
                return Err(if from == START {
                    CompilationError::MissingStart
                } else {
                    CompilationError::DuplicateOutgoingEdge(from)
                });
            }
            outgoing.insert(from, edge);
        }

        if !outgoing.contains_key(START) {
            return Err(CompilationError::MissingStart);
        }
        if let Some(id) = node_order.iter().find(|id| !outgoing.contains_key(*id)) {
            return Err(CompilationError::MissingOutgoingEdge(id.clone()));
        }

        let mut reached: HashSet<&str> = HashSet::new();
        let mut queue: VecDeque<&str> = VecDeque::from([START]);
        while let Some(id) = queue.pop_front() {
            let Some(edge) = outgoing.get(id) else {
                continue;
            };
            for to in edge.targets() {
                if reached.insert(to) {
                    queue.push_back(to);
                }
            }
        }
        if let Some(id) = node_order.iter().find(|id| !reached.contains(id.as_str())) {
            return Err(CompilationError::Unreachable(id.clone()));
        }

        Ok(CompiledStateGraph {
            nodes,
            node_order,
            edges: outgoing,
            middleware: middleware.or(attached),
        })
    }
}
