//! State graph: nodes + fixed and conditional edges, compile and invoke.
//!
//! Aligns with LangGraph `StateGraph`: add nodes and edges, compile, then
//! invoke with state and a random source.

mod branch;
mod compile_error;
mod compiled;
mod config;
mod logging;
mod mermaid;
mod node;
mod node_middleware;
mod state_graph;

pub use branch::{Branch, RouteFn};
pub use compile_error::CompilationError;
pub use compiled::{CompiledStateGraph, StepUpdate, Steps};
pub use config::{RunnableConfig, DEFAULT_RECURSION_LIMIT};
pub use node::{FnNode, Node};
pub use node_middleware::NodeMiddleware;
pub use state_graph::{StateGraph, END, START};
