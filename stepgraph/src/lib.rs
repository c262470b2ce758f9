//! # stepgraph
//!
//! A minimal, LangGraph-inspired finite transition graph in Rust. One typed state
//! record flows through a fixed set of named steps: **state-in, state-out**.
//!
//! ## Design Principles
//!
//! - **Single state type**: each graph uses one state struct (e.g. `OrderState`)
//!   that every step receives by value and returns updated.
//! - **Edges decide, nodes transform**: a step never picks its successor. A fixed
//!   edge names it, or a conditional edge's decision function picks it from a
//!   declared candidate set.
//! - **Injected randomness**: decision functions draw from the `RngCore` passed to
//!   `invoke`, so a seeded generator makes every run reproducible.
//! - **Fail fast**: misconfigured graphs fail `compile`; a decision outside its
//!   candidates fails the run with `RunError::UnknownStep`.
//!
//! ## Main Modules
//!
//! - [`graph`]: `StateGraph`, `CompiledStateGraph`, `Node`, `NodeMiddleware`,
//!   `RunnableConfig` — build, validate, run and render graphs.
//! - [`error`]: `StepError` (one step) and `RunError` (one run).
//!
//! ## Quick Start
//!
//! ```rust
//! use rand::rngs::mock::StepRng;
//! use rand::{Rng, RngCore};
//! use stepgraph::{StateGraph, END, START};
//!
//! let mut graph = StateGraph::<String>::new();
//! graph.add_fn_node("greet", |_| "hello".to_string());
//! graph.add_fn_node("shout", |s: String| s.to_uppercase());
//! graph.add_edge(START, "greet");
//! graph.add_conditional_edges(
//!     "greet",
//!     |_: &String, rng: &mut dyn RngCore| {
//!         if rng.gen::<f64>() > 0.5 {
//!             "shout".to_string()
//!         } else {
//!             END.to_string()
//!         }
//!     },
//!     ["shout", END],
//! );
//! graph.add_edge("shout", END);
//!
//! let compiled = graph.compile().unwrap();
//! let out = compiled.invoke(String::new(), &mut StepRng::new(u64::MAX, 0)).unwrap();
//! assert_eq!(out, "HELLO");
//! ```
//!
//! Concrete demo graphs (coffee order, simple graph, agentic RAG) live in
//! `stepgraph-demos`, not in this framework crate.

pub mod error;
pub mod graph;

pub use error::{RunError, StepError};
pub use graph::{
    CompilationError, CompiledStateGraph, FnNode, Node, NodeMiddleware, RunnableConfig,
    StateGraph, StepUpdate, Steps, DEFAULT_RECURSION_LIMIT, END, START,
};
