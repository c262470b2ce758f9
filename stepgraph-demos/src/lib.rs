//! Demo graphs built on `stepgraph`.
//!
//! - [`coffee_order`]: take order, randomly add milk or sugar, serve.
//! - [`simple_graph`]: three nodes, one random branch.
//! - [`agentic_rag`]: agent → retrieve → grade → (generate | rewrite → agent).
//!
//! Each module exposes its state record, a `builder()` returning the uncompiled
//! `StateGraph` (so callers can attach middleware) and `build_graph()`.

pub mod agentic_rag;
pub mod coffee_order;
pub mod simple_graph;
