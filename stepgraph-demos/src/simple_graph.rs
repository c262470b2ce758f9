//! Simple graph: three nodes, one random branch.
//!
//! ```text
//! START -> node1 -(decision_node)-> node2 | node3 -> END
//! ```

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use stepgraph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use tracing::info;

pub const NODE1: &str = "node1";
pub const NODE2: &str = "node2";
pub const NODE3: &str = "node3";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphState {
    pub graph_state: String,
}

fn node1(mut state: GraphState) -> GraphState {
    info!("Passing by node 1");
    state.graph_state = "Lucas loves Elmo".into();
    state
}

fn node2(mut state: GraphState) -> GraphState {
    info!("Passing by node 2");
    state.graph_state = "Lucas loves Pancakes".into();
    state
}

fn node3(mut state: GraphState) -> GraphState {
    info!("Passing by node 3");
    state.graph_state = "Lucas loves students that ask awesome questions".into();
    state
}

/// node2 when the draw is above one half, node3 otherwise. The state is not consulted.
pub fn decision_node(_state: &GraphState, rng: &mut dyn RngCore) -> String {
    let choice = if rng.gen::<f64>() > 0.5 { NODE2 } else { NODE3 };
    choice.to_string()
}

pub fn builder() -> StateGraph<GraphState> {
    let mut graph = StateGraph::new();
    graph
        .add_fn_node(NODE1, node1)
        .add_fn_node(NODE2, node2)
        .add_fn_node(NODE3, node3);
    graph
        .add_edge(START, NODE1)
        .add_conditional_edges(NODE1, decision_node, [NODE2, NODE3])
        .add_edge(NODE2, END)
        .add_edge(NODE3, END);
    graph
}

pub fn build_graph() -> Result<CompiledStateGraph<GraphState>, CompilationError> {
    builder().compile()
}
