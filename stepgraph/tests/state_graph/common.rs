//! Shared state type and builders for StateGraph integration tests.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use stepgraph::{StateGraph, END, START};

/// Trail of visited step names, appended by every node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailState {
    pub trail: Vec<String>,
}

/// Registers a node that appends its own id to the trail.
pub fn add_trail_node(graph: &mut StateGraph<TrailState>, id: &'static str) {
    graph.add_fn_node(id, move |mut s: TrailState| {
        s.trail.push(id.to_string());
        s
    });
}

/// START -> a -> (coin: b | c) -> d -> END.
pub fn diamond_graph() -> StateGraph<TrailState> {
    let mut graph = StateGraph::new();
    for id in ["a", "b", "c", "d"] {
        add_trail_node(&mut graph, id);
    }
    graph.add_edge(START, "a");
    graph.add_conditional_edges(
        "a",
        |_: &TrailState, rng: &mut dyn RngCore| {
            if rng.gen::<f64>() > 0.5 {
                "b".to_string()
            } else {
                "c".to_string()
            }
        },
        ["b", "c"],
    );
    graph.add_edge("b", "d");
    graph.add_edge("c", "d");
    graph.add_edge("d", END);
    graph
}
