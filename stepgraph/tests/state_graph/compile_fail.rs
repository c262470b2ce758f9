//! StateGraph compile failure cases: unknown node, missing edges, bad branches.

use rand::RngCore;
use stepgraph::{CompilationError, StateGraph, END, START};

use crate::common::{add_trail_node, TrailState};

fn to_b(_: &TrailState, _: &mut dyn RngCore) -> String {
    "b".to_string()
}

#[test]
fn compile_fails_when_edge_refers_to_unknown_node() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    graph.add_edge(START, "a");
    graph.add_edge("a", "missing");

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "missing"),
        other => panic!("expected NodeNotFound, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_when_candidate_is_unknown_node() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    add_trail_node(&mut graph, "b");
    graph.add_edge(START, "a");
    graph.add_conditional_edges("a", to_b, ["b", "ghost"]);
    graph.add_edge("b", END);

    match graph.compile() {
        Err(CompilationError::NodeNotFound(id)) => assert_eq!(id, "ghost"),
        other => panic!("expected NodeNotFound, got {:?}", other.err()),
    }
}

/// **Scenario**: A non-terminal step without any outgoing edge fails construction.
#[test]
fn compile_fails_when_node_has_no_outgoing_edge() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    add_trail_node(&mut graph, "b");
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");

    match graph.compile() {
        Err(CompilationError::MissingOutgoingEdge(id)) => assert_eq!(id, "b"),
        other => panic!("expected MissingOutgoingEdge, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_without_start_edge() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    graph.add_edge("a", END);

    assert!(matches!(graph.compile(), Err(CompilationError::MissingStart)));
}

#[test]
fn compile_fails_with_two_start_edges() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    add_trail_node(&mut graph, "b");
    graph.add_edge(START, "a");
    graph.add_edge(START, "b");
    graph.add_edge("a", END);
    graph.add_edge("b", END);

    assert!(matches!(graph.compile(), Err(CompilationError::MissingStart)));
}

#[test]
fn compile_fails_when_node_has_fixed_and_conditional_edge() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    add_trail_node(&mut graph, "b");
    graph.add_edge(START, "a");
    graph.add_edge("a", "b");
    graph.add_conditional_edges("a", to_b, ["b"]);
    graph.add_edge("b", END);

    match graph.compile() {
        Err(CompilationError::DuplicateOutgoingEdge(id)) => assert_eq!(id, "a"),
        other => panic!("expected DuplicateOutgoingEdge, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_with_empty_candidate_set() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    graph.add_edge(START, "a");
    graph.add_conditional_edges("a", to_b, Vec::<String>::new());

    match graph.compile() {
        Err(CompilationError::EmptyCandidates(id)) => assert_eq!(id, "a"),
        other => panic!("expected EmptyCandidates, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_when_node_is_unreachable() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    add_trail_node(&mut graph, "island");
    graph.add_edge(START, "a");
    graph.add_edge("a", END);
    graph.add_edge("island", END);

    match graph.compile() {
        Err(CompilationError::Unreachable(id)) => assert_eq!(id, "island"),
        other => panic!("expected Unreachable, got {:?}", other.err()),
    }
}

#[test]
fn compile_fails_on_edge_from_end_or_to_start() {
    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    graph.add_edge(START, "a");
    graph.add_edge("a", END);
    graph.add_edge(END, "a");
    assert!(matches!(graph.compile(), Err(CompilationError::InvalidEdge(_))));

    let mut graph = StateGraph::<TrailState>::new();
    add_trail_node(&mut graph, "a");
    graph.add_edge(START, "a");
    graph.add_edge("a", START);
    assert!(matches!(graph.compile(), Err(CompilationError::InvalidEdge(_))));
}
