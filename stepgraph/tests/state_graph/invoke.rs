//! StateGraph invoke / stream: branch selection, reproducibility, step bounds.

use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use stepgraph::{RunnableConfig, StepUpdate, END};

use crate::common::{diamond_graph, TrailState};

#[test]
fn invoke_high_draw_takes_first_branch() {
    let graph = diamond_graph().compile().expect("graph compiles");
    let out = graph
        .invoke(TrailState::default(), &mut StepRng::new(u64::MAX, 0))
        .unwrap();
    assert_eq!(out.trail, vec!["a", "b", "d"]);
}

#[test]
fn invoke_low_draw_takes_second_branch() {
    let graph = diamond_graph().compile().expect("graph compiles");
    let out = graph
        .invoke(TrailState::default(), &mut StepRng::new(0, 0))
        .unwrap();
    assert_eq!(out.trail, vec!["a", "c", "d"]);
}

/// **Scenario**: The same seed yields the same path on every run.
#[test]
fn same_seed_same_path() {
    let graph = diamond_graph().compile().expect("graph compiles");
    for seed in 0..16u64 {
        let config = RunnableConfig::seeded(seed);
        let first = graph
            .invoke_with_config(TrailState::default(), &config)
            .unwrap();
        let second = graph
            .invoke_with_config(TrailState::default(), &config)
            .unwrap();
        assert_eq!(first, second, "seed {} diverged", seed);
    }
}

/// **Scenario**: Seeded StdRng passed by value to stream matches invoke_with_config.
#[test]
fn stream_with_seeded_rng_matches_invoke_with_config() {
    let graph = diamond_graph().compile().expect("graph compiles");
    let config = RunnableConfig::seeded(42);
    let invoked = graph
        .invoke_with_config(TrailState::default(), &config)
        .unwrap();
    let mut steps = graph.stream(TrailState::default(), StdRng::seed_from_u64(42));
    let ids: Vec<String> = steps
        .by_ref()
        .map(|u| u.unwrap().node_id)
        .collect();
    assert_eq!(ids, invoked.trail);
    assert_eq!(steps.into_state(), Some(invoked));
}

/// **Scenario**: An acyclic graph finishes within |steps| transitions.
#[test]
fn acyclic_graph_runs_at_most_node_count_steps() {
    let graph = diamond_graph().compile().expect("graph compiles");
    let node_count = graph.node_ids().count();
    for seed in 0..16u64 {
        let config = RunnableConfig::seeded(seed);
        let mut steps = graph.stream_with_config(TrailState::default(), &config);
        for update in steps.by_ref() {
            update.unwrap();
        }
        assert!(steps.executed() <= node_count);
    }
}

#[test]
fn stream_last_update_points_to_end() {
    let graph = diamond_graph().compile().expect("graph compiles");
    let updates: Vec<StepUpdate<TrailState>> = graph
        .stream(TrailState::default(), StepRng::new(0, 0))
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(updates.len(), 3);
    assert_eq!(updates[0].next, "c");
    assert_eq!(updates[2].node_id, "d");
    assert_eq!(updates[2].next, END);
    assert_eq!(updates[2].state.trail, vec!["a", "c", "d"]);
}
