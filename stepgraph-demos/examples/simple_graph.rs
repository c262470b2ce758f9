//! Simple graph demo: print each visited node, then the final state.
//!
//! Run: `cargo run -p stepgraph-demos --example simple_graph -- 7`

use stepgraph::RunnableConfig;
use stepgraph_demos::simple_graph::{build_graph, GraphState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = match std::env::args().nth(1) {
        Some(seed) => RunnableConfig::seeded(seed.parse()?),
        None => RunnableConfig::default(),
    };
    let graph = build_graph()?;
    let mut steps = graph.stream_with_config(GraphState::default(), &config);
    for update in steps.by_ref() {
        let update = update?;
        println!("{} -> {}", update.node_id, update.next);
    }
    if let Some(state) = steps.into_state() {
        println!("graph_state: {}", state.graph_state);
    }
    Ok(())
}
