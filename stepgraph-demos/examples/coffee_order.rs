//! Coffee order demo: run once with an optional seed and print the final state.
//!
//! Run: `cargo run -p stepgraph-demos --example coffee_order -- 42`

use stepgraph::RunnableConfig;
use stepgraph_demos::coffee_order::{build_graph, OrderState};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let config = match std::env::args().nth(1) {
        Some(seed) => RunnableConfig::seeded(seed.parse()?),
        None => RunnableConfig::default(),
    };
    let graph = build_graph()?;
    let result = graph.invoke_with_config(OrderState::default(), &config)?;
    println!("\nFinal state: {}", result.order_state);
    Ok(())
}
