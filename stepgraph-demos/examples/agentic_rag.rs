//! Agentic RAG demo over canned blog-post excerpts.
//!
//! Run: `cargo run -p stepgraph-demos --example agentic_rag -- "What are agents?"`

use std::sync::Arc;

use stepgraph::RunnableConfig;
use stepgraph_demos::agentic_rag::{
    build_graph, Message, RagState, StaticRetriever, DEFAULT_MAX_REWRITES,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let question = std::env::args().nth(1).unwrap_or_else(|| {
        "What does Lilian Weng say about the types of agent memory?".to_string()
    });
    let graph = build_graph(Arc::new(StaticRetriever::sample()), DEFAULT_MAX_REWRITES)?;
    let state = graph.invoke_with_config(RagState::new(question), &RunnableConfig::default())?;

    for m in &state.messages {
        match m {
            Message::System(x) => println!("[System] {}", x),
            Message::User(x) => println!("[User] {}", x),
            Message::Assistant(x) => println!("[Assistant] {}", x),
            Message::Tool(x) => println!("[Tool] {}", x),
        }
    }
    Ok(())
}
