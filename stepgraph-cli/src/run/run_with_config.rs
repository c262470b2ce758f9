//! Builds the configured demo graph and runs it.

use std::sync::Arc;

use stepgraph_demos::agentic_rag::{self, RagState, StaticRetriever};
use stepgraph_demos::coffee_order::{self, OrderState};
use stepgraph_demos::simple_graph::{self, GraphState};

use crate::config::{Demo, RunConfig};

use super::common::run_report;
use super::{Error, RunReport};

/// Run the demo named by `config.demo` with the given config.
///
/// The RAG demo answers `config.question` over the canned blog-post retriever.
pub fn run_with_config(config: &RunConfig) -> Result<RunReport, Error> {
    tracing::info!(
        demo = %config.demo,
        seed = ?config.seed,
        recursion_limit = config.recursion_limit,
        "running demo"
    );
    match config.demo {
        Demo::Coffee => run_report(coffee_order::builder(), OrderState::default(), config),
        Demo::Simple => run_report(simple_graph::builder(), GraphState::default(), config),
        Demo::Rag => run_report(
            agentic_rag::builder(Arc::new(StaticRetriever::sample()), config.max_rewrites),
            RagState::new(config.question.as_str()),
            config,
        ),
    }
}

/// Mermaid flowchart of the configured demo graph.
pub fn draw_mermaid(config: &RunConfig) -> Result<String, Error> {
    let text = match config.demo {
        Demo::Coffee => coffee_order::build_graph()?.draw_mermaid(),
        Demo::Simple => simple_graph::build_graph()?.draw_mermaid(),
        Demo::Rag => agentic_rag::build_graph(
            Arc::new(StaticRetriever::sample()),
            config.max_rewrites,
        )?
        .draw_mermaid(),
    };
    Ok(text)
}
