//! Agentic RAG: the agent decides to retrieve, documents are graded, and the
//! question is either answered or rewritten and retried.
//!
//! ```text
//! START -> agent -(tools_condition)-> retrieve | END
//! retrieve -(grade_documents: yes/no)-> generate | rewrite
//! rewrite -> agent
//! generate -> END
//! ```
//!
//! The retriever is injected through the [`Retriever`] trait; [`StaticRetriever`]
//! serves canned documents.

mod nodes;
mod retriever;
mod state;

use std::sync::Arc;

use stepgraph::{CompilationError, CompiledStateGraph, StateGraph, END, START};

pub use nodes::{
    generate, grade_documents, keywords, relevant_documents, rewrite_question, tools_condition,
    AgentNode, RetrieveNode, RewriteNode, AGENT, GENERATE, NOT_RELEVANT, RELEVANT, RETRIEVE,
    REWRITE,
};
pub use retriever::{Retriever, RetrieverError, StaticRetriever, RETRIEVE_BLOG_POSTS};
pub use state::{Message, RagState, ToolCall};

/// Rewrites per run: the question is retrieved at most `max_rewrites + 1` times
/// before the agent gives up.
pub const DEFAULT_MAX_REWRITES: u32 = 2;

/// Uncompiled agentic RAG graph over `retriever`.
pub fn builder(retriever: Arc<dyn Retriever>, max_rewrites: u32) -> StateGraph<RagState> {
    let agent = AgentNode::new(retriever.name());
    let mut graph = StateGraph::new();
    graph
        .add_node(AGENT, Arc::new(agent))
        .add_node(RETRIEVE, Arc::new(RetrieveNode::new(retriever)))
        .add_node(REWRITE, Arc::new(RewriteNode::new(max_rewrites)))
        .add_fn_node(GENERATE, generate);
    graph
        .add_edge(START, AGENT)
        .add_conditional_edges(AGENT, tools_condition, [RETRIEVE, END])
        .add_conditional_edges_with_map(
            RETRIEVE,
            grade_documents,
            [(RELEVANT, GENERATE), (NOT_RELEVANT, REWRITE)],
        )
        .add_edge(REWRITE, AGENT)
        .add_edge(GENERATE, END);
    graph
}

/// Compiled agentic RAG graph.
pub fn build_graph(
    retriever: Arc<dyn Retriever>,
    max_rewrites: u32,
) -> Result<CompiledStateGraph<RagState>, CompilationError> {
    builder(retriever, max_rewrites).compile()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use stepgraph::{RunError, RunnableConfig};

    fn path(graph: &CompiledStateGraph<RagState>, question: &str) -> (Vec<String>, RagState) {
        let mut steps = graph.stream(RagState::new(question), StepRng::new(0, 0));
        let ids = steps.by_ref().map(|u| u.unwrap().node_id).collect();
        (ids, steps.into_state().unwrap())
    }

    /// **Scenario**: A question matching the documents goes straight to generate.
    #[test]
    fn relevant_question_is_answered_without_rewrite() {
        let graph = build_graph(Arc::new(StaticRetriever::sample()), DEFAULT_MAX_REWRITES).unwrap();
        let (ids, state) = path(&graph, "How does prompt engineering work?");
        assert_eq!(ids, vec![AGENT, RETRIEVE, GENERATE]);
        assert_eq!(state.rewrites, 0);
        assert!(state.final_answer().unwrap().contains("Prompt engineering"));
    }

    /// **Scenario**: A plural keyword misses, the rewrite singularizes it, the retry is answered.
    #[test]
    fn rewrite_loop_recovers() {
        let graph = build_graph(Arc::new(StaticRetriever::sample()), DEFAULT_MAX_REWRITES).unwrap();
        let (ids, state) = path(&graph, "What are agents?");
        assert_eq!(
            ids,
            vec![AGENT, RETRIEVE, REWRITE, AGENT, RETRIEVE, GENERATE]
        );
        assert_eq!(state.rewrites, 1);
        assert_eq!(state.question, "agent");
        assert!(state.final_answer().unwrap().starts_with("Based on 1 document(s)"));
    }

    fn irrelevant_graph(max_rewrites: u32) -> CompiledStateGraph<RagState> {
        let retriever = Arc::new(StaticRetriever::new("docs", ["unrelated text"]));
        build_graph(retriever, max_rewrites).unwrap()
    }

    /// **Scenario**: Irrelevant documents exhaust the rewrites and the agent ends the run.
    #[test]
    fn agent_gives_up_when_nothing_matches() {
        let (ids, state) = path(&irrelevant_graph(1), "memory");
        assert_eq!(
            ids,
            vec![AGENT, RETRIEVE, REWRITE, AGENT, RETRIEVE, REWRITE, AGENT]
        );
        assert_eq!(state.rewrites, 1);
        assert!(state.final_answer().unwrap().contains("could not find"));
    }

    /// **Scenario**: A budget of zero never rewrites; a budget of N rewrites exactly N times.
    #[test]
    fn rewrite_budget_is_exact() {
        for max_rewrites in [0, 2] {
            let (ids, state) = path(&irrelevant_graph(max_rewrites), "memory");
            let retrievals = ids.iter().filter(|id| *id == RETRIEVE).count();
            assert_eq!(state.rewrites, max_rewrites);
            assert_eq!(retrievals, max_rewrites as usize + 1);
            assert_eq!(ids.last().map(String::as_str), Some(AGENT));
        }
        let (ids, _) = path(&irrelevant_graph(0), "memory");
        assert_eq!(ids, vec![AGENT, RETRIEVE, REWRITE, AGENT]);
    }

    #[test]
    fn empty_question_ends_immediately() {
        let graph = build_graph(Arc::new(StaticRetriever::sample()), DEFAULT_MAX_REWRITES).unwrap();
        let (ids, state) = path(&graph, "   ");
        assert_eq!(ids, vec![AGENT]);
        assert_eq!(state.final_answer(), Some("Please ask a question."));
    }

    /// **Scenario**: The rewrite cycle is cut by the recursion limit.
    #[test]
    fn recursion_limit_cuts_rewrite_cycle() {
        let retriever = Arc::new(StaticRetriever::new("docs", ["unrelated text"]));
        let graph = build_graph(retriever, 100).unwrap();
        let config = RunnableConfig::seeded(0).with_recursion_limit(5);
        match graph.invoke_with_config(RagState::new("memory"), &config) {
            Err(RunError::RecursionLimit(5)) => {}
            other => panic!("expected RecursionLimit(5), got {:?}", other),
        }
    }

    #[test]
    fn mermaid_shows_grade_labels() {
        let graph = build_graph(Arc::new(StaticRetriever::sample()), DEFAULT_MAX_REWRITES).unwrap();
        let text = graph.draw_mermaid();
        assert!(text.contains("\tretrieve -. &nbsp;yes&nbsp; .-> generate;\n"));
        assert!(text.contains("\tretrieve -. &nbsp;no&nbsp; .-> rewrite;\n"));
        assert!(text.contains("\tagent -.-> retrieve;\n"));
        assert!(text.contains("\trewrite --> agent;\n"));
    }
}
