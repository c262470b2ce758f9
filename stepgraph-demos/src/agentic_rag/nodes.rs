//! Nodes and decision functions of the agentic RAG graph.
//!
//! Question handling is deterministic placeholder logic (keyword overlap, keyword
//! rewrite); there is no model behind any of it.

use std::sync::Arc;

use rand::RngCore;
use stepgraph::{Node, StepError, END};
use tracing::{debug, info};

use super::retriever::Retriever;
use super::state::{Message, RagState, ToolCall};

pub const AGENT: &str = "agent";
pub const RETRIEVE: &str = "retrieve";
pub const REWRITE: &str = "rewrite";
pub const GENERATE: &str = "generate";

/// Labels returned by [`grade_documents`].
pub const RELEVANT: &str = "yes";
pub const NOT_RELEVANT: &str = "no";

const STOPWORDS: &[&str] = &[
    "what", "which", "when", "where", "does", "about", "that", "this", "with", "from", "have",
    "there", "their", "they", "them", "were", "been", "will", "would", "could", "should", "into",
    "your",
];

/// Lowercased words of four or more characters, minus stopwords, in order.
pub fn keywords(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .map(str::to_lowercase)
        .filter(|w| w.chars().count() >= 4 && !STOPWORDS.contains(&w.as_str()))
        .collect()
}

fn singular(word: &str) -> &str {
    match word.strip_suffix('s') {
        Some(stem) if stem.chars().count() >= 4 && !stem.ends_with('s') => stem,
        _ => word,
    }
}

/// Reduces a question to its singular keywords.
pub fn rewrite_question(question: &str) -> String {
    keywords(question)
        .iter()
        .map(|w| singular(w))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Documents sharing at least one keyword with `question`.
pub fn relevant_documents<'a>(question: &str, documents: &'a [String]) -> Vec<&'a str> {
    let keys = keywords(question);
    documents
        .iter()
        .filter(|d| {
            let d = d.to_lowercase();
            keys.iter().any(|k| d.contains(k.as_str()))
        })
        .map(String::as_str)
        .collect()
}

/// Routes to the retriever when the agent left a tool call, else ends the run.
pub fn tools_condition(state: &RagState, _rng: &mut dyn RngCore) -> String {
    if state.tool_call.is_some() {
        RETRIEVE.to_string()
    } else {
        END.to_string()
    }
}

/// Grades the retrieved documents against the current question: `yes` or `no`.
pub fn grade_documents(state: &RagState, _rng: &mut dyn RngCore) -> String {
    let relevant = relevant_documents(&state.question, &state.documents);
    debug!(
        relevant = relevant.len(),
        total = state.documents.len(),
        "graded documents"
    );
    if relevant.is_empty() {
        info!("📉 Documents not relevant");
        NOT_RELEVANT.to_string()
    } else {
        info!("📈 Documents relevant");
        RELEVANT.to_string()
    }
}

/// Decides whether to call the retriever for the current question.
///
/// Gives up (no tool call, assistant apology) when the last message is an
/// unanswered tool result, i.e. the documents were graded irrelevant and
/// [`RewriteNode`] had no budget left to rephrase the question.
pub struct AgentNode {
    tool_name: String,
}

impl AgentNode {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
        }
    }
}

impl Node<RagState> for AgentNode {
    fn id(&self) -> &str {
        AGENT
    }

    fn run(&self, mut state: RagState) -> Result<RagState, StepError> {
        state.tool_call = None;
        if state.question.trim().is_empty() {
            info!("🤖 Agent: nothing to look up");
            state.messages.push(Message::assistant("Please ask a question."));
        } else if matches!(state.messages.last(), Some(Message::Tool(_))) {
            info!(rewrites = state.rewrites, "🤖 Agent: giving up");
            state.messages.push(Message::assistant(format!(
                "I could not find documents relevant to: {}",
                state.question
            )));
        } else {
            info!(tool = %self.tool_name, query = %state.question, "🤖 Agent: calling retriever");
            state.messages.push(Message::assistant(format!(
                "Calling {} with query: {}",
                self.tool_name, state.question
            )));
            state.tool_call = Some(ToolCall {
                name: self.tool_name.clone(),
                query: state.question.clone(),
            });
        }
        Ok(state)
    }
}

/// Executes the agent's pending tool call against the retriever.
pub struct RetrieveNode {
    retriever: Arc<dyn Retriever>,
}

impl RetrieveNode {
    pub fn new(retriever: Arc<dyn Retriever>) -> Self {
        Self { retriever }
    }
}

impl Node<RagState> for RetrieveNode {
    fn id(&self) -> &str {
        RETRIEVE
    }

    fn run(&self, mut state: RagState) -> Result<RagState, StepError> {
        let call = state
            .tool_call
            .take()
            .ok_or_else(|| StepError::ExecutionFailed("no pending tool call".into()))?;
        if call.name != self.retriever.name() {
            return Err(StepError::ExecutionFailed(format!(
                "unknown tool: {}",
                call.name
            )));
        }
        let documents = self
            .retriever
            .retrieve(&call.query)
            .map_err(|e| StepError::ExecutionFailed(e.to_string()))?;
        info!(tool = %call.name, count = documents.len(), "🔍 Retrieved documents");
        state.messages.push(Message::tool(documents.join("\n\n")));
        state.documents = documents;
        Ok(state)
    }
}

/// Replaces the question with its keyword form and drops stale documents.
///
/// Rewrites at most `max_rewrites` times per run; after that the state passes
/// through unchanged and the agent ends the run.
pub struct RewriteNode {
    max_rewrites: u32,
}

impl RewriteNode {
    pub fn new(max_rewrites: u32) -> Self {
        Self { max_rewrites }
    }
}

impl Node<RagState> for RewriteNode {
    fn id(&self) -> &str {
        REWRITE
    }

    fn run(&self, mut state: RagState) -> Result<RagState, StepError> {
        if state.rewrites >= self.max_rewrites {
            info!(rewrites = state.rewrites, "✏️ Rewrite budget spent");
            return Ok(state);
        }
        let question = rewrite_question(&state.question);
        info!(from = %state.question, to = %question, "✏️ Rewriting question");
        state.rewrites += 1;
        state.documents.clear();
        state.messages.push(Message::user(question.clone()));
        state.question = question;
        Ok(state)
    }
}

/// Answers from the documents that match the question.
pub fn generate(mut state: RagState) -> RagState {
    let answer = {
        let relevant = relevant_documents(&state.question, &state.documents);
        if relevant.is_empty() {
            format!("No context available for: {}", state.question)
        } else {
            format!("Based on {} document(s): {}", relevant.len(), relevant.join(" "))
        }
    };
    info!("📝 Generating answer");
    state.messages.push(Message::assistant(answer));
    state
}
