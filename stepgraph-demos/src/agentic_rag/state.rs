//! State for the agentic RAG graph: conversation, pending tool call, retrieved documents.

use serde::{Deserialize, Serialize};

/// A single message in the conversation.
///
/// Roles match LangGraph: system prompt, user input, assistant reply, plus the
/// output of a tool call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", content = "content", rename_all = "snake_case")]
pub enum Message {
    System(String),
    User(String),
    Assistant(String),
    Tool(String),
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self::System(content.into())
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::User(content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant(content.into())
    }

    pub fn tool(content: impl Into<String>) -> Self {
        Self::Tool(content.into())
    }
}

/// A tool call requested by the agent node, executed by the retrieve node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    pub name: String,
    pub query: String,
}

/// State threaded through the agentic RAG graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RagState {
    pub messages: Vec<Message>,
    /// Current form of the question; replaced by the rewrite node.
    pub question: String,
    /// Set by the agent when it wants the retriever; consumed by the retrieve node.
    #[serde(default)]
    pub tool_call: Option<ToolCall>,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub rewrites: u32,
}

impl RagState {
    /// Initial state for a user question.
    pub fn new(question: impl Into<String>) -> Self {
        let question = question.into();
        Self {
            messages: vec![Message::user(question.clone())],
            question,
            ..Default::default()
        }
    }

    /// Content of the last assistant message, if any.
    pub fn final_answer(&self) -> Option<&str> {
        self.messages.iter().rev().find_map(|m| match m {
            Message::Assistant(s) => Some(s.as_str()),
            _ => None,
        })
    }
}
