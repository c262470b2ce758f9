//! Retriever seam for the RAG graph.
//!
//! The retriever is an external collaborator: this module only defines the call
//! contract and a canned implementation for demos and tests.

use thiserror::Error;

/// Error returned by a retriever.
#[derive(Debug, Error)]
pub enum RetrieverError {
    /// The retriever could not answer the query.
    #[error("retrieval failed: {0}")]
    Failed(String),
}

/// Looks up documents for a query. Exposed to the agent as a tool named `name()`.
pub trait Retriever: Send + Sync {
    /// Tool name the agent uses to call this retriever.
    fn name(&self) -> &str;

    fn retrieve(&self, query: &str) -> Result<Vec<String>, RetrieverError>;
}

/// Returns the same documents for every query.
#[derive(Clone, Debug)]
pub struct StaticRetriever {
    name: String,
    documents: Vec<String>,
}

/// Tool name of [`StaticRetriever::sample`].
pub const RETRIEVE_BLOG_POSTS: &str = "retrieve_blog_posts";

impl StaticRetriever {
    pub fn new<I, T>(name: impl Into<String>, documents: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            name: name.into(),
            documents: documents.into_iter().map(Into::into).collect(),
        }
    }

    /// Canned blog-post excerpts about agents, prompt engineering and adversarial attacks.
    pub fn sample() -> Self {
        Self::new(
            RETRIEVE_BLOG_POSTS,
            [
                "In a LLM-powered autonomous agent system, LLM functions as the agent's brain, \
                 complemented by planning, memory and tool use.",
                "Prompt engineering refers to methods for how to communicate with LLM to steer its \
                 behavior for desired outcomes without updating the model weights.",
                "Adversarial attacks or jailbreak prompts could potentially trigger the model to \
                 output something undesired.",
            ],
        )
    }
}

impl Retriever for StaticRetriever {
    fn name(&self) -> &str {
        &self.name
    }

    fn retrieve(&self, _query: &str) -> Result<Vec<String>, RetrieverError> {
        Ok(self.documents.clone())
    }
}
