//! Logging utilities for graph execution.
//!
//! Structured `tracing` events for run start/end, node start/complete and errors.
//! The run loop in `compiled.rs` is the only caller.

use crate::error::RunError;

/// Log node execution start.
pub fn log_node_start(node_id: &str) {
    tracing::debug!(node_id = node_id, "Starting node execution");
}

/// Log node execution completion with the resolved next step.
pub fn log_node_complete(node_id: &str, next: &str) {
    tracing::debug!(node_id = node_id, next = next, "Node execution complete");
}

/// Log graph execution start.
pub fn log_graph_start(entry: &str) {
    tracing::info!(entry = entry, "Starting graph execution");
}

/// Log graph execution completion.
pub fn log_graph_complete(steps: usize) {
    tracing::info!(steps = steps, "Graph execution complete");
}

/// Log graph execution error.
pub fn log_graph_error(error: &RunError) {
    tracing::error!(%error, "Graph execution error");
}
