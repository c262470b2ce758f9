//! Logging middleware that records node enter/exit around each node run.

use stepgraph::{NodeMiddleware, StepError};

/// Middleware that logs node enter/exit around each node run.
///
/// Events go through `tracing`; the binary's subscriber writes them to stderr so the
/// run report on stdout can be redirected separately.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingMiddleware;

impl<S> NodeMiddleware<S> for LoggingMiddleware {
    fn around_run(
        &self,
        node_id: &str,
        state: S,
        inner: &dyn Fn(S) -> Result<S, StepError>,
    ) -> Result<S, StepError> {
        tracing::info!(node = node_id, "enter");
        let result = inner(state);
        match &result {
            Ok(_) => tracing::info!(node = node_id, "exit"),
            Err(e) => tracing::warn!(node = node_id, error = %e, "exit with error"),
        }
        result
    }
}
