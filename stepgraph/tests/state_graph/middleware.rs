//! compile_with_middleware and with_middleware().compile(): middleware wraps every node run.

use std::sync::{Arc, Mutex};

use rand::rngs::mock::StepRng;
use stepgraph::{NodeMiddleware, StepError};

use crate::common::{diamond_graph, TrailState};

/// Records node ids it wrapped, in order.
#[derive(Default)]
struct Recorder {
    seen: Mutex<Vec<String>>,
}

impl NodeMiddleware<TrailState> for Recorder {
    fn around_run(
        &self,
        node_id: &str,
        state: TrailState,
        inner: &dyn Fn(TrailState) -> Result<TrailState, StepError>,
    ) -> Result<TrailState, StepError> {
        self.seen.lock().unwrap().push(node_id.to_string());
        inner(state)
    }
}

/// Replaces any node's output with an error.
struct Veto;

impl NodeMiddleware<TrailState> for Veto {
    fn around_run(
        &self,
        node_id: &str,
        state: TrailState,
        inner: &dyn Fn(TrailState) -> Result<TrailState, StepError>,
    ) -> Result<TrailState, StepError> {
        inner(state)?;
        Err(StepError::ExecutionFailed(format!("vetoed {}", node_id)))
    }
}

#[test]
fn compile_with_middleware_wraps_each_node() {
    let recorder = Arc::new(Recorder::default());
    let graph = diamond_graph()
        .compile_with_middleware(recorder.clone())
        .expect("graph compiles");
    let out = graph
        .invoke(TrailState::default(), &mut StepRng::new(u64::MAX, 0))
        .unwrap();
    assert_eq!(out.trail, vec!["a", "b", "d"]);
    assert_eq!(*recorder.seen.lock().unwrap(), vec!["a", "b", "d"]);
}

#[test]
fn with_middleware_then_compile_wraps_each_node() {
    let recorder = Arc::new(Recorder::default());
    let graph = diamond_graph()
        .with_middleware(recorder.clone())
        .compile()
        .expect("graph compiles");
    graph
        .invoke(TrailState::default(), &mut StepRng::new(0, 0))
        .unwrap();
    assert_eq!(*recorder.seen.lock().unwrap(), vec!["a", "c", "d"]);
}

#[test]
fn middleware_error_aborts_run() {
    let graph = diamond_graph()
        .compile_with_middleware(Arc::new(Veto))
        .expect("graph compiles");
    match graph.invoke(TrailState::default(), &mut StepRng::new(0, 0)) {
        Err(stepgraph::RunError::Step { node_id, source }) => {
            assert_eq!(node_id, "a");
            assert!(source.to_string().contains("vetoed a"));
        }
        other => panic!("expected Step error, got {:?}", other),
    }
}
