//! Coffee order: take the order, add milk or sugar at random, serve.
//!
//! ```text
//! START -> take_order -(customization_choice)-> add_milk | add_sugar -> serve_order -> END
//! ```

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};
use stepgraph::{CompilationError, CompiledStateGraph, StateGraph, END, START};
use tracing::info;

pub const TAKE_ORDER: &str = "take_order";
pub const ADD_MILK: &str = "add_milk";
pub const ADD_SUGAR: &str = "add_sugar";
pub const SERVE_ORDER: &str = "serve_order";

/// State for the coffee order graph.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderState {
    pub order_state: String,
}

fn take_order(mut state: OrderState) -> OrderState {
    info!("📝 Taking customer order");
    state.order_state = "Customer wants coffee".into();
    state
}

fn add_milk(mut state: OrderState) -> OrderState {
    info!("🥛 Adding milk to coffee");
    state.order_state = "Coffee with milk prepared".into();
    state
}

fn add_sugar(mut state: OrderState) -> OrderState {
    info!("🧂 Adding sugar to coffee");
    state.order_state = "Coffee with sugar prepared".into();
    state
}

fn serve_order(mut state: OrderState) -> OrderState {
    info!("☕ Serving the coffee");
    state.order_state = "Order completed".into();
    state
}

/// Milk when the draw is above one half, sugar otherwise.
pub fn customization_choice(_state: &OrderState, rng: &mut dyn RngCore) -> String {
    let choice = if rng.gen::<f64>() > 0.5 {
        ADD_MILK
    } else {
        ADD_SUGAR
    };
    choice.to_string()
}

/// Uncompiled coffee order graph.
pub fn builder() -> StateGraph<OrderState> {
    let mut graph = StateGraph::new();
    graph
        .add_fn_node(TAKE_ORDER, take_order)
        .add_fn_node(ADD_MILK, add_milk)
        .add_fn_node(ADD_SUGAR, add_sugar)
        .add_fn_node(SERVE_ORDER, serve_order);
    graph
        .add_edge(START, TAKE_ORDER)
        .add_conditional_edges(TAKE_ORDER, customization_choice, [ADD_MILK, ADD_SUGAR])
        .add_edge(ADD_MILK, SERVE_ORDER)
        .add_edge(ADD_SUGAR, SERVE_ORDER)
        .add_edge(SERVE_ORDER, END);
    graph
}

/// Compiled coffee order graph.
pub fn build_graph() -> Result<CompiledStateGraph<OrderState>, CompilationError> {
    builder().compile()
}
