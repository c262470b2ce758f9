//! Mermaid flowchart rendering for compiled graphs.
//!
//! Fixed edges are drawn solid, conditional edges dotted; a conditional edge whose
//! label differs from its target carries the label.

use std::fmt::Write as _;

use super::compiled::{CompiledStateGraph, Edge};
use super::{END, START};

fn node_line(id: &str) -> String {
    match id {
        START => format!("\t{}([<p>{}</p>]):::first\n", id, id),
        END => format!("\t{}([<p>{}</p>]):::last\n", id, id),
        _ => format!("\t{}({})\n", id, id),
    }
}

impl<S> CompiledStateGraph<S> {
    /// Renders the graph as a Mermaid `graph TD` flowchart.
    ///
    /// Output is deterministic: nodes in registration order between START and END,
    /// edges grouped by source in the same order, conditional targets by label.
    pub fn draw_mermaid(&self) -> String {
        let mut out = String::from("graph TD;\n");
        out.push_str(&node_line(START));
        for id in &self.node_order {
            out.push_str(&node_line(id));
        }
        out.push_str(&node_line(END));

        let sources = std::iter::once(START).chain(self.node_order.iter().map(String::as_str));
        for from in sources {
            match self.edges.get(from) {
                Some(Edge::Fixed(to)) => {
                    let _ = writeln!(out, "\t{} --> {};", from, to);
                }
                Some(Edge::Conditional(branch)) => {
                    for (label, to) in branch.path_map() {
                        if label == to {
                            let _ = writeln!(out, "\t{} -.-> {};", from, to);
                        } else {
                            let _ = writeln!(
                                out,
                                "\t{} -. &nbsp;{}&nbsp; .-> {};",
                                from, label, to
                            );
                        }
                    }
                }
                None => {}
            }
        }

        out.push_str("\tclassDef default fill:#f2f0ff,line-height:1.2\n");
        out.push_str("\tclassDef first fill-opacity:0\n");
        out.push_str("\tclassDef last fill:#bfb6fc\n");
        out
    }
}
