//! Which demo graph to run.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;

/// Demo graph selector; parsed from the CLI positional or `STEPGRAPH_DEMO`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Demo {
    /// take_order → add_milk | add_sugar → serve_order
    #[default]
    Coffee,
    /// node1 → node2 | node3
    Simple,
    /// agent → retrieve → generate | rewrite → agent
    Rag,
}

impl Demo {
    pub fn as_str(&self) -> &'static str {
        match self {
            Demo::Coffee => "coffee",
            Demo::Simple => "simple",
            Demo::Rag => "rag",
        }
    }
}

impl fmt::Display for Demo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Demo {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "coffee" | "coffee_order" => Ok(Demo::Coffee),
            "simple" | "simple_graph" => Ok(Demo::Simple),
            "rag" | "agentic_rag" => Ok(Demo::Rag),
            other => Err(format!("unknown demo: {} (expected coffee, simple or rag)", other)),
        }
    }
}
