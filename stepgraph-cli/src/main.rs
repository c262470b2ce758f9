//! Demo runner binary: parses the command line, runs a demo graph and prints the result.

use clap::Parser;
use stepgraph_cli::{config_with_options, draw_mermaid, run_with_config, Demo, Error, RunOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "stepgraph")]
#[command(about = "Run a demo state graph: coffee order, simple graph or agentic RAG")]
struct Args {
    /// Demo to run (defaults to STEPGRAPH_DEMO, then coffee)
    #[arg(value_enum)]
    demo: Option<Demo>,

    /// Seed for conditional branching; omit for a random run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Maximum number of node runs
    #[arg(long, value_name = "N")]
    recursion_limit: Option<usize>,

    /// Question for the rag demo
    #[arg(short, long, value_name = "TEXT")]
    question: Option<String>,

    /// Rewrites the rag agent may attempt before giving up
    #[arg(long, value_name = "N")]
    max_rewrites: Option<u32>,

    /// Print the graph as a Mermaid flowchart instead of running it
    #[arg(long)]
    mermaid: bool,

    /// Log node enter/exit and graph events to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn run_options(&self) -> RunOptions {
        RunOptions {
            demo: self.demo,
            seed: self.seed,
            recursion_limit: self.recursion_limit,
            question: self.question.clone(),
            max_rewrites: self.max_rewrites,
            verbose: self.verbose,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "info,stepgraph=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(args: &Args) -> Result<(), Error> {
    let config = config_with_options(&args.run_options())?;
    if args.mermaid {
        println!("{}", draw_mermaid(&config)?);
        return Ok(());
    }

    let report = run_with_config(&config)?;
    println!("Demo: {}", report.demo);
    println!("Path: {}", report.path.join(" -> "));
    println!("---");
    println!("{}", serde_json::to_string_pretty(&report.final_state)?);
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = execute(&args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
