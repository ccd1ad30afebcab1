//! CLI entry point for the `egraph` command-line tool.

use std::io;
use std::process;

use clap::{Parser, Subcommand};

use edge_graph::cli::{commands, parse_edge_list, OutputFormat, DEMO_EDGE_LIST};
use edge_graph::graph::TraversalOrder;
use edge_graph::render::{LogSink, WriteSink};
use edge_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "egraph",
    about = "Edge-list graph tool — traversal and adjacency rendering"
)]
struct Cli {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable info-level logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the fixed demo graph and report on it
    Demo {
        /// Send report lines to the log instead of stdout
        #[arg(long)]
        log: bool,
    },
    /// Show order, size and vertices
    Info {
        /// Edge list, e.g. "1-5,5-2"; use "A:B" for labels starting with "-"
        #[arg(long, default_value = DEMO_EDGE_LIST)]
        edges: String,
    },
    /// List vertices adjacent to a vertex
    Adjacent {
        /// Vertex label
        vertex: String,
        /// Edge list, e.g. "1-5,5-2"; use "A:B" for labels starting with "-"
        #[arg(long, default_value = DEMO_EDGE_LIST)]
        edges: String,
    },
    /// Breadth-first traversal from a start vertex
    Bfs {
        /// Start vertex label
        start: String,
        /// Edge list, e.g. "1-5,5-2"; use "A:B" for labels starting with "-"
        #[arg(long, default_value = DEMO_EDGE_LIST)]
        edges: String,
    },
    /// Depth-first traversal from a start vertex
    Dfs {
        /// Start vertex label
        start: String,
        /// Edge list, e.g. "1-5,5-2"; use "A:B" for labels starting with "-"
        #[arg(long, default_value = DEMO_EDGE_LIST)]
        edges: String,
    },
    /// Print the adjacency list
    List {
        /// Edge list, e.g. "1-5,5-2"; use "A:B" for labels starting with "-"
        #[arg(long, default_value = DEMO_EDGE_LIST)]
        edges: String,
    },
    /// Print the adjacency matrix
    Matrix {
        /// Edge list, e.g. "1-5,5-2"; use "A:B" for labels starting with "-"
        #[arg(long, default_value = DEMO_EDGE_LIST)]
        edges: String,
    },
}

fn run(command: Commands, json: bool) -> Result<(), GraphError> {
    let stdout = io::stdout();
    let mut out = WriteSink::new(stdout.lock());

    let load = |edges: &str| parse_edge_list(edges).map(commands::load_graph);

    match command {
        Commands::Demo { log } => {
            if log {
                let mut sink = LogSink::new("egraph");
                commands::cmd_demo(&mut sink, json)
            } else {
                commands::cmd_demo(&mut out, json)
            }
        }
        Commands::Info { edges } => commands::cmd_info(&load(&edges)?, &mut out, json),
        Commands::Adjacent { vertex, edges } => {
            commands::cmd_adjacent(&load(&edges)?, &vertex, &mut out, json)
        }
        Commands::Bfs { start, edges } => commands::cmd_traverse(
            &load(&edges)?,
            &start,
            TraversalOrder::Breadth,
            &mut out,
            json,
        ),
        Commands::Dfs { start, edges } => commands::cmd_traverse(
            &load(&edges)?,
            &start,
            TraversalOrder::Depth,
            &mut out,
            json,
        ),
        Commands::List { edges } => commands::cmd_list(&load(&edges)?, &mut out, json),
        Commands::Matrix { edges } => commands::cmd_matrix(&load(&edges)?, &mut out, json),
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format.is_json();

    // Demo lines routed to the log are emitted at info level.
    let wants_info = cli.verbose || matches!(cli.command, Commands::Demo { log: true });
    let default_level = if wants_info { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    if let Err(e) = run(cli.command, json) {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidEdge(_) | GraphError::EmptyVertex => 3,
            GraphError::MissingFormatter => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
