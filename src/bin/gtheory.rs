//! CLI entry point for the `gtheory` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use graph_theory::cli::commands;
use graph_theory::{GraphConfig, GraphError};

#[derive(Parser)]
#[command(
    name = "gtheory",
    about = "Shortest paths and traversals over edge-list graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the graph from and how to interpret it.
#[derive(Args)]
struct GraphArgs {
    /// Edge-list file, one `from to [weight]` per line ("-" for stdin)
    file: PathBuf,
    /// Treat edges as directed
    #[arg(long)]
    oriented: bool,
    /// Read the third column as the edge weight
    #[arg(long)]
    weighted: bool,
}

impl GraphArgs {
    fn config(&self) -> GraphConfig {
        GraphConfig::new(self.oriented, self.weighted)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Display vertex and edge counts and degrees
    Info {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Shortest distances from one vertex
    Shortest {
        #[command(flatten)]
        graph: GraphArgs,
        /// Source vertex label
        source: String,
    },
    /// Shortest distances between all pairs of vertices
    AllPairs {
        #[command(flatten)]
        graph: GraphArgs,
    },
    /// Depth-first traversal from a vertex
    Dfs {
        #[command(flatten)]
        graph: GraphArgs,
        /// Start vertex label
        start: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let result = match cli.command {
        Commands::Info { graph } => commands::cmd_info(&graph.file, graph.config(), json),
        Commands::Shortest { graph, source } => {
            commands::cmd_shortest(&graph.file, graph.config(), &source, json)
        }
        Commands::AllPairs { graph } => commands::cmd_all_pairs(&graph.file, graph.config(), json),
        Commands::Dfs { graph, start } => {
            commands::cmd_dfs(&graph.file, graph.config(), &start, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } => 2,
            GraphError::VertexNotFound(_) => 4,
            GraphError::InvalidWeight { .. } | GraphError::DistanceOverflow { .. } => 5,
        };
        process::exit(code);
    }
}
