//! CLI entry point for the `igraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use incidence_graph::cli::commands;
use incidence_graph::GraphError;

#[derive(Parser)]
#[command(
    name = "igraph",
    about = "igraph CLI: run graph algorithms on text graph descriptions"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Treat the description as a directed graph
    #[arg(long)]
    directed: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display counts, connectivity and cyclicity
    Info {
        /// Path to the graph description
        file: PathBuf,
    },
    /// Breadth-first visitation order
    Bfs {
        /// Path to the graph description
        file: PathBuf,
    },
    /// Depth-first visitation order
    Dfs {
        /// Path to the graph description
        file: PathBuf,
    },
    /// Shortest path between two declared vertex indices
    Path {
        /// Path to the graph description
        file: PathBuf,
        /// Source vertex index
        from: usize,
        /// Target vertex index
        to: usize,
    },
    /// Transitive closure of a clone of the graph
    Closure {
        /// Path to the graph description
        file: PathBuf,
    },
    /// Full report: structure, traversals, properties and closure
    Report {
        /// Path to the graph description
        file: PathBuf,
    },
    /// Export the graph as JSON
    Export {
        /// Path to the graph description
        file: PathBuf,
        /// Pretty-print JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";
    let directed = cli.directed;

    commands::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Info { file } => commands::cmd_info(&file, directed, json),
        Commands::Bfs { file } => commands::cmd_bfs(&file, directed, json),
        Commands::Dfs { file } => commands::cmd_dfs(&file, directed, json),
        Commands::Path { file, from, to } => commands::cmd_path(&file, directed, from, to, json),
        Commands::Closure { file } => commands::cmd_closure(&file, directed, json),
        Commands::Report { file } => commands::cmd_report(&file, directed),
        Commands::Export { file, pretty } => commands::cmd_export(&file, directed, pretty),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Format { .. } => 2,
            GraphError::VertexNotFound(_)
            | GraphError::EdgeNotFound(_)
            | GraphError::IndexOutOfRange { .. } => 4,
            _ => 5,
        };
        process::exit(code);
    }
}
