//! CLI entry point for the `gconv` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use graph_convert::cli::commands::{self, InputKind};
use graph_convert::GraphError;

#[derive(Parser)]
#[command(
    name = "gconv",
    about = "Convert graphs between adjacency-list and adjacency-matrix form"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Parse weights as real numbers instead of integers
    #[arg(long)]
    real: bool,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a matrix text file to an adjacency list
    ToList {
        /// Path to the matrix text file
        file: PathBuf,
    },
    /// Convert a JSON adjacency list to a matrix
    ToMatrix {
        /// Path to the JSON adjacency list
        file: PathBuf,
    },
    /// Print the graph in Graphviz DOT syntax
    Dot {
        /// Path to the graph file
        file: PathBuf,
        /// Input representation: matrix or list (guessed from the extension if omitted)
        #[arg(long)]
        input: Option<String>,
    },
    /// Display vertex and edge counts
    Info {
        /// Path to the graph file
        file: PathBuf,
        /// Input representation: matrix or list (guessed from the extension if omitted)
        #[arg(long)]
        input: Option<String>,
    },
}

fn input_kind(input: Option<String>, file: &std::path::Path) -> InputKind {
    match input {
        Some(name) => match InputKind::from_name(&name) {
            Some(kind) => kind,
            None => {
                eprintln!("Invalid input type: {}", name);
                process::exit(3);
            }
        },
        None => InputKind::from_path(file),
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let json = match cli.format.as_str() {
        "json" => true,
        "text" => false,
        other => {
            eprintln!("Invalid output format: {}", other);
            process::exit(3);
        }
    };

    let result = match cli.command {
        Commands::ToList { file } => {
            if cli.real {
                commands::cmd_to_list::<f64>(&file, json)
            } else {
                commands::cmd_to_list::<i64>(&file, json)
            }
        }
        Commands::ToMatrix { file } => {
            if cli.real {
                commands::cmd_to_matrix::<f64>(&file, json)
            } else {
                commands::cmd_to_matrix::<i64>(&file, json)
            }
        }
        Commands::Dot { file, input } => {
            let kind = input_kind(input, &file);
            if cli.real {
                commands::cmd_dot::<f64>(&file, kind)
            } else {
                commands::cmd_dot::<i64>(&file, kind)
            }
        }
        Commands::Info { file, input } => {
            let kind = input_kind(input, &file);
            if cli.real {
                commands::cmd_info::<f64>(&file, kind, json)
            } else {
                commands::cmd_info::<i64>(&file, kind, json)
            }
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Parse { .. } | GraphError::Json(_) => 2,
            GraphError::OutOfRangeIndex { .. }
            | GraphError::NonSquareMatrix { .. }
            | GraphError::VertexOutOfRange { .. } => 4,
        };
        process::exit(code);
    }
}
