//! CLI argument parsing for graphkit
//!
//! Global flags: --format, --config, --quiet, --verbose, --log-level,
//! --log-json, plus the graph construction flags --vertex and --edge.

pub mod args;
pub mod commands;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

use graphkit_core::format::OutputFormat;

pub use args::GraphArgs;
pub use commands::Commands;
use parse::parse_format;

/// graphkit - build in-memory graphs and run classic algorithms over them
#[derive(Parser, Debug)]
#[command(name = "graphkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Engine configuration file (defaults to the user config directory)
    #[arg(long, global = true, env = "GRAPHKIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress warnings about ignored mutations
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Debug-level logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directives (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(flatten)]
    pub graph: GraphArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
