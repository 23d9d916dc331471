//! CLI parse: clap types for domdiff. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// domdiff CLI - Deterministic HTML document comparison
#[derive(Parser)]
#[command(name = "domdiff")]
#[command(about = "Compare HTML documents as normalized, hashed trees")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (config lookup and relative input paths)
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

/// Presentation of a comparison
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Write the JSON report to the output file
    Json,
    /// Print a summary and the difference records
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare two HTML documents and report their differences
    Compare {
        /// First document (default: input.first from config)
        first: Option<PathBuf>,
        /// Second document (default: input.second from config)
        second: Option<PathBuf>,
        /// Report path (default: output.path from config)
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
        /// Exit with status 1 when the documents differ
        #[arg(long)]
        exit_code: bool,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
    /// Print the tree digest of each document
    Hash {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Print the normalized tree of a document as JSON
    Tree {
        file: PathBuf,
        /// Print compact JSON
        #[arg(long)]
        compact: bool,
    },
    /// Print the effective configuration as TOML
    Config,
}
