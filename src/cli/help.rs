//! CLI help and command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name recorded on the execution span (e.g. "compare", "hash").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Compare { .. } => "compare",
        Commands::Hash { .. } => "hash",
        Commands::Tree { .. } => "tree",
        Commands::Config => "config",
    }
}
