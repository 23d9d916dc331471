//! CLI domain: parse, route, help, output, and presentation only.
//! No comparison logic; the route table dispatches to the tree, diff and report modules.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{format_comparison_text, format_hash_lines};
pub use route::{CommandOutcome, RunContext};
