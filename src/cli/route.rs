//! CLI route: single route table and run context. Dispatches to tree, report and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{format_comparison_text, format_hash_lines};
use crate::config::{ConfigLoader, DomDiffConfig};
use crate::error::DomDiffError;
use crate::report::{compare_files, CompareOptions};
use crate::tree::TreeBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, info_span};

/// What a command printed and the process status it asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub output: String,
    pub exit_code: i32,
}

impl CommandOutcome {
    fn success(output: String) -> Self {
        Self {
            output,
            exit_code: 0,
        }
    }
}

/// Runtime context for CLI execution: workspace root and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: DomDiffConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, DomDiffError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&workspace_root)?
        };
        Self::with_config(workspace_root, config)
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: DomDiffConfig) -> Result<Self, DomDiffError> {
        config.ensure_valid()?;
        Ok(Self {
            workspace_root,
            config,
        })
    }

    pub fn config(&self) -> &DomDiffConfig {
        &self.config
    }

    /// Execute a command and return its outcome.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutcome, DomDiffError> {
        let span = info_span!("command", command = command_name(command));
        let _guard = span.enter();

        match command {
            Commands::Compare {
                first,
                second,
                output,
                format,
                exit_code,
                compact,
            } => {
                let first = first
                    .clone()
                    .unwrap_or_else(|| self.resolve(&self.config.input.first));
                let second = second
                    .clone()
                    .unwrap_or_else(|| self.resolve(&self.config.input.second));

                let options = CompareOptions::from_config(&self.config);
                let report = compare_files(&first, &second, &options)?;
                let status = if *exit_code && !report.is_identical() { 1 } else { 0 };

                let text = match format {
                    OutputFormat::Json => {
                        let output_path = output
                            .clone()
                            .unwrap_or_else(|| self.resolve(&self.config.output.path));
                        let pretty = self.config.output.pretty && !compact;
                        report.write_to(&output_path, pretty)?;
                        format!("Output saved to {}", output_path.display())
                    }
                    OutputFormat::Text => format_comparison_text(&report, &first, &second),
                };

                Ok(CommandOutcome {
                    output: text,
                    exit_code: status,
                })
            }
            Commands::Hash { files } => {
                let builder = self.builder();
                let mut entries = Vec::with_capacity(files.len());
                for file in files {
                    let tree = builder.build_from_file(file)?;
                    entries.push((tree.compute_hash(), file.as_path()));
                }
                Ok(CommandOutcome::success(format_hash_lines(&entries)))
            }
            Commands::Tree { file, compact } => {
                let tree = self.builder().build_from_file(file)?;
                let json = if *compact {
                    serde_json::to_string(&tree)?
                } else {
                    serde_json::to_string_pretty(&tree)?
                };
                Ok(CommandOutcome::success(json))
            }
            Commands::Config => Ok(CommandOutcome::success(self.config.to_toml()?)),
        }
    }

    fn builder(&self) -> TreeBuilder {
        TreeBuilder::with_config(self.config.tree.clone())
    }

    /// Config-supplied paths are relative to the workspace root.
    fn resolve(&self, path: &Path) -> PathBuf {
        let resolved = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.workspace_root.join(path)
        };
        debug!(path = %resolved.display(), "Resolved configured path");
        resolved
    }
}
