//! Configuration System
//!
//! Layered configuration for document comparison: built-in defaults, the global
//! config file, the workspace `domdiff.toml`, then `DOMDIFF__*` environment
//! variables. CLI flags are applied on top by the binary.

use crate::diff::DEFAULT_ROOT_LABEL;
use crate::error::DomDiffError;
use crate::logging::LoggingConfig;
use crate::tree::BuilderConfig;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomDiffConfig {
    /// Documents compared when no paths are given on the command line
    #[serde(default)]
    pub input: InputConfig,

    /// Report destination
    #[serde(default)]
    pub output: OutputConfig,

    /// Tree normalization settings
    #[serde(default)]
    pub tree: BuilderConfig,

    /// Diff settings
    #[serde(default)]
    pub diff: DiffConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_first_input")]
    pub first: PathBuf,
    #[serde(default = "default_second_input")]
    pub second: PathBuf,
}

fn default_first_input() -> PathBuf {
    PathBuf::from("dom1.html")
}

fn default_second_input() -> PathBuf {
    PathBuf::from("dom2.html")
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            first: default_first_input(),
            second: default_second_input(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Pretty-print the JSON report with two-space indentation
    #[serde(default = "default_true")]
    pub pretty: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            pretty: default_true(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiffConfig {
    /// Label of the root breadcrumb in difference paths
    #[serde(default = "default_root_label")]
    pub root_label: String,
}

fn default_root_label() -> String {
    DEFAULT_ROOT_LABEL.to_string()
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            root_label: default_root_label(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Input(String),
    Output(String),
    Tree(String),
    Diff(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::Input(msg) => write!(f, "Input: {}", msg),
            ValidationError::Output(msg) => write!(f, "Output: {}", msg),
            ValidationError::Tree(msg) => write!(f, "Tree: {}", msg),
            ValidationError::Diff(msg) => write!(f, "Diff: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl DomDiffConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if self.input.first.as_os_str().is_empty() || self.input.second.as_os_str().is_empty() {
            errors.push(ValidationError::Input(
                "Input paths cannot be empty".to_string(),
            ));
        }

        if self.output.path.as_os_str().is_empty() {
            errors.push(ValidationError::Output(
                "Output path cannot be empty".to_string(),
            ));
        }

        if self.tree.root_tag.trim().is_empty() {
            errors.push(ValidationError::Tree("Root tag cannot be empty".to_string()));
        } else if self.tree.is_pruned(&self.tree.root_tag) {
            errors.push(ValidationError::Tree(format!(
                "Root tag '{}' cannot also be pruned",
                self.tree.root_tag
            )));
        }

        if self.diff.root_label.is_empty() {
            errors.push(ValidationError::Diff(
                "Root label cannot be empty".to_string(),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding every problem into one configuration error.
    pub fn ensure_valid(&self) -> Result<(), DomDiffError> {
        self.validate().map_err(|errors| {
            let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            DomDiffError::Config(format!(
                "Configuration validation failed:\n{}",
                error_msgs.join("\n")
            ))
        })
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> Result<String, DomDiffError> {
        toml::to_string_pretty(self).map_err(|e| DomDiffError::Config(e.to_string()))
    }
}
