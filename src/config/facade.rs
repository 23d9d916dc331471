//! Config loading facade: assembles sources in precedence order.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::DomDiffConfig;
use config::{ConfigError, Environment, File};
use std::path::Path;
use tracing::debug;

/// Loads [`DomDiffConfig`] from layered sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace
    ///
    /// Precedence (lowest to highest): defaults, global file, workspace
    /// `domdiff.toml`, `DOMDIFF__SECTION__KEY` environment variables.
    pub fn load(workspace_root: &Path) -> Result<DomDiffConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let config = builder
            .add_source(
                Environment::with_prefix("DOMDIFF")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        debug!(workspace = %workspace_root.display(), "Configuration loaded");
        config.try_deserialize()
    }

    /// Load configuration from exactly one file layered over defaults
    pub fn load_from_file(path: &Path) -> Result<DomDiffConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults without consulting any source
    pub fn defaults() -> DomDiffConfig {
        DomDiffConfig::default()
    }
}
