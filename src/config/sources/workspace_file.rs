//! Workspace config file source: <workspace>/domdiff.toml

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Name of the per-workspace configuration file
pub const WORKSPACE_CONFIG_FILE: &str = "domdiff.toml";

/// Add the workspace config file to builder when present.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
    workspace_root: &Path,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let config_path = workspace_root.join(WORKSPACE_CONFIG_FILE);
    if !config_path.exists() {
        return Ok(builder);
    }

    debug!(config_path = %config_path.display(), "Using workspace configuration");
    Ok(builder.add_source(File::from(config_path.as_path()).required(false)))
}
