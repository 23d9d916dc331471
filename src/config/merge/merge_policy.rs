//! Merge rules: defaults, override order, conflict handling.

use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
///
/// Later sources override earlier ones key by key, so a file that only sets
/// `[diff] root_label` keeps every other default.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("input.first", "dom1.html")?
        .set_default("input.second", "dom2.html")?
        .set_default("output.path", "output.json")?
        .set_default("output.pretty", true)?
        .set_default("tree.root_tag", "html")?
        .set_default("tree.keep_comments", true)?
        .set_default("diff.root_label", "root")
}
