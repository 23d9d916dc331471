//! Integration tests for configuration driving the comparison

use super::test_utils::{page, write_doc};
use domdiff::cli::{Commands, OutputFormat, RunContext};
use domdiff::config::{ConfigLoader, DomDiffConfig};
use std::path::PathBuf;
use tempfile::TempDir;

fn compare(format: OutputFormat) -> Commands {
    Commands::Compare {
        first: None,
        second: None,
        output: None,
        format,
        exit_code: true,
        compact: false,
    }
}

#[test]
fn test_workspace_config_controls_inputs_and_label() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "old.html", &page("<p>a</p>"));
    write_doc(temp_dir.path(), "new.html", &page("<p>b</p>"));
    std::fs::write(
        temp_dir.path().join("domdiff.toml"),
        r#"
[input]
first = "old.html"
second = "new.html"

[output]
path = "diff.json"

[diff]
root_label = "doc"
"#,
    )
    .unwrap();

    let context = RunContext::new(temp_dir.path().to_path_buf(), None).unwrap();
    let outcome = context.execute(&compare(OutputFormat::Json)).unwrap();
    assert_eq!(outcome.exit_code, 1);

    let written = std::fs::read_to_string(temp_dir.path().join("diff.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(
        value["comparison"][0],
        "doc > html[0] > body[0] > p[0]: Text content mismatch (a != b)"
    );
}

#[test]
fn test_pruned_tags_from_config() {
    let temp_dir = TempDir::new().unwrap();
    write_doc(temp_dir.path(), "dom1.html", &page("<p>a</p><noscript>x</noscript>"));
    write_doc(temp_dir.path(), "dom2.html", &page("<p>a</p><noscript>y</noscript>"));
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(
        &config_path,
        "[tree]\npruned_tags = [\"script\", \"style\", \"noscript\"]\n",
    )
    .unwrap();

    let config = ConfigLoader::load_from_file(&config_path).unwrap();
    let context = RunContext::with_config(temp_dir.path().to_path_buf(), config).unwrap();
    let outcome = context.execute(&compare(OutputFormat::Text)).unwrap();
    assert_eq!(outcome.exit_code, 0);
    assert!(outcome.output.contains("Documents are identical"));
}

#[test]
fn test_invalid_workspace_config_rejected() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("domdiff.toml"),
        "[tree]\nroot_tag = \"html\"\npruned_tags = [\"html\"]\n",
    )
    .unwrap();
    assert!(RunContext::new(temp_dir.path().to_path_buf(), None).is_err());
}

#[test]
fn test_explicit_config_ignores_workspace_file() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join("domdiff.toml"),
        "[output]\npath = \"workspace.json\"\n",
    )
    .unwrap();
    let explicit = temp_dir.path().join("explicit.toml");
    std::fs::write(&explicit, "[output]\npath = \"explicit.json\"\n").unwrap();

    let context = RunContext::new(temp_dir.path().to_path_buf(), Some(explicit)).unwrap();
    assert_eq!(context.config().output.path, PathBuf::from("explicit.json"));
    assert_ne!(context.config(), &DomDiffConfig::default());
}
