//! CLI presentation: text formatters for comparison and hash results.

use crate::report::ComparisonReport;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use owo_colors::OwoColorize;
use std::path::Path;

/// Summary table followed by every difference record in order.
pub fn format_comparison_text(report: &ComparisonReport, first: &Path, second: &Path) -> String {
    let summary = report.summary();

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Document", "Digest", "Nodes"]);
    table.add_row(vec![
        first.display().to_string(),
        report.hash1.clone(),
        report.tree1.subtree_size().to_string(),
    ]);
    table.add_row(vec![
        second.display().to_string(),
        report.hash2.clone(),
        report.tree2.subtree_size().to_string(),
    ]);

    let mut s = table.to_string();

    if summary.is_empty() {
        s.push_str(&format!("\n\n{}", "Documents are identical".green()));
        return s;
    }

    s.push_str(&format!(
        "\n\n{} ({} total: {} tag, {} attribute, {} text, {} child count, {} extra, {} missing)",
        "Documents differ".red(),
        summary.total,
        summary.tag,
        summary.attribute,
        summary.content,
        summary.child_count,
        summary.extra,
        summary.missing
    ));
    for difference in &report.comparison {
        s.push_str(&format!("\n  - {}", difference));
    }
    s
}

/// One `<digest>  <path>` line per document.
pub fn format_hash_lines(entries: &[(String, &Path)]) -> String {
    entries
        .iter()
        .map(|(digest, path)| format!("{}  {}", digest, path.display()))
        .collect::<Vec<_>>()
        .join("\n")
}
