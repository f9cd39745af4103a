use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::scan::types::ScanResult;

/// Render the plain-text report body for a finalized scan.
///
/// Header, unique-class summary, per-directory counts, then one line per
/// record formatted as `class; tag; line N; path`.
pub fn render(result: &ScanResult, root: &Path, now: DateTime<Local>) -> String {
    let mut lines = Vec::new();

    lines.push("Style class scan report".to_string());
    lines.push(format!("Date: {}", now.format("%Y-%m-%d %H:%M:%S")));
    lines.push(format!("Scanned root: {}", root.display()));
    lines.push(format!("Total classes found: {}", result.total_matches));
    lines.push(format!("Unique classes: {}", result.unique_classes.len()));
    lines.push(format!(
        "Unique class list: {}",
        result.unique_classes.join(", ")
    ));

    lines.push(String::new());
    lines.push("Scanned directories:".to_string());
    for (dir, count) in &result.directory_counts {
        lines.push(format!("- {} (classes found: {})", dir.display(), count));
    }

    lines.push(String::new());
    lines.push("Found classes:".to_string());
    for style_match in &result.matches {
        lines.push(format!(
            "{}; {}; line {}; {}",
            style_match.class_name,
            style_match.tag,
            style_match.line,
            style_match.file_path.display()
        ));
    }

    lines.join("\n")
}

/// Suggested destination for a rendered report: a `reports/` directory next
/// to the executable, with a name combining the scanned root's base name
/// and the timestamp so runs on the same root never collide.
pub fn report_path(root: &Path, now: DateTime<Local>) -> Result<PathBuf> {
    let base_name = root
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "scan".to_string());
    let file_name = format!("report-{}-{}.txt", base_name, now.format("%Y%m%d-%H%M%S"));

    let exe = std::env::current_exe().context("Failed to resolve executable path")?;
    let tool_dir = exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(tool_dir.join("reports").join(file_name))
}
