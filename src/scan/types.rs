use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single class token extracted from a `class` attribute
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleMatch {
    /// The validated class token
    pub class_name: String,

    /// The enclosing tag, from the nearest `<` to the nearest `>` on the same line
    pub tag: String,

    /// 1-indexed physical line the attribute was found on
    pub line: usize,

    /// Path to the file where this class was found
    pub file_path: PathBuf,
}

/// Statistics about the scanning process
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanStats {
    /// Total number of markup files considered
    pub total_files: usize,

    /// Number of files that yielded at least one class token
    pub files_with_matches: usize,

    /// Number of empty files encountered
    pub empty_files: usize,

    /// Number of files that could not be read
    pub error_files: usize,

    /// Paths to files that could not be read
    pub error_file_paths: Vec<PathBuf>,
}

/// Configuration options for a scan
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Markup file extensions to scan, matched case-insensitively
    pub extensions: Vec<String>,

    /// Whether to follow symbolic links during the walk
    pub follow_links: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            extensions: ["html", "htm", "php", "jsx", "tsx", "vue"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            follow_links: true,
        }
    }
}

/// Finalized result of scanning a directory tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Every extracted class token, in walk order
    pub matches: Vec<StyleMatch>,

    /// Total number of class tokens found; always equals `matches.len()`
    pub total_matches: usize,

    /// Number of class tokens found per visited directory, zero entries included
    pub directory_counts: BTreeMap<PathBuf, usize>,

    /// Lexicographically sorted set of distinct class tokens
    pub unique_classes: Vec<String>,

    /// Statistics about the scanning process
    pub stats: ScanStats,
}
