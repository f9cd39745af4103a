use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use log::debug;

use crate::scan::types::{ScanResult, ScanStats, StyleMatch};

/// Incremental accumulator for one scan invocation.
///
/// Constructed at scan start, fed by the walk loop, and consumed by
/// [`Aggregator::finish`]; nothing observes partial state. The lifecycle is
/// scoped to a single scan, not the process.
#[derive(Debug, Default)]
pub struct Aggregator {
    matches: Vec<StyleMatch>,
    directory_counts: BTreeMap<PathBuf, usize>,
    unique_classes: HashSet<String>,
    stats: ScanStats,
}

impl Aggregator {
    /// Create an empty aggregator
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a visited directory so zero-match directories still appear
    /// in the final per-directory counts.
    pub fn visit_directory(&mut self, dir: impl AsRef<Path>) {
        self.directory_counts
            .entry(dir.as_ref().to_path_buf())
            .or_insert(0);
    }

    /// Record the extraction outcome for one scanned file.
    ///
    /// The unique-class set is fed from emitted records only, so it can
    /// never contain a token that has no record.
    pub fn add_matches(&mut self, dir: impl AsRef<Path>, matches: Vec<StyleMatch>) {
        self.stats.total_files += 1;
        if matches.is_empty() {
            return;
        }

        self.stats.files_with_matches += 1;
        *self
            .directory_counts
            .entry(dir.as_ref().to_path_buf())
            .or_insert(0) += matches.len();
        for style_match in &matches {
            self.unique_classes.insert(style_match.class_name.clone());
        }
        self.matches.extend(matches);
    }

    /// Record a file whose content was empty
    pub fn record_empty(&mut self, file: impl AsRef<Path>) {
        debug!("Empty file found: {}", file.as_ref().display());
        self.stats.total_files += 1;
        self.stats.empty_files += 1;
    }

    /// Record a file that could not be read
    pub fn record_error(&mut self, file: impl AsRef<Path>) {
        self.stats.total_files += 1;
        self.stats.error_files += 1;
        self.stats.error_file_paths.push(file.as_ref().to_path_buf());
    }

    /// Freeze the accumulated state into an immutable scan result.
    pub fn finish(self) -> ScanResult {
        let mut unique_classes: Vec<String> = self.unique_classes.into_iter().collect();
        unique_classes.sort();

        let total_matches = self.matches.len();
        ScanResult {
            matches: self.matches,
            total_matches,
            directory_counts: self.directory_counts,
            unique_classes,
            stats: self.stats,
        }
    }
}
