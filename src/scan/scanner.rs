use std::path::Path;

use anyhow::Result;
use log::{info, warn};

use crate::scan::aggregator::Aggregator;
use crate::scan::extractor::ClassExtractor;
use crate::scan::file_collector::FileCollector;
use crate::scan::noise::strip_noise;
use crate::scan::types::{ScanOptions, ScanResult};
use crate::utils::file_utils;

/// Style scanner responsible for walking a directory tree and extracting
/// class tokens from markup files
#[derive(Debug)]
pub struct StyleScanner {
    /// Configuration options for scanning
    options: ScanOptions,

    /// File collector for finding markup files
    file_collector: FileCollector,

    /// Extractor for class tokens
    extractor: ClassExtractor,
}

impl StyleScanner {
    /// Create a new style scanner with the given options
    pub fn new(options: ScanOptions) -> Self {
        Self {
            file_collector: FileCollector::from_options(&options),
            extractor: ClassExtractor::new(),
            options,
        }
    }

    /// Create a new style scanner with default options
    pub fn with_defaults() -> Self {
        Self::new(ScanOptions::default())
    }

    /// Scan a directory tree and return the finalized result.
    ///
    /// Fails only when the root is not a directory. Files are processed one
    /// at a time, strictly in sequence: read, strip noise, extract, record.
    /// A file that cannot be read is logged, counted in the stats, and
    /// skipped; the walk always continues to the next file.
    pub fn scan_directory(&self, root: impl AsRef<Path>) -> Result<ScanResult> {
        let root = root.as_ref();
        info!("Scanning directory: {}", root.display());

        let tree = self.file_collector.collect(root)?;
        info!("Found {} markup files to process", tree.files.len());

        let mut aggregator = Aggregator::new();
        for dir in &tree.directories {
            aggregator.visit_directory(dir);
        }

        for file in &tree.files {
            let dir = file.parent().unwrap_or(root);
            match file_utils::read_file_to_string(file) {
                Ok(content) => {
                    if content.trim().is_empty() {
                        aggregator.record_empty(file);
                        continue;
                    }
                    let cleaned = strip_noise(&content);
                    let matches = self.extractor.extract(&cleaned, file);
                    aggregator.add_matches(dir, matches);
                }
                Err(e) => {
                    warn!("Skipping file {}: {:#}", file.display(), e);
                    aggregator.record_error(file);
                }
            }
        }

        let result = aggregator.finish();
        info!(
            "Processed {} files, found {} class tokens ({} unique)",
            result.stats.total_files,
            result.total_matches,
            result.unique_classes.len()
        );
        Ok(result)
    }

    /// Get the options this scanner was built with
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }
}
